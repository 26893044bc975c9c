//! UI rendering

pub mod layout;
pub mod widgets;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::estimate::NOT_AVAILABLE;
use crate::form::{snapshot, update::Measurement, ControlId, Document};
use crate::theme::ThemeColors;
use layout::centered;
use widgets::field::FieldRow;
use widgets::readout::{format_bit_rate, format_bytes};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.theme.colors();
    let size = frame.area();

    frame.render_widget(Block::default().style(theme.background()), size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Form
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(frame, theme, chunks[0]);
    draw_form(frame, app, theme, chunks[1]);
    draw_footer(frame, app, theme, chunks[2]);

    if app.show_help {
        draw_help(frame, app, theme, size);
    }
}

fn draw_header(frame: &mut Frame, theme: &ThemeColors, area: Rect) {
    let time = chrono::Local::now().format("%I:%M %p").to_string();
    let title = "  ETA  download time estimator";
    let padding = area
        .width
        .saturating_sub((title.chars().count() + time.len() + 2) as u16) as usize;

    let header = Line::from(vec![
        Span::styled(title, theme.title()),
        Span::raw(" ".repeat(padding)),
        Span::styled(&time, theme.text_muted()),
        Span::raw("  "),
    ]);

    frame.render_widget(Paragraph::new(header).style(theme.bar()), area);
}

fn draw_form(frame: &mut Frame, app: &App, theme: &ThemeColors, area: Rect) {
    let width = 60.min(area.width.saturating_sub(4));
    let height = 13;
    let popup = centered(width, height, area);

    let block = Block::default()
        .title(Span::styled(" Estimate ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.border())
        .border_set(symbols::border::ROUNDED)
        .style(theme.panel());

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Size
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Speed
            Constraint::Length(1), // Divider
            Constraint::Min(2),    // Results
        ])
        .split(inner);

    let measurement = Measurement::from_snapshot(&snapshot(&app.form));
    let form = &app.form;
    let focus = app.focus;

    let size_unit = form.size_unit.selected().map(|o| o.display).unwrap_or("");
    let size_row = FieldRow::new("Size", &form.size_value.text, size_unit, theme)
        .readout(format_bytes(measurement.bytes))
        .value_focused(focus == ControlId::SizeValue)
        .unit_focused(focus == ControlId::SizeUnit);
    frame.render_widget(size_row, rows[1]);

    let speed_unit = form.speed_unit.selected().map(|o| o.display).unwrap_or("");
    let speed_row = FieldRow::new("Speed", &form.speed_value.text, speed_unit, theme)
        .readout(format_bit_rate(measurement.bits_per_second))
        .value_focused(focus == ControlId::SpeedValue)
        .unit_focused(focus == ControlId::SpeedUnit);
    frame.render_widget(speed_row, rows[3]);

    let divider = Paragraph::new(Line::from(Span::styled(
        "─".repeat(rows[4].width as usize),
        theme.border_dimmed(),
    )));
    frame.render_widget(divider, rows[4]);

    let output = |id: ControlId| {
        form.control(id)
            .map(|c| c.value())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };
    let result_style = |text: &str| {
        if text == NOT_AVAILABLE {
            theme.unavailable()
        } else {
            theme.estimate()
        }
    };

    let time = output(ControlId::Time);
    let date = output(ControlId::Date);
    let results = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("  {:<9}", "Time"), theme.text_muted()),
            Span::styled(time.as_str(), result_style(&time)),
        ]),
        Line::from(vec![
            Span::styled(format!("  {:<9}", "Done at"), theme.text_muted()),
            Span::styled(date.as_str(), result_style(&date)),
        ]),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(results, rows[5]);
}

fn draw_footer(frame: &mut Frame, app: &App, theme: &ThemeColors, area: Rect) {
    let line = if let Some(notice) = &app.notice {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(notice.as_str(), theme.notice()),
        ])
    } else {
        let hints = if app.focus.is_numeric() {
            "Tab/↑↓:field  0-9 , .:type  Ctrl+U:clear  Esc:quit"
        } else {
            "Tab/↑↓:field  ←→/Space:unit  y:copy  t:theme  ?:help  q:quit"
        };
        Line::from(vec![
            Span::raw("  "),
            Span::styled(hints, theme.text_dimmed()),
        ])
    };

    frame.render_widget(Paragraph::new(line).style(theme.bar()), area);
}

fn draw_help(frame: &mut Frame, app: &App, theme: &ThemeColors, area: Rect) {
    let width = 52.min(area.width.saturating_sub(4));
    let height = 17.min(area.height.saturating_sub(4));
    let popup = centered(width, height, area);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(" Help ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .border_set(symbols::border::ROUNDED)
        .style(theme.panel());

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let entry = |key: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), theme.key()),
            Span::styled(what, theme.text()),
        ])
    };

    let help = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(" Fields", theme.title())),
        entry("Tab ↑ ↓", "Next / previous field"),
        entry("0-9 , .", "Type a size or speed"),
        entry("Ctrl+U", "Clear field"),
        Line::from(""),
        Line::from(Span::styled(" Units", theme.title())),
        entry("← → h l", "Change unit"),
        entry("y", "Copy estimate"),
        entry("t", "Cycle theme"),
        Line::from(""),
        entry("q Esc", "Quit"),
        entry("Keys", app.key_preset.name()),
        Line::from(Span::styled(" Press any key to close", theme.text_dimmed())),
    ])
    .wrap(Wrap { trim: false });

    frame.render_widget(help, inner);
}
