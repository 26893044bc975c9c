//! Input row widget: label, text box, unit selector, readout

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::ThemeColors;

const LABEL_WIDTH: usize = 8;
const BOX_WIDTH: usize = 14;

/// Renders one input row (2 lines)
pub struct FieldRow<'a> {
    label: &'a str,
    value: &'a str,
    unit: &'a str,
    readout: Option<String>,
    theme: &'a ThemeColors,
    value_focused: bool,
    unit_focused: bool,
}

impl<'a> FieldRow<'a> {
    pub fn new(label: &'a str, value: &'a str, unit: &'a str, theme: &'a ThemeColors) -> Self {
        Self {
            label,
            value,
            unit,
            readout: None,
            theme,
            value_focused: false,
            unit_focused: false,
        }
    }

    pub fn readout(mut self, readout: Option<String>) -> Self {
        self.readout = readout;
        self
    }

    pub fn value_focused(mut self, focused: bool) -> Self {
        self.value_focused = focused;
        self
    }

    pub fn unit_focused(mut self, focused: bool) -> Self {
        self.unit_focused = focused;
        self
    }
}

impl Widget for FieldRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let theme = self.theme;

        let cursor = if self.value_focused { "█" } else { "" };
        let text = format!("{}{}", tail(self.value, BOX_WIDTH - 1), cursor);
        let unit_marker = if self.unit_focused { "◂ ▸" } else { "" };

        let line1 = Line::from(vec![
            Span::styled(
                format!("  {:<width$}", self.label, width = LABEL_WIDTH),
                theme.text_muted(),
            ),
            Span::styled(
                format!(" {:<width$} ", text, width = BOX_WIDTH),
                theme.field(self.value_focused),
            ),
            Span::raw("  "),
            Span::styled(format!(" {:^8} ", self.unit), theme.field(self.unit_focused)),
            Span::styled(format!(" {}", unit_marker), theme.key()),
        ]);
        Paragraph::new(line1).render(Rect { height: 1, ..area }, buf);

        if area.height < 2 {
            return;
        }

        let line2 = match self.readout {
            Some(readout) => Line::from(Span::styled(
                format!("  {:<width$} = {}", "", readout, width = LABEL_WIDTH),
                theme.text_dimmed(),
            )),
            None => Line::from(""),
        };
        Paragraph::new(line2).render(
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
            buf,
        );
    }
}

/// Last `max` characters, so the end being typed stays visible
fn tail(s: &str, max: usize) -> &str {
    let count = s.chars().count();
    if count <= max {
        return s;
    }
    let skip = count - max;
    s.char_indices().nth(skip).map(|(i, _)| &s[i..]).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeKind;

    fn render(row: FieldRow, width: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, 2);
        let mut buf = Buffer::empty(area);
        row.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_tail_short_string_unchanged() {
        assert_eq!(tail("123", 5), "123");
    }

    #[test]
    fn test_tail_keeps_end() {
        assert_eq!(tail("1234567", 3), "567");
    }

    #[test]
    fn test_row_shows_label_value_and_unit() {
        let theme = ThemeKind::default().colors();
        let lines = render(
            FieldRow::new("Size", "10", "GB", theme).readout(Some("10 GiB".into())),
            60,
        );
        assert!(lines[0].contains("Size"));
        assert!(lines[0].contains("10"));
        assert!(lines[0].contains("GB"));
        assert!(lines[1].contains("= 10 GiB"));
    }

    #[test]
    fn test_focus_markers() {
        let theme = ThemeKind::default().colors();
        let lines = render(FieldRow::new("Speed", "5", "Mbit/s", theme).value_focused(true), 60);
        assert!(lines[0].contains("5█"));
        assert!(!lines[0].contains("◂ ▸"));

        let lines = render(FieldRow::new("Speed", "5", "Mbit/s", theme).unit_focused(true), 60);
        assert!(lines[0].contains("◂ ▸"));
        assert!(lines[1].trim().is_empty());
    }
}
