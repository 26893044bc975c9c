//! Application state
//!
//! The terminal form owns the six controls and implements [`Document`], so
//! the estimator binds to it exactly as it would to any other surface.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::BindError;
use crate::estimate::{ChronoFormatter, NOT_AVAILABLE};
use crate::form::{bind, Binding, Control, ControlId, Document, FormEvent, UpdateHandler};
use crate::input::KeyPreset;
use crate::theme::ThemeKind;
use crate::units::{SizeUnit, SpeedUnit};

/// Free-text input; the caret is always at the end
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub text: String,
}

impl Control for TextField {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// One option of a unit selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitOption {
    pub label: &'static str,
    pub display: &'static str,
}

/// Fixed list of unit options with one selected
#[derive(Debug, Clone)]
pub struct UnitSelect {
    options: Vec<UnitOption>,
    selected: usize,
}

impl UnitSelect {
    pub fn sizes(initial: SizeUnit) -> Self {
        let options = SizeUnit::ALL
            .iter()
            .map(|u| UnitOption {
                label: u.label(),
                display: u.label(),
            })
            .collect();
        Self::with_selected(options, initial.label())
    }

    pub fn speeds(initial: SpeedUnit) -> Self {
        let options = SpeedUnit::ALL
            .iter()
            .map(|u| UnitOption {
                label: u.label(),
                display: u.display_name(),
            })
            .collect();
        Self::with_selected(options, initial.label())
    }

    fn with_selected(options: Vec<UnitOption>, label: &str) -> Self {
        let selected = options.iter().position(|o| o.label == label).unwrap_or(0);
        Self { options, selected }
    }

    pub fn selected(&self) -> Option<&UnitOption> {
        self.options.get(self.selected)
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }
}

impl Control for UnitSelect {
    fn value(&self) -> String {
        self.selected()
            .map(|o| o.label.to_string())
            .unwrap_or_default()
    }

    /// Selects the option with this label; unknown labels are ignored
    fn set_text(&mut self, text: &str) {
        if let Some(i) = self.options.iter().position(|o| o.label == text) {
            self.selected = i;
        }
    }
}

/// Read-only text target
#[derive(Debug, Clone, Default)]
pub struct OutputLabel {
    pub text: String,
}

impl Control for OutputLabel {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// The six controls of the estimator form
#[derive(Debug, Clone)]
pub struct EstimatorForm {
    pub size_value: TextField,
    pub size_unit: UnitSelect,
    pub speed_value: TextField,
    pub speed_unit: UnitSelect,
    pub time: OutputLabel,
    pub date: OutputLabel,
}

impl EstimatorForm {
    pub fn new(size_unit: SizeUnit, speed_unit: SpeedUnit) -> Self {
        Self {
            size_value: TextField::default(),
            size_unit: UnitSelect::sizes(size_unit),
            speed_value: TextField::default(),
            speed_unit: UnitSelect::speeds(speed_unit),
            time: OutputLabel::default(),
            date: OutputLabel::default(),
        }
    }

    fn text_field_mut(&mut self, id: ControlId) -> Option<&mut TextField> {
        match id {
            ControlId::SizeValue => Some(&mut self.size_value),
            ControlId::SpeedValue => Some(&mut self.speed_value),
            _ => None,
        }
    }

    fn unit_select_mut(&mut self, id: ControlId) -> Option<&mut UnitSelect> {
        match id {
            ControlId::SizeUnit => Some(&mut self.size_unit),
            ControlId::SpeedUnit => Some(&mut self.speed_unit),
            _ => None,
        }
    }
}

impl Default for EstimatorForm {
    fn default() -> Self {
        Self::new(SizeUnit::default(), SpeedUnit::default())
    }
}

impl Document for EstimatorForm {
    fn control(&self, id: ControlId) -> Option<&dyn Control> {
        let control: &dyn Control = match id {
            ControlId::SizeValue => &self.size_value,
            ControlId::SizeUnit => &self.size_unit,
            ControlId::SpeedValue => &self.speed_value,
            ControlId::SpeedUnit => &self.speed_unit,
            ControlId::Time => &self.time,
            ControlId::Date => &self.date,
        };
        Some(control)
    }

    fn control_mut(&mut self, id: ControlId) -> Option<&mut dyn Control> {
        let control: &mut dyn Control = match id {
            ControlId::SizeValue => &mut self.size_value,
            ControlId::SizeUnit => &mut self.size_unit,
            ControlId::SpeedValue => &mut self.speed_value,
            ControlId::SpeedUnit => &mut self.speed_unit,
            ControlId::Time => &mut self.time,
            ControlId::Date => &mut self.date,
        };
        Some(control)
    }
}

#[derive(Debug)]
pub struct App {
    pub form: EstimatorForm,
    pub focus: ControlId,
    pub theme: ThemeKind,
    pub key_preset: KeyPreset,
    pub show_help: bool,
    pub should_quit: bool,
    /// One-line feedback shown in the footer until the next key
    pub notice: Option<String>,
    formatter: ChronoFormatter,
    binding: Option<Binding>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            form: EstimatorForm::default(),
            focus: ControlId::SizeValue,
            theme: ThemeKind::default(),
            key_preset: KeyPreset::default(),
            show_help: false,
            should_quit: false,
            notice: None,
            formatter: ChronoFormatter::default(),
            binding: None,
        }
    }

    /// Builder method: Set theme by name
    pub fn with_theme_name(mut self, name: &str) -> Self {
        self.theme = ThemeKind::from_name(name);
        self
    }

    /// Builder method: Set key preset by name
    pub fn with_key_preset_name(mut self, name: &str) -> Self {
        self.key_preset = KeyPreset::from_name(name);
        self
    }

    /// Builder method: Set the units selected at startup
    pub fn with_units(mut self, size: SizeUnit, speed: SpeedUnit) -> Self {
        self.form = EstimatorForm::new(size, speed);
        self
    }

    /// Builder method: Set the date formatter
    pub fn with_formatter(mut self, formatter: ChronoFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Bind the estimator to the form. Call once the form is ready, before
    /// any key is handled; later calls are ignored.
    pub fn on_ready(&mut self) -> Result<(), BindError> {
        if self.binding.is_some() {
            tracing::debug!("Ready signal repeated, already bound");
            return Ok(());
        }
        tracing::debug!("Date pattern: {}", self.formatter.pattern());
        let handler = UpdateHandler::new(self.formatter.clone());
        self.binding = Some(bind(&mut self.form, handler)?);
        Ok(())
    }

    /// True when both outputs hold a computed estimate
    pub fn has_estimate(&self) -> bool {
        self.form.time.text != NOT_AVAILABLE && !self.form.time.text.is_empty()
    }

    fn dispatch(&mut self, event: FormEvent) {
        if let Some(binding) = &self.binding {
            binding.dispatch(&mut self.form, event);
        }
    }

    fn focus_step(&mut self, forward: bool) {
        let inputs = ControlId::INPUTS;
        let i = inputs.iter().position(|&id| id == self.focus).unwrap_or(0);
        let next = if forward {
            (i + 1) % inputs.len()
        } else {
            (i + inputs.len() - 1) % inputs.len()
        };
        self.focus = inputs[next];
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        let typing = self.focus.is_numeric();
        if self.key_preset.is_next_field(&key, typing) || (typing && key.code == KeyCode::Enter) {
            self.focus_step(true);
            return;
        }
        if self.key_preset.is_prev_field(&key, typing) {
            self.focus_step(false);
            return;
        }

        if typing {
            self.handle_text_key(key);
        } else {
            self.handle_select_key(key);
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let target = self.focus;
        let Some(field) = self.form.text_field_mut(target) else {
            return;
        };

        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.text.clear();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.text.push(c);
            }
            KeyCode::Backspace => {
                field.text.pop();
            }
            _ => return,
        }

        self.dispatch(FormEvent::input(target));
    }

    fn handle_select_key(&mut self, key: KeyEvent) {
        let target = self.focus;

        if self.key_preset.is_next_unit(&key) || self.key_preset.is_prev_unit(&key) {
            let forward = self.key_preset.is_next_unit(&key);
            if let Some(select) = self.form.unit_select_mut(target) {
                if forward {
                    select.next();
                } else {
                    select.prev();
                }
                self.dispatch(FormEvent::change(target));
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('t') => {
                self.theme = self.theme.next();
                self.notice = Some(format!("Theme: {}", self.theme.name()));
            }
            KeyCode::Char('y') => self.copy_estimate(),
            _ => {}
        }
    }

    /// Text placed on the clipboard by `y`
    pub fn estimate_text(&self) -> Option<String> {
        self.has_estimate()
            .then(|| format!("{} (done {})", self.form.time.text, self.form.date.text))
    }

    fn copy_estimate(&mut self) {
        let Some(text) = self.estimate_text() else {
            self.notice = Some("Nothing to copy yet".to_string());
            return;
        };

        // OSC 52 reaches the local terminal over SSH where arboard can't
        let sent_osc52 = copy_to_clipboard_osc52(&text);

        match arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
            Ok(()) => self.notice = Some("Copied estimate".to_string()),
            Err(e) if sent_osc52 => {
                tracing::debug!("Clipboard unavailable, sent OSC 52 only: {}", e);
                self.notice = Some("Copied estimate via terminal".to_string());
            }
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                self.notice = Some("Clipboard unavailable".to_string());
            }
        }
    }
}

/// Terminal escape that asks the terminal to set the system clipboard
fn osc52_sequence(text: &str) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine};
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Write an OSC 52 copy to the controlling terminal. Returns false if there
/// is no terminal to write to.
fn copy_to_clipboard_osc52(text: &str) -> bool {
    use std::io::Write;
    let Ok(mut tty) = std::fs::OpenOptions::new().write(true).open("/dev/tty") else {
        return false;
    };
    tty.write_all(osc52_sequence(text).as_bytes())
        .and_then(|()| tty.flush())
        .is_ok()
}
