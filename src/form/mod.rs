//! Form controls and the estimator's view of them
//!
//! A [`Document`] is whatever owns the six named controls; the terminal form
//! in `app` is one, tests use an in-memory one. Nothing in here knows how a
//! control is drawn.

pub mod binder;
pub mod sanitize;
pub mod update;

pub use binder::{bind, Binding, FormEvent};
pub use update::UpdateHandler;

use std::fmt;

/// Fixed identifiers of the controls the estimator binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    SizeValue,
    SizeUnit,
    SpeedValue,
    SpeedUnit,
    Time,
    Date,
}

impl ControlId {
    pub const ALL: [ControlId; 6] = [
        ControlId::SizeValue,
        ControlId::SizeUnit,
        ControlId::SpeedValue,
        ControlId::SpeedUnit,
        ControlId::Time,
        ControlId::Date,
    ];

    /// Controls the user edits, in focus order
    pub const INPUTS: [ControlId; 4] = [
        ControlId::SizeValue,
        ControlId::SizeUnit,
        ControlId::SpeedValue,
        ControlId::SpeedUnit,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            ControlId::SizeValue => "size-value",
            ControlId::SizeUnit => "size-unit",
            ControlId::SpeedValue => "speed-value",
            ControlId::SpeedUnit => "speed-unit",
            ControlId::Time => "time",
            ControlId::Date => "date",
        }
    }

    /// Free-text numeric field
    pub fn is_numeric(&self) -> bool {
        matches!(self, ControlId::SizeValue | ControlId::SpeedValue)
    }

    /// Unit selection control
    pub fn is_unit(&self) -> bool {
        matches!(self, ControlId::SizeUnit | ControlId::SpeedUnit)
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// A single addressable control
pub trait Control {
    /// Current value (field text, selected unit label, or displayed text)
    fn value(&self) -> String;

    /// Replace the displayed text
    fn set_text(&mut self, text: &str);
}

/// Owner of the controls, addressed by id
pub trait Document {
    fn control(&self, id: ControlId) -> Option<&dyn Control>;
    fn control_mut(&mut self, id: ControlId) -> Option<&mut dyn Control>;
}

/// Raw read of the four inputs at the moment of an event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub size_value: String,
    pub size_unit: String,
    pub speed_value: String,
    pub speed_unit: String,
}

/// Read the four inputs of a document. Missing controls read as empty.
pub fn snapshot<D: Document + ?Sized>(document: &D) -> Snapshot {
    let read = |id: ControlId| document.control(id).map(|c| c.value()).unwrap_or_default();
    Snapshot {
        size_value: read(ControlId::SizeValue),
        size_unit: read(ControlId::SizeUnit),
        speed_value: read(ControlId::SpeedValue),
        speed_unit: read(ControlId::SpeedUnit),
    }
}

/// The estimator's two-method window onto the form
pub trait FormPort {
    fn read_inputs(&self) -> Snapshot;
    fn write_outputs(&mut self, time: &str, date: &str);
}

/// [`FormPort`] over a [`Document`]
pub struct DocumentPort<'a, D: Document + ?Sized> {
    document: &'a mut D,
}

impl<'a, D: Document + ?Sized> DocumentPort<'a, D> {
    pub fn new(document: &'a mut D) -> Self {
        Self { document }
    }

    fn write(&mut self, id: ControlId, text: &str) {
        match self.document.control_mut(id) {
            Some(control) => control.set_text(text),
            None => tracing::warn!("Output control `{}` is gone", id),
        }
    }
}

impl<D: Document + ?Sized> FormPort for DocumentPort<'_, D> {
    fn read_inputs(&self) -> Snapshot {
        snapshot(&*self.document)
    }

    fn write_outputs(&mut self, time: &str, date: &str) {
        self.write(ControlId::Time, time);
        self.write(ControlId::Date, date);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Plain text control
    #[derive(Debug, Default)]
    pub(crate) struct FakeControl(pub String);

    impl Control for FakeControl {
        fn value(&self) -> String {
            self.0.clone()
        }

        fn set_text(&mut self, text: &str) {
            self.0 = text.to_string();
        }
    }

    /// In-memory document with every control present
    #[derive(Debug)]
    pub(crate) struct FakeDocument {
        pub controls: HashMap<ControlId, FakeControl>,
    }

    impl FakeDocument {
        pub fn new(size_unit: &str, speed_unit: &str) -> Self {
            let mut controls: HashMap<ControlId, FakeControl> = ControlId::ALL
                .iter()
                .map(|&id| (id, FakeControl::default()))
                .collect();
            controls.insert(ControlId::SizeUnit, FakeControl(size_unit.to_string()));
            controls.insert(ControlId::SpeedUnit, FakeControl(speed_unit.to_string()));
            Self { controls }
        }

        pub fn without(mut self, id: ControlId) -> Self {
            self.controls.remove(&id);
            self
        }

        pub fn text(&self, id: ControlId) -> &str {
            self.controls.get(&id).map(|c| c.0.as_str()).unwrap_or("")
        }

        pub fn type_into(&mut self, id: ControlId, text: &str) {
            if let Some(control) = self.controls.get_mut(&id) {
                control.0.push_str(text);
            }
        }
    }

    impl Document for FakeDocument {
        fn control(&self, id: ControlId) -> Option<&dyn Control> {
            self.controls.get(&id).map(|c| c as &dyn Control)
        }

        fn control_mut(&mut self, id: ControlId) -> Option<&mut dyn Control> {
            self.controls.get_mut(&id).map(|c| c as &mut dyn Control)
        }
    }

    #[test]
    fn test_selectors_unique() {
        let mut seen = std::collections::HashSet::new();
        for id in ControlId::ALL {
            assert!(seen.insert(id.selector()), "duplicate selector {}", id);
        }
    }

    #[test]
    fn test_control_kinds() {
        assert!(ControlId::SizeValue.is_numeric());
        assert!(ControlId::SpeedValue.is_numeric());
        assert!(ControlId::SizeUnit.is_unit());
        assert!(!ControlId::Time.is_numeric());
        assert!(!ControlId::Date.is_unit());
        assert!(ControlId::INPUTS.iter().all(|id| id.is_numeric() || id.is_unit()));
    }

    #[test]
    fn test_port_reads_snapshot() {
        let mut doc = FakeDocument::new("GB", "Mbs");
        doc.type_into(ControlId::SizeValue, "10");
        doc.type_into(ControlId::SpeedValue, "100");

        let port = DocumentPort::new(&mut doc);
        assert_eq!(
            port.read_inputs(),
            Snapshot {
                size_value: "10".into(),
                size_unit: "GB".into(),
                speed_value: "100".into(),
                speed_unit: "Mbs".into(),
            }
        );
    }

    #[test]
    fn test_port_writes_outputs() {
        let mut doc = FakeDocument::new("GB", "Mbs");
        DocumentPort::new(&mut doc).write_outputs("14 minutes", "later");
        assert_eq!(doc.text(ControlId::Time), "14 minutes");
        assert_eq!(doc.text(ControlId::Date), "later");
    }

    #[test]
    fn test_port_tolerates_missing_controls() {
        let mut doc = FakeDocument::new("GB", "Mbs").without(ControlId::SizeUnit);
        assert_eq!(DocumentPort::new(&mut doc).read_inputs().size_unit, "");

        let mut doc = FakeDocument::new("GB", "Mbs").without(ControlId::Date);
        DocumentPort::new(&mut doc).write_outputs("a", "b");
        assert_eq!(doc.text(ControlId::Time), "a");
        assert_eq!(doc.text(ControlId::Date), "");
    }
}
