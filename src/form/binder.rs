//! One-time wiring of the update handler to a document

use std::collections::HashMap;

use super::sanitize::sanitize;
use super::{ControlId, Document, DocumentPort, UpdateHandler};
use crate::error::BindError;

/// What happened to a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Text changed while typing
    Input,
    /// Selection changed
    Change,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormEvent {
    pub kind: EventKind,
    pub target: ControlId,
}

impl FormEvent {
    pub fn input(target: ControlId) -> Self {
        Self {
            kind: EventKind::Input,
            target,
        }
    }

    pub fn change(target: ControlId) -> Self {
        Self {
            kind: EventKind::Change,
            target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listener {
    /// Filter the target's text, then update
    Sanitizing,
    /// Update only
    Direct,
}

/// Registered listeners plus the handler they share
#[derive(Debug)]
pub struct Binding {
    handler: UpdateHandler,
    listeners: HashMap<(ControlId, EventKind), Listener>,
}

/// Resolve the controls, clear the numeric fields, register listeners and
/// run the handler once so the outputs start in a defined state.
///
/// # Errors
///
/// Returns [`BindError::MissingControl`] for the first id the document lacks.
pub fn bind<D: Document + ?Sized>(
    document: &mut D,
    handler: UpdateHandler,
) -> Result<Binding, BindError> {
    if let Some(missing) = ControlId::ALL
        .into_iter()
        .find(|&id| document.control(id).is_none())
    {
        return Err(BindError::MissingControl(missing));
    }

    for id in [ControlId::SizeValue, ControlId::SpeedValue] {
        if let Some(control) = document.control_mut(id) {
            control.set_text("");
        }
    }

    let listeners = ControlId::INPUTS
        .into_iter()
        .filter_map(|id| {
            if id.is_numeric() {
                Some(((id, EventKind::Input), Listener::Sanitizing))
            } else if id.is_unit() {
                Some(((id, EventKind::Change), Listener::Direct))
            } else {
                None
            }
        })
        .collect();

    let binding = Binding { handler, listeners };
    binding.refresh(document);
    tracing::info!("Bound estimator to {} controls", ControlId::ALL.len());
    Ok(binding)
}

impl Binding {
    /// Route an event to its listener. Returns false if nothing listens.
    pub fn dispatch<D: Document + ?Sized>(&self, document: &mut D, event: FormEvent) -> bool {
        let Some(listener) = self.listeners.get(&(event.target, event.kind)) else {
            tracing::trace!("No listener for {:?} on `{}`", event.kind, event.target);
            return false;
        };

        if *listener == Listener::Sanitizing {
            if let Some(control) = document.control_mut(event.target) {
                let filtered = sanitize(&control.value());
                control.set_text(&filtered);
            }
        }

        self.refresh(document);
        true
    }

    /// Run the handler against the document's current inputs
    pub fn refresh<D: Document + ?Sized>(&self, document: &mut D) {
        self.handler.update(&mut DocumentPort::new(document));
    }
}
