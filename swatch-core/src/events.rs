//! Notifications emitted by the picker

use std::sync::{Arc, Mutex};

use swatch_model::Swatch;

/// Callbacks fired by [`SwatchPicker`](crate::SwatchPicker). All methods
/// default to no-ops.
pub trait SwatchEvents {
    /// The externally visible swatch changed
    fn on_swatch_change(&mut self, _swatch: &Swatch) {}

    /// A swatch was added to the saved list
    fn on_swatch_save(&mut self, _swatch: &Swatch) {}

    /// A saved swatch was picked from the saved list
    fn on_saved_swatch_select(&mut self, _swatch: &Swatch) {}
}

/// Ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEvents;

impl SwatchEvents for NoopEvents {}

/// A single recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwatchEvent {
    /// See [`SwatchEvents::on_swatch_change`]
    Changed(Swatch),
    /// See [`SwatchEvents::on_swatch_save`]
    Saved(Swatch),
    /// See [`SwatchEvents::on_saved_swatch_select`]
    Selected(Swatch),
}

/// Shared log of notifications; clones observe the same log
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<SwatchEvent>>>,
}

impl EventRecorder {
    /// Empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: SwatchEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<SwatchEvent> {
        std::mem::take(
            &mut *self
                .events
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }

    /// Copy of everything recorded so far
    pub fn snapshot(&self) -> Vec<SwatchEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl SwatchEvents for EventRecorder {
    fn on_swatch_change(&mut self, swatch: &Swatch) {
        self.push(SwatchEvent::Changed(swatch.clone()));
    }

    fn on_swatch_save(&mut self, swatch: &Swatch) {
        self.push(SwatchEvent::Saved(swatch.clone()));
    }

    fn on_saved_swatch_select(&mut self, swatch: &Swatch) {
        self.push(SwatchEvent::Selected(swatch.clone()));
    }
}
