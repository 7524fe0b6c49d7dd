//! EventBus - Global Event Emitter
//!
//! Holds the sending half of the workspace event channel so any component
//! with an `App` context can emit without threading the sender around.

use gpui::{App, Global};

use super::ui_event::UiEvent;

/// Sending half of the UI event channel, installed as a global
pub struct EventBus {
    tx: flume::Sender<UiEvent>,
}

impl Global for EventBus {}

impl EventBus {
    pub fn new(tx: flume::Sender<UiEvent>) -> Self {
        Self { tx }
    }

    /// Emit an event; a closed channel is a shutdown race, not an error
    /// worth surfacing to the user
    pub fn emit(&self, event: UiEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!("ui event dropped, channel closed");
        }
    }
}

/// Emit through the global bus, if installed
pub fn emit(cx: &App, event: UiEvent) {
    if let Some(bus) = cx.try_global::<EventBus>() {
        bus.emit(event);
    } else {
        tracing::warn!("event bus not installed, dropping event");
    }
}
