//! UI eventing
//!
//! Components and demo pages emit [`UiEvent`]s through the [`EventBus`]
//! global; the workspace pumps the channel and dispatches to the owning
//! entities.

pub mod bus;
pub mod ui_event;

pub use bus::EventBus;
pub use ui_event::UiEvent;
