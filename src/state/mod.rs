//! Component and gallery state
//!
//! Plain state structs with mutators, wrapped in GPUI entities by their
//! owning views. Splitting state from rendering keeps every transition
//! unit-testable without a window.

pub mod carousel;
pub mod expand;
pub mod gallery;
pub mod pagination;
pub mod settings;
pub mod snackbar;
pub mod stepper;
