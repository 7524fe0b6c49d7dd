//! GalleryEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and
//! management, split by update frequency rather than one monolith state.

use gpui::{App, AppContext, Entity, Global};

use crate::components::composite::snackbar::SnackbarHost;
use crate::overlay::Overlays;
use crate::state::gallery::GalleryState;
use crate::state::settings::SettingsState;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct GalleryEntities {
    /// Persisted user preferences (theme mode, density, locale)
    pub settings: Entity<SettingsState>,
    /// Active registry entry (the gallery router)
    pub gallery: Entity<GalleryState>,
    /// Overlay layer manager for floating surfaces, dialogs, toasts
    pub overlays: Entity<Overlays>,
    /// Snackbar queue and timers
    pub snackbars: Entity<SnackbarHost>,
}

impl Global for GalleryEntities {}

impl GalleryEntities {
    /// Initialize all entities
    pub fn init(cx: &mut App) -> Self {
        Self {
            settings: cx.new(|_| SettingsState::load()),
            gallery: cx.new(|_| GalleryState::default()),
            overlays: cx.new(|_| Overlays::new()),
            snackbars: cx.new(|_| SnackbarHost::new()),
        }
    }
}
