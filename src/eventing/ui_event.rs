//! UiEvent - Application Event Enum
//!
//! Events flowing from components and demo pages to the workspace
//! dispatcher.

use uuid::Uuid;

use crate::i18n::Locale;
use crate::state::snackbar::Snackbar;
use crate::theme::{Density, ThemeMode};

/// Events for component -> workspace communication
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Queue a snackbar on the toast layer
    ShowSnackbar { snackbar: Snackbar },

    /// Remove a snackbar (manual dismissal or timer expiry)
    DismissSnackbar { id: Uuid },

    /// Switch the color scheme
    SetThemeMode { mode: ThemeMode },

    /// Switch layout density
    SetDensity { density: Density },

    /// Switch the UI language
    SetLocale { locale: Locale },

    /// Route the gallery to a registry entry
    Navigate { id: String },
}

impl UiEvent {
    /// Queue a plain snackbar message
    pub fn snackbar(message: impl Into<gpui::SharedString>) -> Self {
        Self::ShowSnackbar {
            snackbar: Snackbar::new(message),
        }
    }

    /// Route to a registry entry by id
    pub fn navigate(id: impl Into<String>) -> Self {
        Self::Navigate { id: id.into() }
    }
}
