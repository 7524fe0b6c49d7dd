//! Theme - Color Schemes, Typography, and Density
//!
//! The active [`Theme`] is a GPUI global; components read it through the
//! [`ActiveTheme`] accessor trait.

pub mod colors;
pub mod typography;

use gpui::{App, Global, px, Pixels};
use serde::{Deserialize, Serialize};

use colors::ColorScheme;

/// Light or dark color scheme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Toggle between light and dark
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Layout density for interactive components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// Standard Material touch-target sizing
    #[default]
    Standard,
    /// Reduced vertical sizing for dense layouts
    Compact,
}

impl Density {
    /// Height of a control given its standard-density height
    pub fn control_height(&self, standard: f32) -> Pixels {
        match self {
            Density::Standard => px(standard),
            Density::Compact => px((standard - 8.0).max(24.0)),
        }
    }

    /// Vertical padding inside list rows and menu items
    pub fn row_padding(&self) -> Pixels {
        match self {
            Density::Standard => px(8.0),
            Density::Compact => px(4.0),
        }
    }
}

/// The active theme: mode, density, and the resolved color scheme
pub struct Theme {
    pub mode: ThemeMode,
    pub density: Density,
    pub colors: ColorScheme,
}

impl Global for Theme {}

impl Theme {
    pub fn new(mode: ThemeMode, density: Density) -> Self {
        Self {
            mode,
            density,
            colors: ColorScheme::for_mode(mode),
        }
    }

    /// Switch the color scheme mode, rebuilding the palette
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.colors = ColorScheme::for_mode(mode);
    }

    pub fn set_density(&mut self, density: Density) {
        self.density = density;
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default(), Density::default())
    }
}

/// Accessor for the global theme, callable on any context that derefs to `App`
pub trait ActiveTheme {
    fn theme(&self) -> &Theme;
}

impl ActiveTheme for App {
    fn theme(&self) -> &Theme {
        self.global::<Theme>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_compact_density_never_collapses() {
        assert_eq!(Density::Compact.control_height(40.0), px(32.0));
        assert_eq!(Density::Compact.control_height(24.0), px(24.0));
    }
}
