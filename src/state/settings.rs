//! SettingsState - Persisted Gallery Preferences

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::theme::{Density, ThemeMode};
use crate::utils::config_store;

const SETTINGS_FILE: &str = "settings.toml";

/// User preferences persisted between gallery runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    pub theme_mode: ThemeMode,
    pub density: Density,
    pub locale: Locale,
}

/// Entity state wrapping the settings with persistence on change
#[derive(Debug, Default)]
pub struct SettingsState {
    settings: GallerySettings,
}

impl SettingsState {
    /// Load persisted settings, falling back to defaults on any error
    pub fn load() -> Self {
        let settings = match config_store::load_toml::<GallerySettings>(SETTINGS_FILE) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(%err, "failed to load gallery settings, using defaults");
                GallerySettings::default()
            }
        };
        Self { settings }
    }

    pub fn settings(&self) -> GallerySettings {
        self.settings
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.settings.theme_mode
    }

    pub fn density(&self) -> Density {
        self.settings.density
    }

    pub fn locale(&self) -> Locale {
        self.settings.locale
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.settings.theme_mode = mode;
        self.persist();
    }

    pub fn set_density(&mut self, density: Density) {
        self.settings.density = density;
        self.persist();
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.settings.locale = locale;
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = config_store::save_toml(SETTINGS_FILE, &self.settings) {
            tracing::warn!(%err, "failed to save gallery settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_toml_round_trip() {
        let settings = GallerySettings {
            theme_mode: ThemeMode::Dark,
            density: Density::Compact,
            locale: Locale::ZhCN,
        };
        let text = toml::to_string(&settings).expect("serialize");
        let back: GallerySettings = toml::from_str(&text).expect("deserialize");
        assert_eq!(back, settings);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let back: GallerySettings = toml::from_str("theme_mode = \"dark\"").expect("deserialize");
        assert_eq!(back.theme_mode, ThemeMode::Dark);
        assert_eq!(back.density, Density::Standard);
        assert_eq!(back.locale, Locale::EnUS);
    }
}
