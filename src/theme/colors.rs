//! Colors - Material Design 3 Color Schemes
//!
//! Role-based palette following the MD3 baseline scheme. Components never
//! hardcode hex values; they read roles from the active scheme.

use gpui::{rgb, rgba, Hsla, Rgba};

use super::ThemeMode;

/// Shift a solid fill toward its hover state by nudging lightness away
/// from the nearest extreme
pub fn hovered(base: Rgba) -> Hsla {
    let mut c: Hsla = base.into();
    if c.l >= 0.5 {
        c.l = (c.l - 0.06).max(0.0);
    } else {
        c.l = (c.l + 0.06).min(1.0);
    }
    c
}

/// A resolved set of Material color roles
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Primary
    pub primary: Rgba,
    pub on_primary: Rgba,
    pub primary_container: Rgba,
    pub on_primary_container: Rgba,

    // Secondary
    pub secondary: Rgba,
    pub on_secondary: Rgba,
    pub secondary_container: Rgba,
    pub on_secondary_container: Rgba,

    // Tertiary
    pub tertiary_container: Rgba,
    pub on_tertiary_container: Rgba,

    // Error
    pub error: Rgba,
    pub on_error: Rgba,
    pub error_container: Rgba,
    pub on_error_container: Rgba,

    // Surfaces
    pub surface: Rgba,
    pub on_surface: Rgba,
    pub on_surface_variant: Rgba,
    pub surface_container_lowest: Rgba,
    pub surface_container_low: Rgba,
    pub surface_container: Rgba,
    pub surface_container_high: Rgba,
    pub surface_container_highest: Rgba,

    // Inverse
    pub inverse_surface: Rgba,
    pub inverse_on_surface: Rgba,
    pub inverse_primary: Rgba,

    // Outline
    pub outline: Rgba,
    pub outline_variant: Rgba,

    // Overlays
    pub scrim: Rgba,
    pub shadow: Rgba,
}

impl ColorScheme {
    /// Scheme for the given mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// MD3 baseline light scheme
    pub fn light() -> Self {
        Self {
            primary: rgb(0x6750a4),
            on_primary: rgb(0xffffff),
            primary_container: rgb(0xeaddff),
            on_primary_container: rgb(0x21005d),

            secondary: rgb(0x625b71),
            on_secondary: rgb(0xffffff),
            secondary_container: rgb(0xe8def8),
            on_secondary_container: rgb(0x1d192b),

            tertiary_container: rgb(0xffd8e4),
            on_tertiary_container: rgb(0x31111d),

            error: rgb(0xb3261e),
            on_error: rgb(0xffffff),
            error_container: rgb(0xf9dedc),
            on_error_container: rgb(0x410e0b),

            surface: rgb(0xfef7ff),
            on_surface: rgb(0x1d1b20),
            on_surface_variant: rgb(0x49454f),
            surface_container_lowest: rgb(0xffffff),
            surface_container_low: rgb(0xf7f2fa),
            surface_container: rgb(0xf3edf7),
            surface_container_high: rgb(0xece6f0),
            surface_container_highest: rgb(0xe6e0e9),

            inverse_surface: rgb(0x322f35),
            inverse_on_surface: rgb(0xf5eff7),
            inverse_primary: rgb(0xd0bcff),

            outline: rgb(0x79747e),
            outline_variant: rgb(0xcac4d0),

            scrim: rgba(0x00000066),
            shadow: rgba(0x00000033),
        }
    }

    /// MD3 baseline dark scheme
    pub fn dark() -> Self {
        Self {
            primary: rgb(0xd0bcff),
            on_primary: rgb(0x381e72),
            primary_container: rgb(0x4f378b),
            on_primary_container: rgb(0xeaddff),

            secondary: rgb(0xccc2dc),
            on_secondary: rgb(0x332d41),
            secondary_container: rgb(0x4a4458),
            on_secondary_container: rgb(0xe8def8),

            tertiary_container: rgb(0x633b48),
            on_tertiary_container: rgb(0xffd8e4),

            error: rgb(0xf2b8b5),
            on_error: rgb(0x601410),
            error_container: rgb(0x8c1d18),
            on_error_container: rgb(0xf9dedc),

            surface: rgb(0x141218),
            on_surface: rgb(0xe6e0e9),
            on_surface_variant: rgb(0xcac4d0),
            surface_container_lowest: rgb(0x0f0d13),
            surface_container_low: rgb(0x1d1b20),
            surface_container: rgb(0x211f26),
            surface_container_high: rgb(0x2b2930),
            surface_container_highest: rgb(0x36343b),

            inverse_surface: rgb(0xe6e0e9),
            inverse_on_surface: rgb(0x322f35),
            inverse_primary: rgb(0x6750a4),

            outline: rgb(0x938f99),
            outline_variant: rgb(0x49454f),

            scrim: rgba(0x00000099),
            shadow: rgba(0x00000066),
        }
    }

    /// State-layer tint over an interactive surface (hover)
    pub fn hover_layer(&self) -> Rgba {
        let mut c = self.on_surface;
        c.a = 0.08;
        c
    }

    /// State-layer tint over an interactive surface (pressed)
    pub fn pressed_layer(&self) -> Rgba {
        let mut c = self.on_surface;
        c.a = 0.12;
        c
    }

    /// Disabled content color (38% on-surface)
    pub fn disabled_content(&self) -> Rgba {
        let mut c = self.on_surface;
        c.a = 0.38;
        c
    }

    /// Disabled container color (12% on-surface)
    pub fn disabled_container(&self) -> Rgba {
        let mut c = self.on_surface;
        c.a = 0.12;
        c
    }
}
