//! Embedded assets for the gallery
//!
//! Uses rust-embed to bundle icon SVGs at compile time.

use std::borrow::Cow;

use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

/// Icon names bundled with the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Bell,
    Check,
    CheckCircle,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    ChevronUp,
    Circle,
    Close,
    Compass,
    Moon,
    MoreVertical,
    Panels,
    Pencil,
    Pointer,
    Rows,
    Sun,
    Table,
}

impl IconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            IconName::Bell => "icons/bell.svg",
            IconName::Check => "icons/check.svg",
            IconName::CheckCircle => "icons/check-circle.svg",
            IconName::ChevronDown => "icons/chevron-down.svg",
            IconName::ChevronLeft => "icons/chevron-left.svg",
            IconName::ChevronRight => "icons/chevron-right.svg",
            IconName::ChevronUp => "icons/chevron-up.svg",
            IconName::Circle => "icons/circle.svg",
            IconName::Close => "icons/close.svg",
            IconName::Compass => "icons/compass.svg",
            IconName::Moon => "icons/moon.svg",
            IconName::MoreVertical => "icons/more-vertical.svg",
            IconName::Panels => "icons/panels.svg",
            IconName::Pencil => "icons/pencil.svg",
            IconName::Pointer => "icons/pointer.svg",
            IconName::Rows => "icons/rows.svg",
            IconName::Sun => "icons/sun.svg",
            IconName::Table => "icons/table.svg",
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_is_embedded() {
        for icon in [
            IconName::Bell,
            IconName::Check,
            IconName::CheckCircle,
            IconName::ChevronDown,
            IconName::ChevronLeft,
            IconName::ChevronRight,
            IconName::ChevronUp,
            IconName::Circle,
            IconName::Close,
            IconName::Compass,
            IconName::Moon,
            IconName::MoreVertical,
            IconName::Panels,
            IconName::Pencil,
            IconName::Pointer,
            IconName::Rows,
            IconName::Sun,
            IconName::Table,
        ] {
            assert!(
                Assets::get(&icon.path()).is_some(),
                "missing asset for {icon:?}"
            );
        }
    }
}
