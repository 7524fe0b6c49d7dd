//! Icon Component

use gpui::{prelude::*, px, svg, App, Hsla, IntoElement, Pixels, RenderOnce, Window};

use crate::assets::IconName;
use crate::theme::ActiveTheme;

/// A themed SVG icon
#[derive(IntoElement)]
pub struct Icon {
    name: IconName,
    size: Pixels,
    color: Option<Hsla>,
}

impl Icon {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: px(20.0),
            color: None,
        }
    }

    pub fn size(mut self, size: Pixels) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let color = self
            .color
            .unwrap_or_else(|| cx.theme().colors.on_surface_variant.into());

        svg()
            .path(self.name.path())
            .size(self.size)
            .text_color(color)
            .flex_none()
    }
}
