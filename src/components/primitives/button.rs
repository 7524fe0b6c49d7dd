//! Button Component
//!
//! Common buttons in the five Material emphasis levels, plus the icon
//! button used in toolbars and headers.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, Hsla, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::theme::colors::hovered;
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

use super::icon::Icon;

/// Button emphasis level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// High-emphasis filled button
    #[default]
    Filled,
    /// Medium-emphasis tonal button
    Tonal,
    /// Filled button floating on a shadow
    Elevated,
    /// Medium-emphasis button with an outline
    Outlined,
    /// Low-emphasis text-only button
    Text,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    leading_icon: Option<IconName>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Filled,
            size: ButtonSize::Medium,
            disabled: false,
            leading_icon: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show an icon before the label
    pub fn leading_icon(mut self, icon: IconName) -> Self {
        self.leading_icon = Some(icon);
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a filled button
    pub fn filled(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Filled)
    }

    /// Create a tonal button
    pub fn tonal(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Tonal)
    }

    /// Create an outlined button
    pub fn outlined(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outlined)
    }

    /// Create a text button
    pub fn text(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Text)
    }
}

/// Per-variant container colors: (background, content, outline)
fn variant_colors(
    variant: ButtonVariant,
    cx: &App,
) -> (Option<Rgba>, Rgba, Option<Rgba>) {
    let colors = &cx.theme().colors;
    match variant {
        ButtonVariant::Filled => (Some(colors.primary), colors.on_primary, None),
        ButtonVariant::Tonal => (
            Some(colors.secondary_container),
            colors.on_secondary_container,
            None,
        ),
        ButtonVariant::Elevated => (
            Some(colors.surface_container_low),
            colors.primary,
            None,
        ),
        ButtonVariant::Outlined => (None, colors.primary, Some(colors.outline)),
        ButtonVariant::Text => (None, colors.primary, None),
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let (bg, content, outline) = variant_colors(self.variant, cx);
        let colors = cx.theme().colors;
        let density = cx.theme().density;

        let (height, padding_x, font_size) = match self.size {
            ButtonSize::Small => (density.control_height(32.0), px(12.0), px(TypeScale::LABEL_MEDIUM)),
            ButtonSize::Medium => (density.control_height(40.0), px(24.0), px(TypeScale::LABEL_LARGE)),
            ButtonSize::Large => (density.control_height(48.0), px(32.0), px(TypeScale::TITLE_MEDIUM)),
        };

        let (bg, content): (Option<Rgba>, Rgba) = if self.disabled {
            (
                bg.map(|_| colors.disabled_container()),
                colors.disabled_content(),
            )
        } else {
            (bg, content)
        };
        let content: Hsla = content.into();

        let mut element = div()
            .id(self.id)
            .h(height)
            .px(padding_x)
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .rounded_full()
            .text_size(font_size)
            .font_weight(gpui::FontWeight::MEDIUM)
            .text_color(content)
            .when_some(bg, |el, bg| el.bg(bg))
            .when_some(outline, |el, color| el.border_1().border_color(color))
            .when(self.variant == ButtonVariant::Elevated && !self.disabled, |el| {
                el.shadow_md()
            })
            .when_some(self.leading_icon, |el, name| {
                el.child(Icon::new(name).size(px(18.0)).color(content))
            })
            .child(self.label);

        if !self.disabled {
            element = element.cursor_pointer();
            element = match bg {
                Some(bg) => element.hover(move |s| s.bg(hovered(bg))),
                None => element.hover(move |s| s.bg(colors.hover_layer())),
            };

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

/// Icon button style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconButtonVariant {
    /// No container until hovered
    #[default]
    Standard,
    Filled,
    Tonal,
}

/// A compact button showing a single icon
#[derive(IntoElement)]
pub struct IconButton {
    id: ElementId,
    icon: IconName,
    variant: IconButtonVariant,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl IconButton {
    pub fn new(id: impl Into<ElementId>, icon: IconName) -> Self {
        Self {
            id: id.into(),
            icon,
            variant: IconButtonVariant::Standard,
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: IconButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for IconButton {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.theme().colors;
        let (bg, content): (Option<Rgba>, Rgba) = match self.variant {
            IconButtonVariant::Standard => (None, colors.on_surface_variant),
            IconButtonVariant::Filled => (Some(colors.primary), colors.on_primary),
            IconButtonVariant::Tonal => (
                Some(colors.secondary_container),
                colors.on_secondary_container,
            ),
        };
        let content = if self.disabled {
            colors.disabled_content()
        } else {
            content
        };

        let mut element = div()
            .id(self.id)
            .size(cx.theme().density.control_height(40.0))
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .when_some(bg, |el, bg| el.bg(bg))
            .child(Icon::new(self.icon).color(content));

        if !self.disabled {
            element = element.cursor_pointer();
            element = match bg {
                Some(bg) => element.hover(move |s| s.bg(hovered(bg))),
                None => element.hover(move |s| s.bg(colors.hover_layer())),
            };
            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
