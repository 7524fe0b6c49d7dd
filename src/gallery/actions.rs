//! Actions Page
//!
//! Demos for buttons and icon buttons.

use gpui::{prelude::*, Context, IntoElement, Render, Window};

use crate::app::entities::GalleryEntities;
use crate::assets::IconName;
use crate::components::primitives::button::{
    Button, ButtonSize, ButtonVariant, IconButton, IconButtonVariant,
};
use crate::eventing::{bus, UiEvent};

use super::{demo_row, page_scroll, DemoSection};

/// Demo page for the Actions category
pub struct ActionsPage {
    entities: GalleryEntities,
}

impl ActionsPage {
    pub fn new(entities: GalleryEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.gallery, |_, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |_, _, cx| cx.notify()).detach();
        Self { entities }
    }
}

impl Render for ActionsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.settings.read(cx).locale();
        let active = self.entities.gallery.read(cx).active_id();

        let variants = demo_row(
            "Variants",
            cx,
            [
                ("btn-filled", "Filled", ButtonVariant::Filled),
                ("btn-tonal", "Tonal", ButtonVariant::Tonal),
                ("btn-elevated", "Elevated", ButtonVariant::Elevated),
                ("btn-outlined", "Outlined", ButtonVariant::Outlined),
                ("btn-text", "Text", ButtonVariant::Text),
            ]
            .into_iter()
            .map(|(id, label, variant)| {
                Button::new(id, label)
                    .variant(variant)
                    .on_click(move |_, _, cx| {
                        bus::emit(cx, UiEvent::snackbar(format!("{label} button clicked")));
                    })
                    .into_any_element()
            })
            .collect(),
        );

        let sizes = demo_row(
            "Sizes",
            cx,
            [
                ("btn-small", "Small", ButtonSize::Small),
                ("btn-medium", "Medium", ButtonSize::Medium),
                ("btn-large", "Large", ButtonSize::Large),
            ]
            .into_iter()
            .map(|(id, label, size)| {
                Button::tonal(id, label).size(size).into_any_element()
            })
            .collect(),
        );

        let states = demo_row(
            "States",
            cx,
            vec![
                Button::filled("btn-disabled", "Disabled")
                    .disabled(true)
                    .into_any_element(),
                Button::tonal("btn-icon-leading", "With icon")
                    .leading_icon(IconName::Check)
                    .into_any_element(),
            ],
        );

        let icon_buttons = demo_row(
            "Icon buttons",
            cx,
            [
                ("icon-standard", IconButtonVariant::Standard),
                ("icon-filled", IconButtonVariant::Filled),
                ("icon-tonal", IconButtonVariant::Tonal),
            ]
            .into_iter()
            .map(|(id, variant)| {
                IconButton::new(id, IconName::Pencil)
                    .variant(variant)
                    .on_click(move |_, _, cx| {
                        bus::emit(cx, UiEvent::snackbar("Icon button clicked"));
                    })
                    .into_any_element()
            })
            .collect(),
        );

        page_scroll(
            "actions-page",
            vec![
                DemoSection::new("button", locale)
                    .highlighted(active == "button")
                    .child(variants)
                    .child(sizes)
                    .child(states)
                    .into_any_element(),
                DemoSection::new("icon-button", locale)
                    .highlighted(active == "icon-button")
                    .child(icon_buttons)
                    .into_any_element(),
            ],
        )
    }
}
