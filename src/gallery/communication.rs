//! Communication Page
//!
//! Demos for snackbars and tooltips.

use gpui::{prelude::*, Context, Entity, IntoElement, Render, Window};

use crate::app::entities::GalleryEntities;
use crate::components::composite::tooltip::TooltipArea;
use crate::components::primitives::button::Button;
use crate::eventing::{bus, UiEvent};
use crate::floating::position::Side;
use crate::i18n::t;
use crate::state::snackbar::Snackbar;

use super::{demo_row, page_scroll, DemoSection};

/// Demo page for the Communication category
pub struct CommunicationPage {
    entities: GalleryEntities,
    tooltips: Vec<Entity<TooltipArea>>,
}

impl CommunicationPage {
    pub fn new(entities: GalleryEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.gallery, |_, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |_, _, cx| cx.notify()).detach();

        let sides = [
            ("tooltip-top", "Top", Side::Top),
            ("tooltip-bottom", "Bottom", Side::Bottom),
            ("tooltip-left", "Left", Side::Left),
            ("tooltip-right", "Right", Side::Right),
        ];
        let tooltips = sides
            .into_iter()
            .map(|(id, label, side)| {
                let overlays = entities.overlays.clone();
                cx.new(|cx| {
                    TooltipArea::new(id, overlays, format!("Anchored to the {label} side"), window, cx)
                        .side(side)
                        .area(move |_window, _cx| {
                            Button::outlined(("tooltip-target", side as usize), label)
                                .into_any_element()
                        })
                })
            })
            .collect();

        Self { entities, tooltips }
    }
}

impl Render for CommunicationPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.settings.read(cx).locale();
        let active = self.entities.gallery.read(cx).active_id();

        let show_label = t(locale, "demo-show-snackbar");
        let dismiss_label = t(locale, "demo-dismiss");

        let snackbar_demo = demo_row(
            "Queueing",
            cx,
            vec![
                Button::filled("snackbar-plain", show_label)
                    .on_click(|_, _, cx| {
                        bus::emit(cx, UiEvent::snackbar("Saved to gallery settings"));
                    })
                    .into_any_element(),
                Button::tonal("snackbar-action", "With action")
                    .on_click(move |_, _, cx| {
                        bus::emit(
                            cx,
                            UiEvent::ShowSnackbar {
                                snackbar: Snackbar::new("Draft discarded")
                                    .with_action(dismiss_label.clone()),
                            },
                        );
                    })
                    .into_any_element(),
            ],
        );

        let tooltip_demo = demo_row(
            "Hover or focus the targets",
            cx,
            self.tooltips
                .iter()
                .map(|tooltip| tooltip.clone().into_any_element())
                .collect(),
        );

        page_scroll(
            "communication-page",
            vec![
                DemoSection::new("snackbar", locale)
                    .highlighted(active == "snackbar")
                    .child(snackbar_demo)
                    .into_any_element(),
                DemoSection::new("tooltip", locale)
                    .highlighted(active == "tooltip")
                    .child(tooltip_demo)
                    .into_any_element(),
            ],
        )
    }
}
