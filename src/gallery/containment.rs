//! Containment Page
//!
//! Demos for dialogs, accordions, carousels, and popovers.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::GalleryEntities;
use crate::components::composite::accordion::{Accordion, AccordionSection};
use crate::components::composite::carousel::{Carousel, Slide};
use crate::components::composite::dialog::{
    close_dialog, open_dialog, Dialog, DialogAction, OpenDialog,
};
use crate::components::composite::popover::Popover;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::eventing::{bus, UiEvent};
use crate::floating::position::{Align, Side};
use crate::i18n::t;
use crate::state::expand::ExpandMode;
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

use super::{demo_row, page_scroll, DemoSection};

/// Floating card content shown by the popover demos
struct PopoverCard {
    title: &'static str,
    body: &'static str,
}

impl Render for PopoverCard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        div()
            .w(px(240.0))
            .p_4()
            .rounded_md()
            .shadow_md()
            .bg(colors.surface_container)
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_size(px(TypeScale::TITLE_SMALL))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(colors.on_surface)
                    .child(self.title),
            )
            .child(
                div()
                    .text_size(px(TypeScale::BODY_SMALL))
                    .text_color(colors.on_surface_variant)
                    .child(self.body),
            )
    }
}

/// Demo page for the Containment category
pub struct ContainmentPage {
    entities: GalleryEntities,
    single_accordion: Entity<Accordion>,
    multi_accordion: Entity<Accordion>,
    carousel: Entity<Carousel>,
    popovers: Vec<Entity<Popover>>,
    open_dialog: Option<OpenDialog>,
}

impl ContainmentPage {
    pub fn new(entities: GalleryEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.gallery, |_, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |_, _, cx| cx.notify()).detach();

        let single_accordion = cx.new(|_| {
            Accordion::new("accordion-single", ExpandMode::Single, ["shipping"]).sections(vec![
                AccordionSection::text(
                    "shipping",
                    "Shipping",
                    "Orders ship within two business days from the nearest warehouse.",
                ),
                AccordionSection::text(
                    "returns",
                    "Returns",
                    "Unused items can be returned within 30 days for a full refund.",
                ),
                AccordionSection::text(
                    "warranty",
                    "Warranty",
                    "All hardware carries a two-year limited warranty.",
                ),
            ])
        });

        let multi_accordion = cx.new(|_| {
            Accordion::new(
                "accordion-multi",
                ExpandMode::Multiple,
                ["typography", "color"],
            )
            .sections(vec![
                AccordionSection::text(
                    "typography",
                    "Typography",
                    "The type scale spans display, headline, title, body, and label roles.",
                ),
                AccordionSection::text(
                    "color",
                    "Color",
                    "Color roles pair every container with an accessible on-color.",
                ),
                AccordionSection::text(
                    "elevation",
                    "Elevation",
                    "Surfaces raise through tonal containers rather than heavy shadows.",
                ),
            ])
        });

        let carousel = cx.new(|cx| {
            Carousel::new(
                "carousel-demo",
                vec![
                    Slide::new("Dynamic color", "Schemes derived from a single seed color"),
                    Slide::new("Tonal surfaces", "Five container tones replace elevation tints"),
                    Slide::new("Expressive shape", "Corner radii scale with component size"),
                ],
                cx,
            )
        });

        let popover_configs = [
            ("popover-bottom", "Bottom start", Side::Bottom, Align::Start),
            ("popover-top", "Top center", Side::Top, Align::Center),
            ("popover-right", "Right start", Side::Right, Align::Start),
        ];
        let popovers = popover_configs
            .into_iter()
            .map(|(id, label, side, align)| {
                let overlays = entities.overlays.clone();
                cx.new(|_| {
                    Popover::new(id, overlays)
                        .side(side)
                        .align(align)
                        .trigger(move |open, _window, _cx| {
                            Button::outlined(("popover-trigger", side as usize), label)
                                .variant(if open {
                                    ButtonVariant::Tonal
                                } else {
                                    ButtonVariant::Outlined
                                })
                                .into_any_element()
                        })
                        .content(|_window, cx| {
                            cx.new(|_| PopoverCard {
                                title: "Anchored surface",
                                body: "Positioned from the trigger rectangle, a side, and an \
                                       alignment. Scroll or resize and it follows.",
                            })
                            .into()
                        })
                })
            })
            .collect();

        Self {
            entities,
            single_accordion,
            multi_accordion,
            carousel,
            popovers,
            open_dialog: None,
        }
    }

    fn show_dialog(&mut self, cx: &mut Context<Self>) {
        if self.open_dialog.is_some() {
            return;
        }
        let locale = self.entities.settings.read(cx).locale();
        let this = cx.entity().downgrade();

        let dialog = cx.new(|cx| {
            let dismiss = {
                let this = this.clone();
                move |_: &mut Window, cx: &mut gpui::App| {
                    this.update(cx, |page, cx| page.hide_dialog(cx)).ok();
                }
            };
            let confirm = {
                let this = this.clone();
                move |_: &mut Window, cx: &mut gpui::App| {
                    bus::emit(cx, UiEvent::snackbar("Draft discarded"));
                    this.update(cx, |page, cx| page.hide_dialog(cx)).ok();
                }
            };
            let cancel = dismiss.clone();

            Dialog::new("Discard draft?", cx)
                .body(
                    "The draft and its attachments will be deleted. This cannot be undone.",
                )
                .on_dismiss(dismiss)
                .action(DialogAction::new(
                    t(locale, "demo-cancel"),
                    ButtonVariant::Text,
                    cancel,
                ))
                .action(DialogAction::new(
                    t(locale, "demo-confirm"),
                    ButtonVariant::Filled,
                    confirm,
                ))
        });

        self.open_dialog = Some(open_dialog(&self.entities.overlays, dialog, cx));
        cx.notify();
    }

    fn hide_dialog(&mut self, cx: &mut Context<Self>) {
        if let Some(open) = self.open_dialog.take() {
            close_dialog(&self.entities.overlays, open, cx);
        }
        cx.notify();
    }
}

impl Render for ContainmentPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.settings.read(cx).locale();
        let active = self.entities.gallery.read(cx).active_id();

        let dialog_demo = demo_row(
            "Modal",
            cx,
            vec![Button::filled("dialog-open", t(locale, "demo-open-dialog"))
                .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                    this.show_dialog(cx);
                }))
                .into_any_element()],
        );

        page_scroll(
            "containment-page",
            vec![
                DemoSection::new("dialog", locale)
                    .highlighted(active == "dialog")
                    .child(dialog_demo)
                    .into_any_element(),
                DemoSection::new("accordion", locale)
                    .highlighted(active == "accordion")
                    .child(demo_row(
                        "Single expand",
                        cx,
                        vec![self.single_accordion.clone().into_any_element()],
                    ))
                    .child(demo_row(
                        "Multiple expand",
                        cx,
                        vec![self.multi_accordion.clone().into_any_element()],
                    ))
                    .into_any_element(),
                DemoSection::new("carousel", locale)
                    .highlighted(active == "carousel")
                    .child(self.carousel.clone())
                    .into_any_element(),
                DemoSection::new("popover", locale)
                    .highlighted(active == "popover")
                    .child(demo_row(
                        "Sides and alignment",
                        cx,
                        self.popovers
                            .iter()
                            .map(|popover| popover.clone().into_any_element())
                            .collect(),
                    ))
                    .into_any_element(),
            ],
        )
    }
}
