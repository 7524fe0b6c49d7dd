//! Navigation Page
//!
//! Demos for tabs, the stepper, pagination, and standalone previews of
//! the navigation rail and drawer.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::GalleryEntities;
use crate::assets::IconName;
use crate::components::composite::navigation_drawer::{
    DrawerItem, DrawerSection, NavigationDrawer,
};
use crate::components::composite::navigation_rail::{NavigationRail, RailItem};
use crate::components::composite::pagination::PaginationBar;
use crate::components::composite::stepper::{StepInfo, Stepper};
use crate::components::composite::tabs::{TabBar, TabItem};
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::state::pagination::PaginationState;
use crate::state::stepper::StepperState;
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

use super::{demo_row, page_scroll, DemoSection};

const STEP_LABELS: [&str; 4] = ["Cart", "Shipping", "Payment", "Review"];

/// Demo page for the Navigation category
pub struct NavigationPage {
    entities: GalleryEntities,
    selected_tab: SharedString,
    rail_selection: SharedString,
    stepper: StepperState,
    pagination: PaginationState,
    drawer_preview: Entity<NavigationDrawer>,
}

impl NavigationPage {
    pub fn new(entities: GalleryEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.gallery, |_, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |_, _, cx| cx.notify()).detach();

        let drawer_preview = cx.new(|_| {
            NavigationDrawer::new(
                "drawer-preview",
                vec![
                    DrawerSection::new(
                        "mail",
                        "Mail",
                        vec![
                            DrawerItem::new("inbox", "Inbox").badge("24"),
                            DrawerItem::new("sent", "Sent"),
                            DrawerItem::new("drafts", "Drafts").badge("3"),
                        ],
                    ),
                    DrawerSection::new(
                        "labels",
                        "Labels",
                        vec![
                            DrawerItem::new("design", "Design"),
                            DrawerItem::new("launches", "Launches"),
                        ],
                    ),
                ],
            )
            .selected("inbox")
        });

        Self {
            entities,
            selected_tab: "overview".into(),
            rail_selection: "home".into(),
            stepper: StepperState::new(STEP_LABELS.len()),
            pagination: PaginationState::new(20, 1),
            drawer_preview,
        }
    }
}

impl Render for NavigationPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let locale = self.entities.settings.read(cx).locale();
        let active = self.entities.gallery.read(cx).active_id();
        let this = cx.entity().downgrade();

        // Tabs
        let tab_handle = this.clone();
        let tabs = TabBar::new("tabs-demo", self.selected_tab.clone())
            .items(vec![
                TabItem::new("overview", "Overview"),
                TabItem::new("specs", "Specs"),
                TabItem::new("guidelines", "Guidelines"),
            ])
            .on_change(move |id, _window, cx| {
                let id = id.clone();
                tab_handle
                    .update(cx, |page, cx| {
                        page.selected_tab = id;
                        cx.notify();
                    })
                    .ok();
            });

        // Stepper with back/next controls
        let steps: Vec<StepInfo> = STEP_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| StepInfo::new(*label, self.stepper.is_completed(i)))
            .collect();
        let step_handle = this.clone();
        let stepper = Stepper::new("stepper-demo", steps, self.stepper.active()).on_select(
            move |step, _window, cx| {
                step_handle
                    .update(cx, |page, cx| {
                        page.stepper.go_to(step);
                        cx.notify();
                    })
                    .ok();
            },
        );
        let stepper_controls = demo_row(
            "Controls",
            cx,
            vec![
                Button::new("step-back", "Back")
                    .variant(ButtonVariant::Outlined)
                    .disabled(self.stepper.active() == 0)
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                        this.stepper.back();
                        cx.notify();
                    }))
                    .into_any_element(),
                Button::filled(
                    "step-next",
                    if self.stepper.is_last() { "Finish" } else { "Next" },
                )
                .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                    this.stepper.advance();
                    cx.notify();
                }))
                .into_any_element(),
            ],
        );

        // Pagination
        let page_handle = this.clone();
        let pagination = PaginationBar::new(
            "pagination-demo",
            self.pagination.current(),
            self.pagination.total(),
        )
        .on_change(move |page, _window, cx| {
            page_handle
                .update(cx, |this, cx| {
                    this.pagination.set_page(page);
                    cx.notify();
                })
                .ok();
        });

        // Rail preview inside a bounded box
        let rail_handle = this.clone();
        let rail = div()
            .h(px(320.0))
            .rounded_md()
            .border_1()
            .border_color(colors.outline_variant)
            .overflow_hidden()
            .child(
                NavigationRail::new("rail-preview", self.rail_selection.clone())
                    .items(vec![
                        RailItem::new("home", IconName::Compass, "Home"),
                        RailItem::new("alerts", IconName::Bell, "Alerts"),
                        RailItem::new("library", IconName::Panels, "Library"),
                    ])
                    .on_select(move |id, _window, cx| {
                        let id = id.clone();
                        rail_handle
                            .update(cx, |page, cx| {
                                page.rail_selection = id;
                                cx.notify();
                            })
                            .ok();
                    }),
            );

        let drawer = div()
            .h(px(320.0))
            .rounded_md()
            .border_1()
            .border_color(colors.outline_variant)
            .overflow_hidden()
            .child(self.drawer_preview.clone());

        page_scroll(
            "navigation-page",
            vec![
                DemoSection::new("tabs", locale)
                    .highlighted(active == "tabs")
                    .child(tabs)
                    .child(
                        div()
                            .text_size(px(TypeScale::BODY_MEDIUM))
                            .text_color(colors.on_surface_variant)
                            .child(format!("Active tab: {}", self.selected_tab)),
                    )
                    .into_any_element(),
                DemoSection::new("stepper", locale)
                    .highlighted(active == "stepper")
                    .child(stepper)
                    .child(stepper_controls)
                    .into_any_element(),
                DemoSection::new("pagination", locale)
                    .highlighted(active == "pagination")
                    .child(pagination)
                    .into_any_element(),
                DemoSection::new("navigation-rail", locale)
                    .highlighted(active == "navigation-rail")
                    .child(rail)
                    .into_any_element(),
                DemoSection::new("navigation-drawer", locale)
                    .highlighted(active == "navigation-drawer")
                    .child(drawer)
                    .into_any_element(),
            ],
        )
    }
}
