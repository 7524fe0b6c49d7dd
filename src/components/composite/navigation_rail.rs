//! Navigation Rail Component
//!
//! A compact vertical strip of destinations along the window edge.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::icon::Icon;
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// Width of the rail in logical pixels
pub const RAIL_WIDTH: f32 = 84.0;

/// One rail destination
#[derive(Debug, Clone)]
pub struct RailItem {
    pub id: SharedString,
    pub icon: IconName,
    pub label: SharedString,
}

impl RailItem {
    pub fn new(
        id: impl Into<SharedString>,
        icon: IconName,
        label: impl Into<SharedString>,
    ) -> Self {
        Self {
            id: id.into(),
            icon,
            label: label.into(),
        }
    }
}

/// A vertical destination strip
#[derive(IntoElement)]
pub struct NavigationRail {
    id: ElementId,
    items: Vec<RailItem>,
    selected: SharedString,
    on_select: Option<Rc<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>>,
}

impl NavigationRail {
    pub fn new(id: impl Into<ElementId>, selected: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
            selected: selected.into(),
            on_select: None,
        }
    }

    pub fn items(mut self, items: Vec<RailItem>) -> Self {
        self.items = items;
        self
    }

    /// Called with the id of a clicked destination
    pub fn on_select(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for NavigationRail {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.theme().colors;

        div()
            .id(self.id)
            .w(px(RAIL_WIDTH))
            .h_full()
            .flex_none()
            .bg(colors.surface)
            .border_r_1()
            .border_color(colors.outline_variant)
            .flex()
            .flex_col()
            .items_center()
            .py_3()
            .gap_2()
            .children(self.items.into_iter().enumerate().map(|(i, item)| {
                let active = item.id == self.selected;
                let on_select = self.on_select.clone();
                let item_id = item.id.clone();

                div()
                    .id(("rail-item", i))
                    .w_full()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .py_1()
                    .cursor_pointer()
                    .child(
                        // Pill indicator behind the icon
                        div()
                            .w(px(56.0))
                            .h(px(32.0))
                            .rounded_full()
                            .flex()
                            .items_center()
                            .justify_center()
                            .when(active, |el| el.bg(colors.secondary_container))
                            .when(!active, |el| el.hover(|s| s.bg(colors.hover_layer())))
                            .child(Icon::new(item.icon).color(if active {
                                colors.on_secondary_container
                            } else {
                                colors.on_surface_variant
                            })),
                    )
                    .child(
                        div()
                            .text_size(px(TypeScale::LABEL_MEDIUM))
                            .font_weight(if active {
                                gpui::FontWeight::MEDIUM
                            } else {
                                gpui::FontWeight::NORMAL
                            })
                            .text_color(if active {
                                colors.on_surface
                            } else {
                                colors.on_surface_variant
                            })
                            .child(item.label.clone()),
                    )
                    .on_click(move |_event: &ClickEvent, window, cx| {
                        if let Some(handler) = on_select.as_ref() {
                            handler(&item_id, window, cx);
                        }
                    })
            }))
    }
}
