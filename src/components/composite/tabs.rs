//! Tab Bar Component

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// One tab destination
#[derive(Debug, Clone)]
pub struct TabItem {
    pub id: SharedString,
    pub label: SharedString,
}

impl TabItem {
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A row of tabs with exactly one active
#[derive(IntoElement)]
pub struct TabBar {
    id: ElementId,
    items: Vec<TabItem>,
    selected: SharedString,
    on_change: Option<Rc<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>>,
}

impl TabBar {
    pub fn new(id: impl Into<ElementId>, selected: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
            selected: selected.into(),
            on_change: None,
        }
    }

    pub fn items(mut self, items: Vec<TabItem>) -> Self {
        self.items = items;
        self
    }

    /// Called with the id of the clicked tab
    pub fn on_change(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for TabBar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.theme().colors;

        div()
            .id(self.id)
            .w_full()
            .flex()
            .border_b_1()
            .border_color(colors.outline_variant)
            .children(self.items.into_iter().enumerate().map(|(i, item)| {
                let active = item.id == self.selected;
                let on_change = self.on_change.clone();
                let item_id = item.id.clone();

                div()
                    .id(("tab", i))
                    .px_4()
                    .py_3()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_2()
                    .cursor_pointer()
                    .text_size(px(TypeScale::TITLE_SMALL))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(if active {
                        colors.primary
                    } else {
                        colors.on_surface_variant
                    })
                    .hover(|s| s.bg(colors.hover_layer()))
                    .child(item.label.clone())
                    // Active indicator
                    .child(
                        div()
                            .h(px(3.0))
                            .w(px(32.0))
                            .rounded_sm()
                            .when(active, |el| el.bg(colors.primary)),
                    )
                    .on_click(move |_event: &ClickEvent, window, cx| {
                        if let Some(handler) = on_change.as_ref() {
                            handler(&item_id, window, cx);
                        }
                    })
            }))
    }
}
