//! Pagination Bar Component
//!
//! Numbered page navigation over the range calculator in
//! [`state::pagination`](crate::state::pagination). Requested pages are
//! clamped before they reach the change handler, so out-of-range clicks
//! can never produce an out-of-range page.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::button::IconButton;
use crate::state::pagination::{page_range, PageItem};
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

type ChangeHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// A numbered pagination bar
#[derive(IntoElement)]
pub struct PaginationBar {
    id: ElementId,
    current: usize,
    total: usize,
    siblings: usize,
    on_change: Option<ChangeHandler>,
}

impl PaginationBar {
    pub fn new(id: impl Into<ElementId>, current: usize, total: usize) -> Self {
        Self {
            id: id.into(),
            current,
            total,
            siblings: 1,
            on_change: None,
        }
    }

    /// Neighbors shown on each side of the current page
    pub fn siblings(mut self, siblings: usize) -> Self {
        self.siblings = siblings;
        self
    }

    /// Called with the requested page, already clamped into range
    pub fn on_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    fn change_to(
        on_change: &Option<ChangeHandler>,
        page: usize,
        total: usize,
        window: &mut Window,
        cx: &mut App,
    ) {
        if let Some(handler) = on_change.as_ref() {
            handler(page.clamp(1, total.max(1)), window, cx);
        }
    }
}

impl RenderOnce for PaginationBar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.theme().colors;
        let (current, total) = (self.current, self.total);
        let items = page_range(current, total, self.siblings);

        let prev_handler = self.on_change.clone();
        let next_handler = self.on_change.clone();

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .child(
                IconButton::new("page-prev", IconName::ChevronLeft)
                    .disabled(current <= 1)
                    .on_click(move |_event: &ClickEvent, window, cx| {
                        Self::change_to(&prev_handler, current.saturating_sub(1), total, window, cx);
                    }),
            )
            .children(items.into_iter().enumerate().map(|(i, item)| match item {
                PageItem::Page(page) => {
                    let active = page == current;
                    let handler = self.on_change.clone();
                    div()
                        .id(("page", i))
                        .size(px(32.0))
                        .rounded_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .cursor_pointer()
                        .text_size(px(TypeScale::LABEL_LARGE))
                        .map(|el| {
                            if active {
                                el.bg(colors.primary).text_color(colors.on_primary)
                            } else {
                                el.text_color(colors.on_surface)
                                    .hover(|s| s.bg(colors.hover_layer()))
                            }
                        })
                        .child(format!("{page}"))
                        .on_click(move |_event: &ClickEvent, window, cx| {
                            Self::change_to(&handler, page, total, window, cx);
                        })
                        .into_any_element()
                }
                PageItem::Ellipsis => div()
                    .size(px(32.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(colors.on_surface_variant)
                    .child("…")
                    .into_any_element(),
            }))
            .child(
                IconButton::new("page-next", IconName::ChevronRight)
                    .disabled(current >= total)
                    .on_click(move |_event: &ClickEvent, window, cx| {
                        Self::change_to(&next_handler, current + 1, total, window, cx);
                    }),
            )
    }
}
