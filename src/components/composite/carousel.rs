//! Carousel Component
//!
//! A horizontal pager of slides. Advances automatically on a timer until
//! the pointer is over it; hovering pauses the timer, leaving resumes it.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, ElementId, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::button::IconButton;
use crate::state::carousel::CarouselState;
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// Milliseconds between automatic slide advances
pub const AUTO_ADVANCE_MS: u64 = 4000;

/// One slide of content
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: SharedString,
    pub body: SharedString,
}

impl Slide {
    pub fn new(title: impl Into<SharedString>, body: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// An auto-advancing slide pager
pub struct Carousel {
    id: ElementId,
    slides: Vec<Slide>,
    state: CarouselState,
}

impl Carousel {
    pub fn new(id: impl Into<ElementId>, slides: Vec<Slide>, cx: &mut Context<Self>) -> Self {
        let state = CarouselState::new(slides.len());

        // Advance on a fixed cadence for the lifetime of the carousel;
        // the state ignores ticks while paused
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(AUTO_ADVANCE_MS))
                    .await;
                let alive = this.update(cx, |carousel: &mut Carousel, cx| {
                    carousel.state.auto_advance();
                    cx.notify();
                });
                if alive.is_err() {
                    break;
                }
            }
        })
        .detach();

        Self {
            id: id.into(),
            slides,
            state,
        }
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    fn on_prev(&mut self, cx: &mut Context<Self>) {
        self.state.prev();
        cx.notify();
    }

    fn on_next(&mut self, cx: &mut Context<Self>) {
        self.state.next();
        cx.notify();
    }
}

impl Render for Carousel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let index = self.state.index();
        let slide = self.slides.get(index).cloned();
        let count = self.slides.len();

        div()
            .id(self.id.clone())
            .w_full()
            .flex()
            .flex_col()
            .gap_3()
            .on_hover(cx.listener(|this, hovered: &bool, _window, cx| {
                if *hovered {
                    this.state.pause();
                } else {
                    this.state.resume();
                }
                cx.notify();
            }))
            .child(
                div()
                    .relative()
                    .w_full()
                    .h(px(180.0))
                    .rounded_xl()
                    .bg(colors.primary_container)
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .gap_2()
                    .when_some(slide, |el, slide| {
                        el.child(
                            div()
                                .text_size(px(TypeScale::TITLE_LARGE))
                                .text_color(colors.on_primary_container)
                                .child(slide.title),
                        )
                        .child(
                            div()
                                .text_size(px(TypeScale::BODY_MEDIUM))
                                .text_color(colors.on_primary_container)
                                .child(slide.body),
                        )
                    })
                    .child(div().absolute().left(px(8.0)).child(
                        IconButton::new("carousel-prev", IconName::ChevronLeft).on_click(
                            cx.listener(|this, _: &ClickEvent, _window, cx| this.on_prev(cx)),
                        ),
                    ))
                    .child(div().absolute().right(px(8.0)).child(
                        IconButton::new("carousel-next", IconName::ChevronRight).on_click(
                            cx.listener(|this, _: &ClickEvent, _window, cx| this.on_next(cx)),
                        ),
                    )),
            )
            // Dot indicators
            .child(
                div()
                    .flex()
                    .justify_center()
                    .gap_2()
                    .children((0..count).map(|i| {
                        div()
                            .id(("carousel-dot", i))
                            .size(px(8.0))
                            .rounded_full()
                            .cursor_pointer()
                            .bg(if i == index {
                                colors.primary
                            } else {
                                colors.outline_variant
                            })
                            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                                this.state.go_to(i);
                                cx.notify();
                            }))
                    })),
            )
    }
}
