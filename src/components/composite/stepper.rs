//! Stepper Component
//!
//! Horizontal progress through an ordered set of steps. The component is a
//! pure rendering of [`StepperState`](crate::state::stepper::StepperState)
//! data; the owner holds the state and reacts to step clicks.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::icon::Icon;
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// Render data for one step
#[derive(Debug, Clone)]
pub struct StepInfo {
    pub label: SharedString,
    pub completed: bool,
}

impl StepInfo {
    pub fn new(label: impl Into<SharedString>, completed: bool) -> Self {
        Self {
            label: label.into(),
            completed,
        }
    }
}

/// A horizontal stepper
#[derive(IntoElement)]
pub struct Stepper {
    id: ElementId,
    steps: Vec<StepInfo>,
    active: usize,
    on_select: Option<Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>>,
}

impl Stepper {
    pub fn new(id: impl Into<ElementId>, steps: Vec<StepInfo>, active: usize) -> Self {
        Self {
            id: id.into(),
            steps,
            active,
            on_select: None,
        }
    }

    /// Called with the index of a clicked step
    pub fn on_select(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Stepper {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.theme().colors;
        let count = self.steps.len();

        div()
            .id(self.id)
            .w_full()
            .flex()
            .items_center()
            .children(self.steps.into_iter().enumerate().flat_map(|(i, step)| {
                let is_active = i == self.active;
                let on_select = self.on_select.clone();

                let (badge_bg, badge_fg) = if step.completed || is_active {
                    (colors.primary, colors.on_primary)
                } else {
                    (colors.surface_container_highest, colors.on_surface_variant)
                };

                let badge: gpui::AnyElement = if step.completed && !is_active {
                    Icon::new(IconName::Check)
                        .size(px(14.0))
                        .color(badge_fg)
                        .into_any_element()
                } else {
                    div()
                        .text_size(px(TypeScale::LABEL_MEDIUM))
                        .text_color(badge_fg)
                        .child(format!("{}", i + 1))
                        .into_any_element()
                };

                let node = div()
                    .id(("step", i))
                    .flex()
                    .items_center()
                    .gap_2()
                    .cursor_pointer()
                    .child(
                        div()
                            .size(px(28.0))
                            .rounded_full()
                            .bg(badge_bg)
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(badge),
                    )
                    .child(
                        div()
                            .text_size(px(TypeScale::BODY_MEDIUM))
                            .font_weight(if is_active {
                                gpui::FontWeight::MEDIUM
                            } else {
                                gpui::FontWeight::NORMAL
                            })
                            .text_color(if is_active {
                                colors.on_surface
                            } else {
                                colors.on_surface_variant
                            })
                            .child(step.label.clone()),
                    )
                    .on_click(move |_event: &ClickEvent, window, cx| {
                        if let Some(handler) = on_select.as_ref() {
                            handler(i, window, cx);
                        }
                    })
                    .into_any_element();

                // Connector line between steps
                let mut parts = vec![node];
                if i + 1 < count {
                    parts.push(
                        div()
                            .flex_1()
                            .mx_2()
                            .h(px(1.0))
                            .bg(colors.outline_variant)
                            .into_any_element(),
                    );
                }
                parts
            }))
    }
}
