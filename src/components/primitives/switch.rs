//! Switch Component

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::ActiveTheme;

/// An on/off toggle for a single setting
#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Switch {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler, called with the next state
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.theme().colors;
        let checked = self.checked;

        let (track_bg, thumb_bg, thumb_size) = if checked {
            (colors.primary, colors.on_primary, px(24.0))
        } else {
            (
                colors.surface_container_highest,
                colors.outline,
                px(16.0),
            )
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_3()
            .child(
                // Track
                div()
                    .w(px(52.0))
                    .h(px(32.0))
                    .rounded_full()
                    .bg(track_bg)
                    .when(!checked, |el| el.border_2().border_color(colors.outline))
                    .flex()
                    .items_center()
                    .px(px(4.0))
                    .when(checked, |el| el.justify_end())
                    // Thumb
                    .child(div().size(thumb_size).rounded_full().bg(thumb_bg)),
            )
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(if self.disabled {
                            colors.disabled_content()
                        } else {
                            colors.on_surface
                        })
                        .child(label),
                )
            });

        if self.disabled {
            element = element.opacity(0.5);
        } else {
            element = element.cursor_pointer();
            if let Some(handler) = self.on_change {
                element = element.on_click(move |_event, window, cx| {
                    handler(!checked, window, cx);
                });
            }
        }

        element
    }
}
