//! Radio Button Component
//!
//! Group membership is explicit: every radio carries its own value and the
//! group's current value, and reports selection through `on_select`. No
//! surrounding provider is required.

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::ActiveTheme;

/// One option of a radio group
#[derive(IntoElement)]
pub struct Radio {
    id: ElementId,
    value: SharedString,
    group_value: Option<SharedString>,
    label: Option<SharedString>,
    disabled: bool,
    on_select: Option<Box<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>>,
}

impl Radio {
    /// A radio representing `value` within a group currently at
    /// `group_value`
    pub fn new(
        id: impl Into<ElementId>,
        value: impl Into<SharedString>,
        group_value: Option<SharedString>,
    ) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            group_value,
            label: None,
            disabled: false,
            on_select: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with this radio's value when it is picked
    pub fn on_select(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Radio {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.theme().colors;
        let selected = self.group_value.as_ref() == Some(&self.value);

        let ring_color = if self.disabled {
            colors.disabled_content()
        } else if selected {
            colors.primary
        } else {
            colors.on_surface_variant
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .size(px(20.0))
                    .rounded_full()
                    .border_2()
                    .border_color(ring_color)
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(selected, |el| {
                        el.child(div().size(px(10.0)).rounded_full().bg(ring_color))
                    }),
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

        if !self.disabled {
            element = element.cursor_pointer();
            if let Some(handler) = self.on_select {
                let value = self.value;
                element = element.on_click(move |_event, window, cx| {
                    handler(&value, window, cx);
                });
            }
        }

        element
    }
}
