//! Checkbox Component

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::theme::ActiveTheme;

use super::icon::Icon;

/// A checkbox with an optional label
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
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

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.theme().colors;
        let checked = self.checked;

        let (box_bg, border_color) = if self.disabled {
            (
                checked.then(|| colors.disabled_container()),
                colors.disabled_content(),
            )
        } else if checked {
            (Some(colors.primary), colors.primary)
        } else {
            (None, colors.on_surface_variant)
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .size(px(18.0))
                    .rounded_sm()
                    .border_2()
                    .border_color(border_color)
                    .when_some(box_bg, |el, bg| el.bg(bg))
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(checked, |el| {
                        el.child(Icon::new(IconName::Check).size(px(14.0)).color(colors.on_primary))
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
            if let Some(handler) = self.on_change {
                element = element.on_click(move |_event, window, cx| {
                    handler(!checked, window, cx);
                });
            }
        }

        element
    }
}
