//! TextField Component
//!
//! Material text fields in the filled and outlined variants, with a label,
//! supporting text, and an error state.

use gpui::{
    div, prelude::*, px, Context, ElementId, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, SharedString, Styled, Window,
};

use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// Container treatment of a text field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextFieldVariant {
    #[default]
    Filled,
    Outlined,
}

/// A text field entity holding its value and focus
pub struct TextField {
    id: ElementId,
    value: String,
    label: Option<SharedString>,
    placeholder: SharedString,
    supporting_text: Option<SharedString>,
    variant: TextFieldVariant,
    error: bool,
    disabled: bool,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl TextField {
    /// Create a new text field
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            label: None,
            placeholder: SharedString::default(),
            supporting_text: None,
            variant: TextFieldVariant::default(),
            error: false,
            disabled: false,
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_label(&mut self, label: impl Into<SharedString>) {
        self.label = Some(label.into());
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_supporting_text(&mut self, text: impl Into<SharedString>) {
        self.supporting_text = Some(text.into());
    }

    pub fn set_variant(&mut self, variant: TextFieldVariant) {
        self.variant = variant;
    }

    /// Mark the value invalid; colors the field and supporting text
    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn handle_input(&mut self, text: &str, cx: &mut Context<Self>) {
        self.value.push_str(text);
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }

    fn handle_backspace(&mut self, cx: &mut Context<Self>) {
        self.value.pop();
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform || keystroke.modifiers.alt {
            return;
        }
        match keystroke.key.as_str() {
            "backspace" => self.handle_backspace(cx),
            "space" => self.handle_input(" ", cx),
            key if key.chars().count() == 1 => self.handle_input(key, cx),
            _ => {}
        }
    }
}

impl Focusable for TextField {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextField {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let is_focused = self.focus_handle.is_focused(window);

        let active_color = if self.error {
            colors.error
        } else if is_focused {
            colors.primary
        } else {
            colors.on_surface_variant
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            SharedString::from(self.value.clone())
        };
        let text_color = if self.value.is_empty() {
            colors.on_surface_variant
        } else {
            colors.on_surface
        };

        let field = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event, _window, cx| this.handle_key(event, cx)))
            .px_4()
            .py_2()
            .min_w(px(220.0))
            .flex()
            .flex_col()
            .gap(px(2.0))
            .cursor_text()
            .map(|el| match self.variant {
                TextFieldVariant::Filled => el
                    .bg(colors.surface_container_highest)
                    .rounded_md()
                    .border_b_2()
                    .border_color(active_color),
                TextFieldVariant::Outlined => el
                    .rounded_md()
                    .border_2()
                    .border_color(if is_focused || self.error {
                        active_color
                    } else {
                        colors.outline
                    }),
            })
            .when_some(self.label.clone(), |el, label| {
                el.child(
                    div()
                        .text_size(px(TypeScale::BODY_SMALL))
                        .text_color(active_color)
                        .child(label),
                )
            })
            .child(
                div()
                    .text_size(px(TypeScale::BODY_LARGE))
                    .text_color(text_color)
                    .child(display_text),
            );

        div()
            .flex()
            .flex_col()
            .gap_1()
            .when(self.disabled, |el| el.opacity(0.5))
            .child(field)
            .when_some(self.supporting_text.clone(), |el, text| {
                el.child(
                    div()
                        .px_4()
                        .text_size(px(TypeScale::BODY_SMALL))
                        .text_color(if self.error {
                            colors.error
                        } else {
                            colors.on_surface_variant
                        })
                        .child(text),
                )
            })
    }
}

/// Create a text field entity with an initial value and placeholder
pub fn text_field<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextField> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut field = TextField::new(id, cx);
        field.set_value(value);
        field.set_placeholder(placeholder);
        field
    })
}
