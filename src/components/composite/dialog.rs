//! Dialog Component
//!
//! A modal dialog mounted on the modal overlay layer: scrim, headline,
//! body, and an action row. Dismissed by the scrim, Escape, or an action.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyView, App, Context, Entity, FocusHandle, InteractiveElement,
    IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::components::primitives::button::{Button, ButtonVariant};
use crate::floating::dismiss::{DismissGuards, ListenerKind};
use crate::overlay::{OverlayHandle, OverlayLayer, Overlays};
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// One button in the dialog's action row
#[derive(Clone)]
pub struct DialogAction {
    pub label: SharedString,
    pub variant: ButtonVariant,
    handler: Rc<dyn Fn(&mut Window, &mut App) + 'static>,
}

impl DialogAction {
    pub fn new(
        label: impl Into<SharedString>,
        variant: ButtonVariant,
        handler: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            variant,
            handler: Rc::new(handler),
        }
    }
}

/// A modal dialog view
pub struct Dialog {
    title: SharedString,
    body_text: Option<SharedString>,
    content: Option<AnyView>,
    actions: Vec<DialogAction>,
    on_dismiss: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
    focus_handle: FocusHandle,
    focus_taken: bool,
}

impl Dialog {
    pub fn new(title: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        Self {
            title: title.into(),
            body_text: None,
            content: None,
            actions: Vec::new(),
            on_dismiss: None,
            focus_handle: cx.focus_handle(),
            focus_taken: false,
        }
    }

    /// Plain body text
    pub fn body(mut self, text: impl Into<SharedString>) -> Self {
        self.body_text = Some(text.into());
        self
    }

    /// Arbitrary body content below the text
    pub fn content(mut self, view: impl Into<AnyView>) -> Self {
        self.content = Some(view.into());
        self
    }

    pub fn action(mut self, action: DialogAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Called when the scrim or Escape asks to close
    pub fn on_dismiss(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_dismiss = Some(Rc::new(handler));
        self
    }

    fn request_dismiss(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_dismiss.clone() {
            handler(window, cx);
        }
    }

    fn on_scrim_click(
        &mut self,
        _event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        cx.stop_propagation();
        self.request_dismiss(window, cx);
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if event.keystroke.key == "escape" {
            cx.stop_propagation();
            self.request_dismiss(window, cx);
        }
    }
}

impl Render for Dialog {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;

        if !self.focus_taken {
            window.focus(&self.focus_handle);
            self.focus_taken = true;
        }

        let actions = self.actions.clone();

        div()
            .absolute()
            .inset_0()
            .bg(colors.scrim)
            .track_focus(&self.focus_handle)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_scrim_click))
            .on_key_down(cx.listener(Self::on_key_down))
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .occlude()
                    .bg(colors.surface_container_high)
                    .rounded_xl()
                    .shadow_lg()
                    .min_w(px(320.0))
                    .max_w(px(560.0))
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap_4()
                    // Headline
                    .child(
                        div()
                            .text_size(px(TypeScale::HEADLINE_SMALL))
                            .text_color(colors.on_surface)
                            .child(self.title.clone()),
                    )
                    // Body
                    .when_some(self.body_text.clone(), |el, text| {
                        el.child(
                            div()
                                .text_size(px(TypeScale::BODY_MEDIUM))
                                .text_color(colors.on_surface_variant)
                                .child(text),
                        )
                    })
                    .when_some(self.content.clone(), |el, content| el.child(content))
                    // Action row
                    .when(!actions.is_empty(), |el| {
                        el.child(div().flex().justify_end().gap_2().children(
                            actions.into_iter().enumerate().map(|(i, action)| {
                                let handler = action.handler.clone();
                                Button::new(("dialog-action", i), action.label)
                                    .variant(action.variant)
                                    .on_click(move |_event, window, cx| handler(window, cx))
                            }),
                        ))
                    }),
            )
    }
}

/// Tracks one open dialog: the overlay mount plus the dialog entity
pub struct OpenDialog {
    handle: OverlayHandle,
    _dialog: Entity<Dialog>,
}

/// Mount a dialog on the modal layer, registering its key listener
pub fn open_dialog(
    overlays: &Entity<Overlays>,
    dialog: Entity<Dialog>,
    cx: &mut App,
) -> OpenDialog {
    let registry = overlays.read(cx).registry();
    let mut guards = DismissGuards::new();
    guards.track(registry.register(ListenerKind::PointerDown));
    guards.track(registry.register(ListenerKind::KeyDown));

    let handle = overlays.update(cx, |overlays, cx| {
        let handle = overlays.mount_guarded(dialog.clone().into(), OverlayLayer::Modal, guards);
        cx.notify();
        handle
    });
    OpenDialog {
        handle,
        _dialog: dialog,
    }
}

/// Unmount a previously opened dialog
pub fn close_dialog(overlays: &Entity<Overlays>, open: OpenDialog, cx: &mut App) {
    overlays.update(cx, |overlays, cx| {
        overlays.unmount(open.handle);
        cx.notify();
    });
}
