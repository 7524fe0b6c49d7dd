//! Snackbar Host
//!
//! Renders the visible snackbar on the toast layer and owns the
//! auto-dismiss timer. Messages queue through
//! [`SnackbarState`](crate::state::snackbar::SnackbarState); manual
//! dismissal cancels the pending timer via its epoch.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, Styled, Window,
};
use uuid::Uuid;

use crate::assets::IconName;
use crate::components::primitives::button::{IconButton, IconButtonVariant};
use crate::helpers::timing::TimerEpoch;
use crate::state::snackbar::{Snackbar, SnackbarState, AUTO_DISMISS_MS};
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// The toast-layer view displaying queued snackbars one at a time
pub struct SnackbarHost {
    state: SnackbarState,
    dismiss_epoch: TimerEpoch,
}

impl SnackbarHost {
    pub fn new() -> Self {
        Self {
            state: SnackbarState::new(),
            dismiss_epoch: TimerEpoch::new(),
        }
    }

    /// Queue a snackbar; starts the dismiss timer if it becomes visible
    pub fn show(&mut self, snackbar: Snackbar, cx: &mut Context<Self>) {
        let was_empty = self.state.is_empty();
        self.state.push(snackbar);
        if was_empty {
            self.arm_timer(cx);
        }
        cx.notify();
    }

    /// Dismiss by id. Removing the visible snackbar cancels its timer and
    /// starts one for the next message in line.
    pub fn dismiss(&mut self, id: Uuid, cx: &mut Context<Self>) {
        let was_current = self.state.dismiss(id);
        if was_current {
            self.dismiss_epoch.cancel();
            if !self.state.is_empty() {
                self.arm_timer(cx);
            }
        }
        cx.notify();
    }

    fn arm_timer(&mut self, cx: &mut Context<Self>) {
        let Some(current) = self.state.current() else {
            return;
        };
        let id = current.id;
        let epoch = self.dismiss_epoch.arm();

        cx.spawn(async move |this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(AUTO_DISMISS_MS))
                .await;
            this.update(cx, |host: &mut SnackbarHost, cx| {
                if host.dismiss_epoch.is_current(epoch) {
                    host.dismiss(id, cx);
                }
            })
            .ok();
        })
        .detach();
    }
}

impl Default for SnackbarHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for SnackbarHost {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let current = self.state.current().cloned();

        div()
            .absolute()
            .inset_0()
            .flex()
            .items_end()
            .justify_center()
            .pb(px(24.0))
            .when_some(current, |el, snackbar| {
                let id = snackbar.id;
                el.child(
                    div()
                        .occlude()
                        .min_w(px(320.0))
                        .max_w(px(560.0))
                        .px_4()
                        .py_2()
                        .rounded_md()
                        .shadow_md()
                        .bg(colors.inverse_surface)
                        .flex()
                        .items_center()
                        .justify_between()
                        .gap_4()
                        .child(
                            div()
                                .text_size(px(TypeScale::BODY_MEDIUM))
                                .text_color(colors.inverse_on_surface)
                                .child(snackbar.message.clone()),
                        )
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .gap_1()
                                .when_some(snackbar.action_label.clone(), |el, label| {
                                    el.child(
                                        div()
                                            .id("snackbar-action")
                                            .px_2()
                                            .py_1()
                                            .rounded_sm()
                                            .cursor_pointer()
                                            .text_size(px(TypeScale::LABEL_LARGE))
                                            .font_weight(gpui::FontWeight::MEDIUM)
                                            .text_color(colors.inverse_primary)
                                            .hover(|s| s.bg(colors.pressed_layer()))
                                            .child(label)
                                            .on_click(cx.listener(
                                                move |this, _: &ClickEvent, _window, cx| {
                                                    this.dismiss(id, cx);
                                                },
                                            )),
                                    )
                                })
                                .child(
                                    IconButton::new("snackbar-close", IconName::Close)
                                        .variant(IconButtonVariant::Standard)
                                        .on_click(cx.listener(
                                            move |this, _: &ClickEvent, _window, cx| {
                                                this.dismiss(id, cx);
                                            },
                                        )),
                                ),
                        ),
                )
            })
    }
}
