//! Tooltip Component
//!
//! A short label shown above a target after a hover delay, or immediately
//! when the target gains focus. Mouse-leave and blur close it; tooltips
//! never intercept the pointer.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, AnyElement, App, Context, ElementId, Entity, FocusHandle,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Subscription, Window,
};

use crate::floating::anchored::{AnchorMeasure, FloatingSurface, TOOLTIP_DELAY_MS};
use crate::floating::position::{Align, Side};
use crate::helpers::timing::TimerEpoch;
use crate::overlay::{OverlayHandle, OverlayLayer, Overlays};
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// The floating label view
struct TooltipBubble {
    text: SharedString,
}

impl Render for TooltipBubble {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        div()
            .px_2()
            .py_1()
            .rounded_sm()
            .bg(colors.inverse_surface)
            .text_color(colors.inverse_on_surface)
            .text_size(px(TypeScale::BODY_SMALL))
            .child(self.text.clone())
    }
}

type AreaBuilder = Box<dyn Fn(&mut Window, &mut App) -> AnyElement + 'static>;

struct OpenSurface {
    handle: OverlayHandle,
    _surface: Entity<FloatingSurface>,
}

/// Wraps a target element with tooltip behavior
pub struct TooltipArea {
    id: ElementId,
    overlays: Entity<Overlays>,
    anchor: AnchorMeasure,
    text: SharedString,
    side: Side,
    align: Align,
    area: Option<AreaBuilder>,
    hover_epoch: TimerEpoch,
    open: Option<OpenSurface>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl TooltipArea {
    pub fn new(
        id: impl Into<ElementId>,
        overlays: Entity<Overlays>,
        text: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        // Focus shows the tooltip with no delay; blur closes it
        let subscriptions = vec![
            cx.on_focus(&focus_handle, window, |this: &mut Self, window, cx| {
                this.hover_epoch.cancel();
                this.show(window, cx);
            }),
            cx.on_blur(&focus_handle, window, |this: &mut Self, _window, cx| {
                this.hover_epoch.cancel();
                this.hide(cx);
            }),
        ];

        Self {
            id: id.into(),
            overlays,
            anchor: AnchorMeasure::new(),
            text: text.into(),
            side: Side::Top,
            align: Align::Center,
            area: None,
            hover_epoch: TimerEpoch::new(),
            open: None,
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// The target element the tooltip describes
    pub fn area(mut self, builder: impl Fn(&mut Window, &mut App) -> AnyElement + 'static) -> Self {
        self.area = Some(Box::new(builder));
        self
    }

    fn on_hover_change(&mut self, hovered: bool, window: &mut Window, cx: &mut Context<Self>) {
        if hovered {
            if self.open.is_some() {
                return;
            }
            let epoch = self.hover_epoch.arm();
            cx.spawn_in(window, async move |this, cx| {
                cx.background_executor()
                    .timer(Duration::from_millis(TOOLTIP_DELAY_MS))
                    .await;
                this.update_in(cx, |this, window, cx| {
                    if this.hover_epoch.is_current(epoch) {
                        this.show(window, cx);
                    }
                })
                .ok();
            })
            .detach();
        } else {
            self.hover_epoch.cancel();
            self.hide(cx);
        }
    }

    fn show(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.open.is_some() {
            return;
        }
        let registry = self.overlays.read(cx).registry();
        let anchor = self.anchor.clone();
        let (side, align) = (self.side, self.align);
        let bubble = cx.new(|_| TooltipBubble {
            text: self.text.clone(),
        });

        let surface = cx.new(|cx| {
            FloatingSurface::passive(anchor, bubble.into(), &registry, window, cx)
                .side(side)
                .align(align)
                .gap(px(4.0))
        });

        let handle = self.overlays.update(cx, |overlays, cx| {
            let handle = overlays.mount(surface.clone().into(), OverlayLayer::Popup);
            cx.notify();
            handle
        });
        self.open = Some(OpenSurface {
            handle,
            _surface: surface,
        });
        cx.notify();
    }

    fn hide(&mut self, cx: &mut Context<Self>) {
        if let Some(open) = self.open.take() {
            self.overlays.update(cx, |overlays, cx| {
                overlays.unmount(open.handle);
                cx.notify();
            });
            cx.notify();
        }
    }
}

impl Render for TooltipArea {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let area = self.area.as_ref().map(|builder| builder(window, cx));

        div()
            .id(self.id.clone())
            .relative()
            .track_focus(&self.focus_handle)
            .on_hover(cx.listener(|this, hovered: &bool, window, cx| {
                this.on_hover_change(*hovered, window, cx);
            }))
            .children(area)
            .child(self.anchor.probe())
    }
}
