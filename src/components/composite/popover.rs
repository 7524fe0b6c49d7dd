//! Popover Component
//!
//! A trigger element plus floating content anchored to it. The popover
//! owns the open flag; the mounted surface reports dismissals back.

use std::rc::Rc;

use gpui::{
    div, prelude::*, AnyElement, AnyView, App, ClickEvent, Context, ElementId, Entity,
    InteractiveElement, IntoElement, ParentElement, Render, StatefulInteractiveElement, Styled,
    Window,
};

use crate::floating::anchored::{AnchorMeasure, FloatingSurface};
use crate::floating::position::{Align, Side};
use crate::overlay::{OverlayHandle, OverlayLayer, Overlays};

type TriggerBuilder = Box<dyn Fn(bool, &mut Window, &mut App) -> AnyElement + 'static>;
type ContentBuilder = Rc<dyn Fn(&mut Window, &mut App) -> AnyView + 'static>;

struct OpenSurface {
    handle: OverlayHandle,
    _surface: Entity<FloatingSurface>,
}

/// A click-toggled floating surface anchored to its trigger
pub struct Popover {
    id: ElementId,
    overlays: Entity<Overlays>,
    anchor: AnchorMeasure,
    side: Side,
    align: Align,
    trigger: Option<TriggerBuilder>,
    content: Option<ContentBuilder>,
    open: Option<OpenSurface>,
}

impl Popover {
    pub fn new(id: impl Into<ElementId>, overlays: Entity<Overlays>) -> Self {
        Self {
            id: id.into(),
            overlays,
            anchor: AnchorMeasure::new(),
            side: Side::Bottom,
            align: Align::Start,
            trigger: None,
            content: None,
            open: None,
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

    /// The trigger element; receives the current open state
    pub fn trigger(
        mut self,
        builder: impl Fn(bool, &mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        self.trigger = Some(Box::new(builder));
        self
    }

    /// Builds the floating content view each time the popover opens
    pub fn content(
        mut self,
        builder: impl Fn(&mut Window, &mut App) -> AnyView + 'static,
    ) -> Self {
        self.content = Some(Rc::new(builder));
        self
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn toggle(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.open.is_some() {
            self.close(cx);
        } else {
            self.open_surface(window, cx);
        }
    }

    fn open_surface(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(builder) = self.content.clone() else {
            return;
        };
        let content = builder(window, cx);
        let registry = self.overlays.read(cx).registry();
        let anchor = self.anchor.clone();
        let (side, align) = (self.side, self.align);
        let this = cx.entity().downgrade();

        let surface = cx.new(|cx| {
            FloatingSurface::new(anchor, content, &registry, window, cx)
                .side(side)
                .align(align)
                .on_dismiss(move |_window, cx| {
                    let this = this.clone();
                    this.update(cx, |popover, cx| popover.close(cx)).ok();
                })
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

    /// Close and unmount, releasing the surface's listeners
    pub fn close(&mut self, cx: &mut Context<Self>) {
        if let Some(open) = self.open.take() {
            self.overlays.update(cx, |overlays, cx| {
                overlays.unmount(open.handle);
                cx.notify();
            });
            cx.notify();
        }
    }

    fn on_trigger_click(
        &mut self,
        _event: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.toggle(window, cx);
    }
}

impl Render for Popover {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let open = self.open.is_some();
        let trigger = self
            .trigger
            .as_ref()
            .map(|builder| builder(open, window, cx));

        div()
            .id(self.id.clone())
            .relative()
            .on_click(cx.listener(Self::on_trigger_click))
            .children(trigger)
            .child(self.anchor.probe())
    }
}
