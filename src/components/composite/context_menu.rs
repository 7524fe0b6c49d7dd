//! Context Menu Component
//!
//! Wraps an area; a secondary click opens a command menu at the pointer
//! position, using a zero-size anchor so the same positioner applies.

use gpui::{
    div, prelude::*, AnyElement, App, Context, ElementId, Entity, InteractiveElement, IntoElement,
    MouseButton, MouseDownEvent, ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};

use super::menu::{MenuCloser, MenuEntry, MenuList};
use crate::floating::anchored::{pointer_anchor, FloatingSurface};
use crate::floating::position::{Align, Side};
use crate::overlay::{OverlayHandle, OverlayLayer, Overlays};

use std::rc::Rc;

type AreaBuilder = Box<dyn Fn(&mut Window, &mut App) -> AnyElement + 'static>;

struct OpenSurface {
    handle: OverlayHandle,
    _surface: Entity<FloatingSurface>,
}

/// An area with a right-click command menu
pub struct ContextMenuArea {
    id: ElementId,
    overlays: Entity<Overlays>,
    area: Option<AreaBuilder>,
    entries: Vec<MenuEntry>,
    open: Option<OpenSurface>,
}

impl ContextMenuArea {
    pub fn new(id: impl Into<ElementId>, overlays: Entity<Overlays>) -> Self {
        Self {
            id: id.into(),
            overlays,
            area: None,
            entries: Vec::new(),
            open: None,
        }
    }

    /// The clickable area content
    pub fn area(mut self, builder: impl Fn(&mut Window, &mut App) -> AnyElement + 'static) -> Self {
        self.area = Some(Box::new(builder));
        self
    }

    pub fn entries(mut self, entries: Vec<MenuEntry>) -> Self {
        self.entries = entries;
        self
    }

    fn open_at(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        // Re-opening at a new position replaces the old surface
        self.close(cx);

        let registry = self.overlays.read(cx).registry();
        let anchor = pointer_anchor(event.position);
        let this = cx.entity().downgrade();

        let closer: MenuCloser = {
            let this = this.clone();
            Rc::new(move |_window, cx| {
                this.update(cx, |area, cx| area.close(cx)).ok();
            })
        };
        let list = cx.new(|_| MenuList::new(self.entries.clone(), closer));

        let surface = cx.new(|cx| {
            FloatingSurface::new(anchor, list.into(), &registry, window, cx)
                .side(Side::Bottom)
                .align(Align::Start)
                .gap(gpui::px(0.0))
                .on_dismiss(move |_window, cx| {
                    this.update(cx, |area, cx| area.close(cx)).ok();
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

    pub fn close(&mut self, cx: &mut Context<Self>) {
        if let Some(open) = self.open.take() {
            self.overlays.update(cx, |overlays, cx| {
                overlays.unmount(open.handle);
                cx.notify();
            });
            cx.notify();
        }
    }
}

impl Render for ContextMenuArea {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let area = self.area.as_ref().map(|builder| builder(window, cx));

        div()
            .id(self.id.clone())
            .on_mouse_down(
                MouseButton::Right,
                cx.listener(|this, event: &MouseDownEvent, window, cx| {
                    cx.stop_propagation();
                    this.open_at(event, window, cx);
                }),
            )
            .children(area)
    }
}
