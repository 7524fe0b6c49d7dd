//! Menu Component
//!
//! A floating list of commands opened from a button. Items receive the
//! menu's closer capability when the list view is built, so activating a
//! command also closes the surface without any hidden context lookup.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, Context, ElementId, Entity,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::icon::Icon;
use crate::floating::anchored::{AnchorMeasure, FloatingSurface};
use crate::floating::position::{Align, Side};
use crate::overlay::{OverlayHandle, OverlayLayer, Overlays};
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// Capability handed to menu items for closing the open surface
pub type MenuCloser = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// A selectable command
#[derive(Clone)]
pub struct MenuItem {
    pub label: SharedString,
    pub icon: Option<IconName>,
    pub disabled: bool,
    handler: Rc<dyn Fn(&mut Window, &mut App) + 'static>,
}

impl MenuItem {
    pub fn new(
        label: impl Into<SharedString>,
        handler: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            icon: None,
            disabled: false,
            handler: Rc::new(handler),
        }
    }

    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// An entry in a menu: a command or a separator line
#[derive(Clone)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
}

/// The floating list view; built fresh each time a menu opens
pub struct MenuList {
    entries: Vec<MenuEntry>,
    closer: MenuCloser,
}

impl MenuList {
    pub fn new(entries: Vec<MenuEntry>, closer: MenuCloser) -> Self {
        Self { entries, closer }
    }

    fn render_item(&self, index: usize, item: &MenuItem, cx: &mut Context<Self>) -> AnyElement {
        let colors = cx.theme().colors;
        let density = cx.theme().density;

        if item.disabled {
            return div()
                .px_3()
                .py(density.row_padding())
                .flex()
                .items_center()
                .gap_3()
                .text_size(px(TypeScale::BODY_MEDIUM))
                .text_color(colors.disabled_content())
                .when_some(item.icon, |el, icon| {
                    el.child(Icon::new(icon).size(px(18.0)).color(colors.disabled_content()))
                })
                .child(item.label.clone())
                .into_any_element();
        }

        let handler = item.handler.clone();
        let closer = self.closer.clone();

        div()
            .id(("menu-item", index))
            .px_3()
            .py(density.row_padding())
            .flex()
            .items_center()
            .gap_3()
            .cursor_pointer()
            .text_size(px(TypeScale::BODY_MEDIUM))
            .text_color(colors.on_surface)
            .hover(|s| s.bg(colors.hover_layer()))
            .when_some(item.icon, |el, icon| {
                el.child(Icon::new(icon).size(px(18.0)).color(colors.on_surface_variant))
            })
            .child(item.label.clone())
            .on_click(move |_event: &ClickEvent, window, cx| {
                handler(window, cx);
                closer(window, cx);
            })
            .into_any_element()
    }
}

impl Render for MenuList {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let entries = self.entries.clone();

        div()
            .min_w(px(160.0))
            .py_2()
            .bg(colors.surface_container)
            .rounded_md()
            .shadow_md()
            .flex()
            .flex_col()
            .children(entries.iter().enumerate().map(|(i, entry)| match entry {
                MenuEntry::Item(item) => self.render_item(i, item, cx),
                MenuEntry::Separator => div()
                    .my_1()
                    .h(px(1.0))
                    .w_full()
                    .bg(colors.outline_variant)
                    .into_any_element(),
            }))
    }
}

type TriggerBuilder = Box<dyn Fn(bool, &mut Window, &mut App) -> AnyElement + 'static>;

struct OpenSurface {
    handle: OverlayHandle,
    _surface: Entity<FloatingSurface>,
}

/// A button that opens a command menu
pub struct MenuButton {
    id: ElementId,
    overlays: Entity<Overlays>,
    anchor: AnchorMeasure,
    side: Side,
    align: Align,
    trigger: Option<TriggerBuilder>,
    entries: Vec<MenuEntry>,
    open: Option<OpenSurface>,
}

impl MenuButton {
    pub fn new(id: impl Into<ElementId>, overlays: Entity<Overlays>) -> Self {
        Self {
            id: id.into(),
            overlays,
            anchor: AnchorMeasure::new(),
            side: Side::Bottom,
            align: Align::Start,
            trigger: None,
            entries: Vec::new(),
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

    pub fn trigger(
        mut self,
        builder: impl Fn(bool, &mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        self.trigger = Some(Box::new(builder));
        self
    }

    pub fn entries(mut self, entries: Vec<MenuEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn toggle(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.open.is_some() {
            self.close(cx);
        } else {
            self.open_menu(window, cx);
        }
    }

    fn open_menu(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let registry = self.overlays.read(cx).registry();
        let anchor = self.anchor.clone();
        let (side, align) = (self.side, self.align);
        let this = cx.entity().downgrade();

        let closer: MenuCloser = {
            let this = this.clone();
            Rc::new(move |_window, cx| {
                this.update(cx, |menu, cx| menu.close(cx)).ok();
            })
        };
        let list = cx.new(|_| MenuList::new(self.entries.clone(), closer));

        let surface = cx.new(|cx| {
            FloatingSurface::new(anchor, list.into(), &registry, window, cx)
                .side(side)
                .align(align)
                .on_dismiss(move |_window, cx| {
                    this.update(cx, |menu, cx| menu.close(cx)).ok();
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

impl Render for MenuButton {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let open = self.open.is_some();
        let trigger = self
            .trigger
            .as_ref()
            .map(|builder| builder(open, window, cx));

        div()
            .id(self.id.clone())
            .relative()
            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| this.toggle(window, cx)))
            .children(trigger)
            .child(self.anchor.probe())
    }
}
