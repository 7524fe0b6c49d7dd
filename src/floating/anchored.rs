//! Anchored floating surface
//!
//! The shared open-surface machinery behind Popover, Dropdown, Menu,
//! Tooltip, and Context Menu. A [`FloatingSurface`] is mounted onto the
//! popup layer, measures its content invisibly on the first frame, then
//! positions it adjacent to the anchor and keeps the position current
//! across scrolls and window resizes. Dismissal (outside click, Escape)
//! is reported through the `on_dismiss` callback; the opener owns the
//! open/closed flag.

use std::cell::Cell;
use std::rc::Rc;

use gpui::{
    canvas, div, prelude::*, px, AnyElement, AnyView, App, Bounds, Context, FocusHandle,
    KeyDownEvent, MouseButton, MouseDownEvent, Pixels, Point, ScrollWheelEvent, Size, Window,
};

use super::dismiss::{DismissGuards, ListenerKind, ListenerRegistry};
use super::position::{anchored_origin, offscreen_origin, Align, Side, DEFAULT_GAP};

/// Hover delay before a tooltip surface opens
pub const TOOLTIP_DELAY_MS: u64 = 700;

/// The measure capability: a shared cell the trigger element fills with its
/// rendered bounds during paint, read back by the positioner. Decouples
/// measurement from any particular element handle; a trigger that left the
/// tree simply stops recording and the last value goes stale behind `None`
/// once cleared.
#[derive(Clone, Default)]
pub struct AnchorMeasure(Rc<Cell<Option<Bounds<Pixels>>>>);

impl AnchorMeasure {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fixed zero-size anchor at a point, for surfaces opened at the
    /// pointer position (context menus)
    pub fn fixed(origin: Point<Pixels>) -> Self {
        let measure = Self::default();
        measure.0.set(Some(Bounds {
            origin,
            size: gpui::size(px(0.0), px(0.0)),
        }));
        measure
    }

    pub fn record(&self, bounds: Bounds<Pixels>) {
        self.0.set(Some(bounds));
    }

    pub fn get(&self) -> Option<Bounds<Pixels>> {
        self.0.get()
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    /// An invisible element that records its parent's bounds into this
    /// measure on every paint. Add it as a child of the trigger.
    pub fn probe(&self) -> AnyElement {
        let measure = self.clone();
        canvas(
            move |bounds, _window, _cx| measure.record(bounds),
            |_, _, _, _| {},
        )
        .absolute()
        .size_full()
        .into_any_element()
    }
}

/// A floating surface mounted on the popup layer
pub struct FloatingSurface {
    anchor: AnchorMeasure,
    content: AnyView,
    side: Side,
    align: Align,
    gap: Pixels,
    min_width: Option<Pixels>,
    with_backdrop: bool,
    content_size: Option<Size<Pixels>>,
    last_origin: Option<Point<Pixels>>,
    focus_handle: FocusHandle,
    focus_taken: bool,
    on_dismiss: Option<Rc<dyn Fn(&mut Window, &mut App)>>,
    _guards: DismissGuards,
}

impl FloatingSurface {
    /// Create a surface with dismiss listeners registered. Interactive
    /// surfaces (popover, menu, dropdown) keep the default backdrop;
    /// tooltips opt out via [`passive`](Self::passive).
    pub fn new(
        anchor: AnchorMeasure,
        content: AnyView,
        registry: &Rc<ListenerRegistry>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut guards = DismissGuards::new();
        for kind in [
            ListenerKind::Scroll,
            ListenerKind::Resize,
            ListenerKind::PointerDown,
            ListenerKind::KeyDown,
        ] {
            guards.track(registry.register(kind));
        }
        guards.track_subscription(cx.observe_window_bounds(window, |_, _, cx| cx.notify()));

        let mut surface = Self::new_unguarded(anchor, content, cx);
        surface._guards = guards;
        surface
    }

    /// A passive surface: no backdrop, no pointer/key dismissal. The opener
    /// closes it from trigger state (tooltips on mouse-leave/blur).
    pub fn passive(
        anchor: AnchorMeasure,
        content: AnyView,
        registry: &Rc<ListenerRegistry>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut guards = DismissGuards::new();
        guards.track(registry.register(ListenerKind::Scroll));
        guards.track(registry.register(ListenerKind::Resize));
        guards.track_subscription(cx.observe_window_bounds(window, |_, _, cx| cx.notify()));

        let mut surface = Self::new_unguarded(anchor, content, cx);
        surface.with_backdrop = false;
        surface._guards = guards;
        surface
    }

    fn new_unguarded(anchor: AnchorMeasure, content: AnyView, cx: &mut Context<Self>) -> Self {
        Self {
            anchor,
            content,
            side: Side::Bottom,
            align: Align::Start,
            gap: px(DEFAULT_GAP),
            min_width: None,
            with_backdrop: true,
            content_size: None,
            last_origin: None,
            focus_handle: cx.focus_handle(),
            focus_taken: false,
            on_dismiss: None,
            _guards: DismissGuards::new(),
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

    pub fn gap(mut self, gap: Pixels) -> Self {
        self.gap = gap;
        self
    }

    /// Minimum content width; dropdowns pass the trigger width here
    pub fn min_width(mut self, width: Pixels) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Called when the surface asks to close (outside click or Escape)
    pub fn on_dismiss(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_dismiss = Some(Rc::new(handler));
        self
    }

    /// Where the content goes this frame: off-screen until measured, then
    /// anchored; if the anchor is gone, hold the last good position.
    fn current_origin(&self) -> Point<Pixels> {
        let Some(content) = self.content_size else {
            return offscreen_origin();
        };
        match self.anchor.get() {
            Some(anchor) => anchored_origin(anchor, content, self.side, self.align, self.gap),
            None => self.last_origin.unwrap_or_else(offscreen_origin),
        }
    }

    fn request_dismiss(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_dismiss.clone() {
            handler(window, cx);
        }
    }

    fn on_outside_click(
        &mut self,
        _event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        cx.stop_propagation();
        self.request_dismiss(window, cx);
    }

    fn on_scroll(
        &mut self,
        _event: &ScrollWheelEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // The anchor probe re-records on repaint; re-render to pick it up
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if event.keystroke.key == "escape" {
            cx.stop_propagation();
            self.request_dismiss(window, cx);
        }
    }
}

impl Render for FloatingSurface {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let origin = self.current_origin();
        if self.anchor.get().is_some() && self.content_size.is_some() {
            self.last_origin = Some(origin);
        }

        // Grab focus once so Escape reaches the backdrop
        if self.with_backdrop && !self.focus_taken {
            window.focus(&self.focus_handle);
            self.focus_taken = true;
        }

        let known_size = self.content_size;
        let this = cx.entity().downgrade();
        let measure = canvas(
            move |bounds, _window, cx| {
                if known_size != Some(bounds.size) {
                    let this = this.clone();
                    let size = bounds.size;
                    cx.defer(move |cx| {
                        this.update(cx, |surface, cx| {
                            surface.content_size = Some(size);
                            cx.notify();
                        })
                        .ok();
                    });
                }
            },
            |_, _, _, _| {},
        )
        .absolute()
        .size_full();

        let positioned = div()
            .absolute()
            .left(origin.x)
            .top(origin.y)
            // Tooltips must not intercept the pointer
            .when(self.with_backdrop, |el| el.occlude())
            .when_some(self.min_width, |el, w| el.min_w(w))
            .child(self.content.clone())
            .child(measure);

        if self.with_backdrop {
            div()
                .absolute()
                .inset_0()
                .track_focus(&self.focus_handle)
                .on_mouse_down(MouseButton::Left, cx.listener(Self::on_outside_click))
                .on_mouse_down(MouseButton::Right, cx.listener(Self::on_outside_click))
                .on_scroll_wheel(cx.listener(Self::on_scroll))
                .on_key_down(cx.listener(Self::on_key_down))
                .child(positioned)
                .into_any_element()
        } else {
            div()
                .absolute()
                .inset_0()
                .child(positioned)
                .into_any_element()
        }
    }
}

/// Convenience for context menus: an anchor at the click position
pub fn pointer_anchor(position: Point<Pixels>) -> AnchorMeasure {
    AnchorMeasure::fixed(position)
}
