//! Overlay layer manager
//!
//! Floating content renders outside the normal view hierarchy: callers
//! `mount` a view onto a layer and get a handle back, `unmount` removes it.
//! The workspace paints mounted content above the page in layer order
//! (popups below modals below toasts). Unmounting an entry drops its
//! dismiss guards, which is what detaches the entry's window listeners.

use std::rc::Rc;

use gpui::AnyView;
use uuid::Uuid;

use crate::floating::dismiss::{DismissGuards, ListenerRegistry};

/// Z-ordering groups, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OverlayLayer {
    /// Popovers, menus, dropdowns, tooltips
    Popup,
    /// Dialogs and their scrim
    Modal,
    /// Snackbars
    Toast,
}

/// Opaque handle to a mounted overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle(Uuid);

struct OverlayEntry<V> {
    handle: OverlayHandle,
    layer: OverlayLayer,
    seq: u64,
    content: V,
    _guards: DismissGuards,
}

/// Ordered stack of mounted overlay content
///
/// Generic over the content type so the stacking rules stay testable
/// without a window; the gallery uses it with [`AnyView`].
pub struct OverlayStack<V> {
    entries: Vec<OverlayEntry<V>>,
    next_seq: u64,
}

impl<V> Default for OverlayStack<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<V> OverlayStack<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount content with no window listeners (e.g. a snackbar)
    pub fn mount(&mut self, content: V, layer: OverlayLayer) -> OverlayHandle {
        self.mount_guarded(content, layer, DismissGuards::new())
    }

    /// Mount content together with the listener guards it holds while open
    pub fn mount_guarded(
        &mut self,
        content: V,
        layer: OverlayLayer,
        guards: DismissGuards,
    ) -> OverlayHandle {
        let handle = OverlayHandle(Uuid::new_v4());
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(OverlayEntry {
            handle,
            layer,
            seq,
            content,
            _guards: guards,
        });
        self.entries.sort_by_key(|e| (e.layer, e.seq));
        handle
    }

    /// Remove a mounted entry, dropping its guards; returns whether the
    /// handle was mounted
    pub fn unmount(&mut self, handle: OverlayHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        before != self.entries.len()
    }

    pub fn is_mounted(&self, handle: OverlayHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mounted content in paint order (bottom first)
    pub fn contents(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|e| &e.content)
    }
}

/// The gallery's overlay service: an [`OverlayStack`] of views plus the
/// listener registry surfaces register their dismiss listeners with.
pub struct Overlays {
    stack: OverlayStack<AnyView>,
    registry: Rc<ListenerRegistry>,
}

impl Default for Overlays {
    fn default() -> Self {
        Self {
            stack: OverlayStack::new(),
            registry: ListenerRegistry::new(),
        }
    }
}

impl Overlays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> Rc<ListenerRegistry> {
        Rc::clone(&self.registry)
    }

    pub fn mount(&mut self, view: AnyView, layer: OverlayLayer) -> OverlayHandle {
        self.stack.mount(view, layer)
    }

    pub fn mount_guarded(
        &mut self,
        view: AnyView,
        layer: OverlayLayer,
        guards: DismissGuards,
    ) -> OverlayHandle {
        self.stack.mount_guarded(view, layer, guards)
    }

    pub fn unmount(&mut self, handle: OverlayHandle) -> bool {
        self.stack.unmount(handle)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Views in paint order
    pub fn views(&self) -> Vec<AnyView> {
        self.stack.contents().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floating::dismiss::ListenerKind;

    #[test]
    fn test_unmount_removes_only_the_handle() {
        let mut stack = OverlayStack::new();
        let a = stack.mount("a", OverlayLayer::Popup);
        let b = stack.mount("b", OverlayLayer::Popup);

        assert!(stack.unmount(a));
        assert!(!stack.is_mounted(a));
        assert!(stack.is_mounted(b));
        assert!(!stack.unmount(a), "double unmount reports false");
    }

    #[test]
    fn test_paint_order_is_layer_then_insertion() {
        let mut stack = OverlayStack::new();
        stack.mount("toast", OverlayLayer::Toast);
        stack.mount("popup-1", OverlayLayer::Popup);
        stack.mount("modal", OverlayLayer::Modal);
        stack.mount("popup-2", OverlayLayer::Popup);

        let order: Vec<_> = stack.contents().copied().collect();
        assert_eq!(order, vec!["popup-1", "popup-2", "modal", "toast"]);
    }

    #[test]
    fn test_unmount_drops_listener_guards() {
        let registry = ListenerRegistry::new();
        let mut stack = OverlayStack::new();

        let mut guards = DismissGuards::new();
        for kind in [
            ListenerKind::Scroll,
            ListenerKind::Resize,
            ListenerKind::PointerDown,
            ListenerKind::KeyDown,
        ] {
            guards.track(registry.register(kind));
        }
        let handle = stack.mount_guarded("popup", OverlayLayer::Popup, guards);
        assert_eq!(registry.total(), 4);

        stack.unmount(handle);
        assert_eq!(registry.total(), 0);
    }
}
