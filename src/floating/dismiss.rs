//! Dismiss-listener bookkeeping
//!
//! Every open floating surface registers window-level listeners (scroll,
//! resize, pointer-down-outside, key-down). Registration hands back an RAII
//! guard; dropping the surface's [`DismissGuards`] set removes every
//! listener it registered. The registry counts live registrations so the
//! open/close symmetry is observable.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;
use gpui::Subscription;

/// The window-level listener kinds a floating surface may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    Resize,
    PointerDown,
    KeyDown,
}

/// Shared count of live listener registrations, keyed by kind
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    counts: RefCell<AHashMap<ListenerKind, usize>>,
}

impl ListenerRegistry {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register a listener of `kind`; the registration lives as long as the
    /// returned guard
    pub fn register(self: &Rc<Self>, kind: ListenerKind) -> ListenerGuard {
        *self.counts.borrow_mut().entry(kind).or_insert(0) += 1;
        ListenerGuard {
            registry: Rc::clone(self),
            kind,
        }
    }

    /// Live registrations of one kind
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.counts.borrow().get(&kind).copied().unwrap_or(0)
    }

    /// Live registrations across all kinds
    pub fn total(&self) -> usize {
        self.counts.borrow().values().sum()
    }

    fn release(&self, kind: ListenerKind) {
        let mut counts = self.counts.borrow_mut();
        match counts.get_mut(&kind) {
            Some(count) if *count > 0 => *count -= 1,
            _ => tracing::error!(?kind, "listener released more times than registered"),
        }
    }
}

/// RAII handle for one listener registration
#[derive(Debug)]
pub struct ListenerGuard {
    registry: Rc<ListenerRegistry>,
    kind: ListenerKind,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.release(self.kind);
    }
}

/// Everything a floating surface holds while open: listener guards plus the
/// GPUI subscriptions backing them. Dropping the set tears all of it down.
#[derive(Default)]
pub struct DismissGuards {
    listeners: Vec<ListenerGuard>,
    subscriptions: Vec<Subscription>,
}

impl DismissGuards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, guard: ListenerGuard) {
        self.listeners.push(guard);
    }

    pub fn track_subscription(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_count_returns_to_baseline_after_close() {
        let registry = ListenerRegistry::new();
        let baseline = registry.total();

        let mut guards = DismissGuards::new();
        for kind in [
            ListenerKind::Scroll,
            ListenerKind::Resize,
            ListenerKind::PointerDown,
            ListenerKind::KeyDown,
        ] {
            guards.track(registry.register(kind));
        }
        assert_eq!(registry.total(), baseline + 4);

        drop(guards);
        assert_eq!(registry.total(), baseline);
    }

    #[test]
    fn test_overlapping_surfaces_release_independently() {
        let registry = ListenerRegistry::new();

        let first = registry.register(ListenerKind::PointerDown);
        let second = registry.register(ListenerKind::PointerDown);
        assert_eq!(registry.count(ListenerKind::PointerDown), 2);

        drop(first);
        assert_eq!(registry.count(ListenerKind::PointerDown), 1);
        drop(second);
        assert_eq!(registry.count(ListenerKind::PointerDown), 0);
    }

    #[test]
    fn test_repeated_open_close_cycles_do_not_drift() {
        let registry = ListenerRegistry::new();
        for _ in 0..5 {
            let mut guards = DismissGuards::new();
            guards.track(registry.register(ListenerKind::Scroll));
            guards.track(registry.register(ListenerKind::KeyDown));
            assert_eq!(registry.total(), 2);
        }
        assert_eq!(registry.total(), 0);
    }
}
