//! ExpandState - Expandable Section Membership
//!
//! Tracks which named sections of an accordion, drawer tree, or stepper
//! navigation are currently expanded.

use ahash::AHashSet;
use gpui::SharedString;

/// Whether one or many sections may be open at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandMode {
    /// Open set has at most one member; opening a section closes the rest
    #[default]
    Single,
    /// Sections expand and collapse independently
    Multiple,
}

/// Open-section membership for a set of named sections
#[derive(Debug, Clone)]
pub struct ExpandState {
    mode: ExpandMode,
    open: AHashSet<SharedString>,
}

impl ExpandState {
    /// Create with a list of ids to pre-open. In single mode only the first
    /// initial id is honored.
    pub fn new<I, S>(mode: ExpandMode, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        let mut open = AHashSet::new();
        for id in initial {
            open.insert(id.into());
            if mode == ExpandMode::Single {
                break;
            }
        }
        Self { mode, open }
    }

    pub fn mode(&self) -> ExpandMode {
        self.mode
    }

    /// Toggle a section: remove it if open, otherwise add it (clearing the
    /// set first in single mode)
    pub fn toggle(&mut self, id: impl Into<SharedString>) {
        let id = id.into();
        if self.open.contains(&id) {
            self.open.remove(&id);
        } else {
            if self.mode == ExpandMode::Single {
                self.open.clear();
            }
            self.open.insert(id);
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Collapse everything
    pub fn clear(&mut self) {
        self.open.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_idempotent_over_two_calls() {
        let mut state = ExpandState::new(ExpandMode::Multiple, ["a", "b"]);
        assert!(state.is_open("a"));

        state.toggle("a");
        assert!(!state.is_open("a"));
        state.toggle("a");
        assert!(state.is_open("a"));
        assert_eq!(state.open_count(), 2);
    }

    #[test]
    fn test_single_mode_cardinality_never_exceeds_one() {
        let mut state = ExpandState::new(ExpandMode::Single, Vec::<&str>::new());
        for id in ["a", "b", "c", "b", "a", "a", "c"] {
            state.toggle(id);
            assert!(state.open_count() <= 1, "open set grew past one");
        }
    }

    #[test]
    fn test_single_mode_switches_sections() {
        let mut state = ExpandState::new(ExpandMode::Single, ["a"]);
        state.toggle("b");
        assert!(state.is_open("b"));
        assert!(!state.is_open("a"));
    }

    #[test]
    fn test_single_mode_honors_only_first_initial() {
        let state = ExpandState::new(ExpandMode::Single, ["a", "b", "c"]);
        assert!(state.is_open("a"));
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn test_multiple_mode_is_unbounded() {
        let mut state = ExpandState::new(ExpandMode::Multiple, Vec::<&str>::new());
        for id in ["a", "b", "c", "d"] {
            state.toggle(id);
        }
        assert_eq!(state.open_count(), 4);
    }
}
