//! GalleryState - Active Demo Selection
//!
//! The gallery router: holds the active registry entry and rejects ids the
//! registry does not know, so navigation state is always valid.

use crate::registry::{self, Category, ComponentEntry};

/// Which registry entry the gallery is showing
#[derive(Debug)]
pub struct GalleryState {
    active_id: &'static str,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            active_id: registry::entries()[0].id,
        }
    }
}

impl GalleryState {
    /// Select an entry by id. Unknown ids are ignored; returns whether the
    /// selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        match registry::find(id) {
            Some(entry) if entry.id != self.active_id => {
                self.active_id = entry.id;
                true
            }
            Some(_) => false,
            None => {
                tracing::debug!(id, "ignoring unknown gallery id");
                false
            }
        }
    }

    /// Select the first entry of a category
    pub fn select_category(&mut self, category: Category) -> bool {
        match registry::by_category(category).next() {
            Some(entry) => self.select(entry.id),
            None => false,
        }
    }

    pub fn active_id(&self) -> &'static str {
        self.active_id
    }

    pub fn active_entry(&self) -> &'static ComponentEntry {
        // The id is only ever set from the registry itself
        registry::find(self.active_id).unwrap_or(&registry::entries()[0])
    }

    pub fn active_category(&self) -> Category {
        self.active_entry().category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_id_leaves_selection_untouched() {
        let mut state = GalleryState::default();
        let before = state.active_id();
        assert!(!state.select("not-a-component"));
        assert_eq!(state.active_id(), before);
    }

    #[test]
    fn test_selecting_entry_switches_category() {
        let mut state = GalleryState::default();
        assert!(state.select("data-table"));
        assert_eq!(state.active_category(), Category::Data);
    }

    #[test]
    fn test_reselecting_active_reports_no_change() {
        let mut state = GalleryState::default();
        state.select("dialog");
        assert!(!state.select("dialog"));
    }

    #[test]
    fn test_select_category_picks_first_entry() {
        let mut state = GalleryState::default();
        assert!(state.select_category(Category::Selection));
        assert_eq!(state.active_category(), Category::Selection);
    }
}
