//! Pagination - Page Range Calculation and Navigation State
//!
//! The range calculator produces the sequence of page numbers and ellipsis
//! markers a pagination bar renders around the current page.

/// One rendered slot in a pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A numbered page (1-based)
    Page(usize),
    /// A gap marker between page runs
    Ellipsis,
}

/// Compute the ordered page items for `current` of `total` pages, showing
/// `siblings` neighbors on each side of the current page.
///
/// When every page fits (total ≤ siblings*2 + 5) the full range is
/// returned with no ellipsis. Otherwise the first and last page are always
/// shown, and a run adjacent to a boundary absorbs the would-be gap so the
/// item count stays constant while paging.
pub fn page_range(current: usize, total: usize, siblings: usize) -> Vec<PageItem> {
    let max_visible = siblings * 2 + 5;
    if total <= max_visible {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let left = current.saturating_sub(siblings).max(1);
    let right = (current + siblings).min(total);
    let has_left_gap = left > 2;
    let has_right_gap = right < total - 1;

    let mut items = Vec::with_capacity(max_visible);
    match (has_left_gap, has_right_gap) {
        (false, true) => {
            let left_count = 3 + 2 * siblings;
            items.extend((1..=left_count).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
        (true, false) => {
            let right_count = 3 + 2 * siblings;
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend(((total - right_count + 1)..=total).map(PageItem::Page));
        }
        (true, true) => {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend((left..=right).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
        // No gap on either side only happens below the threshold
        (false, false) => items.extend((1..=total).map(PageItem::Page)),
    }
    items
}

/// Current-page state for a pagination bar or data table
#[derive(Debug, Clone)]
pub struct PaginationState {
    current: usize,
    total: usize,
    siblings: usize,
}

impl PaginationState {
    pub fn new(total: usize, siblings: usize) -> Self {
        Self {
            current: 1,
            total,
            siblings,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Request a page, clamped into `[1, total]`. Out-of-range requests
    /// never produce an out-of-range state.
    pub fn set_page(&mut self, page: usize) {
        self.current = page.clamp(1, self.total.max(1));
    }

    pub fn next(&mut self) {
        self.set_page(self.current + 1);
    }

    pub fn prev(&mut self) {
        self.set_page(self.current.saturating_sub(1));
    }

    /// Replace the page count, keeping the current page in range
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.current = self.current.clamp(1, total.max(1));
    }

    /// Items to render for the current state
    pub fn items(&self) -> Vec<PageItem> {
        page_range(self.current, self.total, self.siblings)
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_middle_window_with_both_gaps() {
        assert_eq!(
            page_range(10, 20, 1),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_small_total_renders_full_range() {
        assert_eq!(
            page_range(1, 5, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_no_left_gap_extends_leading_run() {
        assert_eq!(
            page_range(2, 10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_no_right_gap_extends_trailing_run() {
        assert_eq!(
            page_range(9, 10, 1),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_item_count_is_stable_while_paging() {
        let count = page_range(5, 30, 1).len();
        for current in 1..=30 {
            assert_eq!(page_range(current, 30, 1).len(), count, "page {current}");
        }
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(page_range(0, 20, 1), page_range(1, 20, 1));
        assert_eq!(page_range(99, 20, 1), page_range(20, 20, 1));
    }

    #[test]
    fn test_zero_pages_yields_no_items() {
        assert!(page_range(1, 0, 1).is_empty());
    }

    #[test]
    fn test_state_clamps_page_zero_and_past_end() {
        let mut state = PaginationState::new(20, 1);
        state.set_page(0);
        assert_eq!(state.current(), 1);
        state.set_page(21);
        assert_eq!(state.current(), 20);
    }

    #[test]
    fn test_state_prev_at_first_page_stays_put() {
        let mut state = PaginationState::new(3, 1);
        state.prev();
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn test_shrinking_total_pulls_current_back() {
        let mut state = PaginationState::new(20, 1);
        state.set_page(18);
        state.set_total(5);
        assert_eq!(state.current(), 5);
    }
}
