//! SnackbarState - Bounded Message Queue
//!
//! Snackbars queue up and display one at a time. The queue is bounded;
//! when full, the oldest waiting message is evicted (FIFO). Auto-dismiss
//! timers are owned by the host view, keyed by message id.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use gpui::SharedString;
use uuid::Uuid;

/// Most messages kept waiting behind the visible one
const MAX_QUEUED: usize = 3;

/// How long a snackbar stays up without interaction
pub const AUTO_DISMISS_MS: u64 = 4000;

/// A single queued snackbar message
#[derive(Debug, Clone)]
pub struct Snackbar {
    pub id: Uuid,
    pub message: SharedString,
    pub action_label: Option<SharedString>,
    pub posted_at: DateTime<Local>,
}

impl Snackbar {
    pub fn new(message: impl Into<SharedString>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            action_label: None,
            posted_at: Local::now(),
        }
    }

    pub fn with_action(mut self, label: impl Into<SharedString>) -> Self {
        self.action_label = Some(label.into());
        self
    }
}

/// FIFO queue of snackbars, visible message at the front
#[derive(Debug, Default)]
pub struct SnackbarState {
    queue: VecDeque<Snackbar>,
}

impl SnackbarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a message, evicting the oldest *waiting* message when the
    /// backlog is full. The visible snackbar is never evicted.
    pub fn push(&mut self, snackbar: Snackbar) {
        self.queue.push_back(snackbar);
        while self.queue.len() > MAX_QUEUED + 1 {
            self.queue.remove(1);
        }
    }

    /// The currently visible snackbar
    pub fn current(&self) -> Option<&Snackbar> {
        self.queue.front()
    }

    /// Remove a message by id (manual dismissal or timer expiry); returns
    /// whether it was the visible one
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let was_current = self.current().map(|s| s.id) == Some(id);
        self.queue.retain(|s| s.id != id);
        was_current
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_display_in_fifo_order() {
        let mut state = SnackbarState::new();
        let first = Snackbar::new("first");
        let first_id = first.id;
        state.push(first);
        state.push(Snackbar::new("second"));

        assert_eq!(state.current().map(|s| s.id), Some(first_id));
        state.dismiss(first_id);
        assert_eq!(state.current().map(|s| &**s.message), Some("second"));
    }

    #[test]
    fn test_backlog_is_bounded_and_visible_survives() {
        let mut state = SnackbarState::new();
        let visible = Snackbar::new("visible");
        let visible_id = visible.id;
        state.push(visible);
        for i in 0..10 {
            state.push(Snackbar::new(format!("queued {i}")));
        }

        assert_eq!(state.len(), MAX_QUEUED + 1);
        assert_eq!(state.current().map(|s| s.id), Some(visible_id));
    }

    #[test]
    fn test_dismiss_unknown_id_is_a_no_op() {
        let mut state = SnackbarState::new();
        state.push(Snackbar::new("only"));
        assert!(!state.dismiss(Uuid::new_v4()));
        assert_eq!(state.len(), 1);
    }
}
