//! Floating surface machinery
//!
//! Shared by Popover, Dropdown, Menu, Tooltip, and Context Menu: pure
//! anchored-position math, RAII dismiss-listener bookkeeping, and the
//! surface entity that ties both to a mounted overlay.

pub mod anchored;
pub mod dismiss;
pub mod position;

pub use anchored::{AnchorMeasure, FloatingSurface};
pub use dismiss::{DismissGuards, ListenerKind, ListenerRegistry};
pub use position::{anchored_origin, offscreen_origin, Align, Side, DEFAULT_GAP};
