//! Anchored position math
//!
//! Computes the window-fixed origin that places floating content adjacent
//! to an anchor rectangle on a requested side, with a requested alignment.
//! There is no viewport-overflow correction: content that would land
//! off-window is clipped, by design.

use gpui::{point, px, Bounds, Pixels, Point, Size};

/// Pixel gap between anchor and content when none is specified
pub const DEFAULT_GAP: f32 = 8.0;

/// Which edge of the anchor the content attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Whether the content sits above or below (as opposed to beside)
    pub fn is_vertical(&self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// Offset along the edge perpendicular to the side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Fixed origin for `content` anchored to `anchor` on `side` with `align`,
/// separated by `gap` pixels.
pub fn anchored_origin(
    anchor: Bounds<Pixels>,
    content: Size<Pixels>,
    side: Side,
    align: Align,
    gap: Pixels,
) -> Point<Pixels> {
    match side {
        Side::Top | Side::Bottom => {
            let y = match side {
                Side::Top => anchor.top() - content.height - gap,
                _ => anchor.bottom() + gap,
            };
            let x = match align {
                Align::Start => anchor.left(),
                Align::Center => anchor.left() + (anchor.size.width - content.width) * 0.5,
                Align::End => anchor.right() - content.width,
            };
            point(x, y)
        }
        Side::Left | Side::Right => {
            let x = match side {
                Side::Left => anchor.left() - content.width - gap,
                _ => anchor.right() + gap,
            };
            let y = match align {
                Align::Start => anchor.top(),
                Align::Center => anchor.top() + (anchor.size.height - content.height) * 0.5,
                Align::End => anchor.bottom() - content.height,
            };
            point(x, y)
        }
    }
}

/// Origin used to mount content invisibly on its measuring frame
pub fn offscreen_origin() -> Point<Pixels> {
    point(px(-10_000.0), px(-10_000.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::size;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Bounds<Pixels> {
        Bounds {
            origin: point(px(x), px(y)),
            size: size(px(w), px(h)),
        }
    }

    fn anchor() -> Bounds<Pixels> {
        rect(100.0, 100.0, 50.0, 20.0)
    }

    fn content() -> Size<Pixels> {
        size(px(80.0), px(30.0))
    }

    #[test]
    fn test_bottom_center_matches_fixture() {
        let origin = anchored_origin(anchor(), content(), Side::Bottom, Align::Center, px(8.0));
        assert_eq!(origin, point(px(85.0), px(128.0)));
    }

    #[test]
    fn test_top_side_clears_content_height() {
        let origin = anchored_origin(anchor(), content(), Side::Top, Align::Start, px(8.0));
        assert_eq!(origin, point(px(100.0), px(62.0)));
    }

    #[test]
    fn test_bottom_end_aligns_right_edges() {
        let origin = anchored_origin(anchor(), content(), Side::Bottom, Align::End, px(8.0));
        assert_eq!(origin, point(px(70.0), px(128.0)));
    }

    #[test]
    fn test_right_side_alignments() {
        let gap = px(4.0);
        let start = anchored_origin(anchor(), content(), Side::Right, Align::Start, gap);
        assert_eq!(start, point(px(154.0), px(100.0)));

        let center = anchored_origin(anchor(), content(), Side::Right, Align::Center, gap);
        assert_eq!(center, point(px(154.0), px(95.0)));

        let end = anchored_origin(anchor(), content(), Side::Right, Align::End, gap);
        assert_eq!(end, point(px(154.0), px(90.0)));
    }

    #[test]
    fn test_left_side_clears_content_width() {
        let origin = anchored_origin(anchor(), content(), Side::Left, Align::Start, px(4.0));
        assert_eq!(origin, point(px(16.0), px(100.0)));
    }

    #[test]
    fn test_zero_size_anchor_acts_as_a_point() {
        let cursor = rect(300.0, 200.0, 0.0, 0.0);
        let origin = anchored_origin(cursor, content(), Side::Bottom, Align::Start, px(0.0));
        assert_eq!(origin, point(px(300.0), px(200.0)));
    }

    #[test]
    fn test_no_overflow_correction_is_applied() {
        let near_edge = rect(4.0, 4.0, 10.0, 10.0);
        let origin = anchored_origin(near_edge, content(), Side::Top, Align::Start, px(8.0));
        // Negative coordinates are allowed; the window clips them
        assert_eq!(origin, point(px(4.0), px(-34.0)));
    }
}
