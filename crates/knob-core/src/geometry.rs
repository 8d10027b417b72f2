//! Rectangle helpers used as the unit of layout
//!
//! Frames are plain `embedded_graphics` [`Rectangle`]s. A width or height of
//! `0` is the fill-parent sentinel: the dimension is inherited from the extent
//! assigned to the containing view when layout runs, not when the rectangle
//! is built.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Extension methods for frames taking part in layout.
pub trait FrameExt {
    /// Substitute every zero dimension with the matching `extent` dimension.
    fn resolved(&self, extent: Size) -> Rectangle;

    /// Smallest rectangle containing both `self` and `other`.
    fn union(&self, other: &Rectangle) -> Rectangle;

    /// Offset that moves this frame's origin onto `target`.
    fn delta_to(&self, target: Point) -> Point;
}

impl FrameExt for Rectangle {
    fn resolved(&self, extent: Size) -> Rectangle {
        Rectangle::new(self.top_left, resolve_size(self.size, extent))
    }

    fn union(&self, other: &Rectangle) -> Rectangle {
        let min_x = self.top_left.x.min(other.top_left.x);
        let min_y = self.top_left.y.min(other.top_left.y);

        let max_x = (self.top_left.x + self.size.width as i32)
            .max(other.top_left.x + other.size.width as i32);
        let max_y = (self.top_left.y + self.size.height as i32)
            .max(other.top_left.y + other.size.height as i32);

        Rectangle::new(
            Point::new(min_x, min_y),
            Size::new((max_x - min_x) as u32, (max_y - min_y) as u32),
        )
    }

    fn delta_to(&self, target: Point) -> Point {
        target - self.top_left
    }
}

/// Substitute zero dimensions of `size` with those of `extent`.
pub fn resolve_size(size: Size, extent: Size) -> Size {
    Size::new(
        if size.width == 0 {
            extent.width
        } else {
            size.width
        },
        if size.height == 0 {
            extent.height
        } else {
            size.height
        },
    )
}

/// Bounding box over a set of rectangles, `None` when the set is empty.
pub fn bounding_box<I>(frames: I) -> Option<Rectangle>
where
    I: IntoIterator<Item = Rectangle>,
{
    frames
        .into_iter()
        .reduce(|acc, frame| acc.union(&frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_resolve_only_replaces_zero_dimensions() {
        let extent = Size::new(320, 240);
        assert_eq!(resolve_size(Size::new(0, 20), extent), Size::new(320, 20));
        assert_eq!(resolve_size(Size::new(40, 0), extent), Size::new(40, 240));
        assert_eq!(resolve_size(Size::new(40, 20), extent), Size::new(40, 20));
        assert_eq!(resolve_size(Size::zero(), extent), extent);
    }

    #[test]
    fn test_resolved_keeps_origin() {
        let frame = rect(5, 7, 0, 10).resolved(Size::new(100, 50));
        assert_eq!(frame, rect(5, 7, 100, 10));
    }

    #[test]
    fn test_bounding_box_of_overlapping_frames() {
        let bbox = bounding_box([rect(0, 0, 10, 10), rect(5, 5, 10, 10)]);
        assert_eq!(bbox, Some(rect(0, 0, 15, 15)));
    }

    #[test]
    fn test_bounding_box_with_negative_origin() {
        let bbox = bounding_box([rect(-4, 2, 4, 4), rect(10, -3, 2, 2)]);
        assert_eq!(bbox, Some(rect(-4, -3, 16, 9)));
        assert_eq!(bounding_box(core::iter::empty::<Rectangle>()), None);
    }

    #[test]
    fn test_delta_to_target() {
        assert_eq!(rect(10, 20, 5, 5).delta_to(Point::new(4, 30)), Point::new(-6, 10));
    }
}
