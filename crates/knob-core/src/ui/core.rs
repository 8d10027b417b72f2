// src/ui/core.rs
//! Core UI types shared by elements and containers

use embedded_graphics::prelude::*;

use crate::ui::fonts::FontResolver;
use crate::ui::styling::Theme;

/// Cross-axis placement of stack children.
///
/// For a vertical stack `Leading` is the left edge, for a horizontal stack
/// it is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

impl Alignment {
    /// Offset of a child of extent `child` inside a container of extent `container`.
    ///
    /// Children wider than the container get a negative offset rather than
    /// being clamped.
    pub fn offset(self, container: u32, child: u32) -> i32 {
        let free = container as i32 - child as i32;
        match self {
            Alignment::Leading => 0,
            Alignment::Center => free / 2,
            Alignment::Trailing => free,
        }
    }
}

/// Stacking axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// Extent along the stacking direction.
    pub fn primary(self, size: Size) -> u32 {
        match self {
            Axis::Vertical => size.height,
            Axis::Horizontal => size.width,
        }
    }

    /// Extent across the stacking direction.
    pub fn cross(self, size: Size) -> u32 {
        match self {
            Axis::Vertical => size.width,
            Axis::Horizontal => size.height,
        }
    }

    pub fn point(self, primary: i32, cross: i32) -> Point {
        match self {
            Axis::Vertical => Point::new(cross, primary),
            Axis::Horizontal => Point::new(primary, cross),
        }
    }

    pub fn size(self, primary: u32, cross: u32) -> Size {
        match self {
            Axis::Vertical => Size::new(cross, primary),
            Axis::Horizontal => Size::new(primary, cross),
        }
    }
}

/// Ambient values every layout and paint pass reads.
///
/// `surface` is the drawing surface extent substituted for fill-parent
/// frames; it is only known once rendering starts.
#[derive(Clone, Copy)]
pub struct Environment<'a> {
    pub surface: Size,
    pub theme: Theme,
    pub fonts: &'a dyn FontResolver,
}

impl<'a> Environment<'a> {
    pub fn new(surface: Size, theme: Theme, fonts: &'a dyn FontResolver) -> Self {
        Self {
            surface,
            theme,
            fonts,
        }
    }
}

/// Copy `text` into a bounded string, truncating at a char boundary.
pub fn bounded<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_offsets() {
        assert_eq!(Alignment::Leading.offset(100, 40), 0);
        assert_eq!(Alignment::Center.offset(100, 40), 30);
        assert_eq!(Alignment::Trailing.offset(100, 40), 60);
        assert_eq!(Alignment::Center.offset(40, 100), -30);
    }

    #[test]
    fn test_axis_swaps_components() {
        let size = Size::new(30, 10);
        assert_eq!(Axis::Vertical.primary(size), 10);
        assert_eq!(Axis::Horizontal.primary(size), 30);
        assert_eq!(Axis::Vertical.point(5, 2), Point::new(2, 5));
        assert_eq!(Axis::Horizontal.size(5, 2), Size::new(5, 2));
    }

    #[test]
    fn test_bounded_truncates_on_char_boundary() {
        let s: heapless::String<4> = bounded("héllo");
        assert_eq!(s.as_str(), "hél");
        let s: heapless::String<8> = bounded("ok");
        assert_eq!(s.as_str(), "ok");
    }
}
