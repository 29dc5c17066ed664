//! Spacing and geometry helpers shared by the widgets.
//!
//! Widget geometry is computed in `u32` pixel sizes and placed at `i32`
//! points; the helpers here do the conversion with saturating arithmetic so
//! an absurd size clips instead of overflowing.

use embedded_graphics::prelude::*;

/// Side length of square icon buttons (pagination, header).
pub const BUTTON_SIZE: u32 = 32;

/// Icon side length inside a [`BUTTON_SIZE`] button.
pub const ICON_SIZE: u32 = 16;

/// Default horizontal gap between adjacent controls.
pub const GAP: u32 = 4;

/// Insets around widget content.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Edges {
    /// Top edge inset in pixels.
    pub top: u32,
    /// Right edge inset in pixels.
    pub right: u32,
    /// Bottom edge inset in pixels.
    pub bottom: u32,
    /// Left edge inset in pixels.
    pub left: u32,
}

impl Edges {
    /// Same inset on every side.
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `horizontal` left and right, `vertical` top and bottom.
    pub const fn horizontal_vertical(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Left + right.
    pub const fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Top + bottom.
    pub const fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Offset of the content box from the outer top-left corner.
    pub fn origin(self) -> Point {
        Point::new(px(self.left), px(self.top))
    }
}

/// Pixel size as a signed coordinate delta.
pub fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// `point` moved right by `dx` and down by `dy`.
pub fn offset(point: Point, dx: u32, dy: u32) -> Point {
    Point::new(
        point.x.saturating_add(px(dx)),
        point.y.saturating_add(px(dy)),
    )
}

/// Leading space that centres `inner` within `outer`.
pub const fn centered(outer: u32, inner: u32) -> u32 {
    outer.saturating_sub(inner) / 2
}

/// Width of `count` items of `item` pixels separated by `gap`.
pub fn row_width(count: usize, item: u32, gap: u32) -> u32 {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    item.saturating_mul(count)
        .saturating_add(gap.saturating_mul(count.saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let e = Edges::horizontal_vertical(16, 8);
        assert_eq!(e.horizontal(), 32);
        assert_eq!(e.vertical(), 16);
        assert_eq!(e.origin(), Point::new(16, 8));
        assert_eq!(Edges::all(3).vertical(), 6);
        assert_eq!(Edges::default(), Edges::all(0));
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(offset(Point::new(1, 2), 3, 4), Point::new(4, 6));
        assert_eq!(offset(Point::new(i32::MAX, 0), 10, 0).x, i32::MAX);
        assert_eq!(px(u32::MAX), i32::MAX);
    }

    #[test]
    fn test_centering_and_rows() {
        assert_eq!(centered(32, 16), 8);
        assert_eq!(centered(10, 20), 0);
        assert_eq!(row_width(0, 32, 4), 0);
        assert_eq!(row_width(1, 32, 4), 32);
        assert_eq!(row_width(3, 32, 4), 104);
    }
}
