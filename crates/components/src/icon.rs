//! Simple icon component

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{Line, Polyline, PrimitiveStyle, Triangle},
};

use crate::style::offset;

/// Icon types
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IconType {
    /// `<`; back navigation.
    ChevronLeft,
    /// `>`; forward navigation.
    ChevronRight,
    /// Pencil; edit action.
    Pen,
    /// Tick; checked checkbox.
    Checkmark,
}

/// Square line-art icon.
pub struct Icon {
    icon_type: IconType,
    size: u32,
    color: Gray4,
}

/// `size * num / den`, for placing points on the icon grid.
fn frac(size: u32, num: u32, den: u32) -> u32 {
    size.saturating_mul(num).checked_div(den).unwrap_or(0)
}

impl Icon {
    /// Create a new icon
    pub fn new(icon_type: IconType, size: u32) -> Self {
        Self {
            icon_type,
            size,
            color: Gray4::BLACK,
        }
    }

    /// Set icon color
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// Get icon dimensions
    pub fn dimensions(&self) -> Size {
        Size::new(self.size, self.size)
    }

    /// Point at `(x/16, y/16)` of the icon box.
    fn at(&self, position: Point, x: u32, y: u32) -> Point {
        offset(position, frac(self.size, x, 16), frac(self.size, y, 16))
    }

    fn stroke(&self) -> PrimitiveStyle<Gray4> {
        PrimitiveStyle::with_stroke(self.color, (self.size / 8).max(1))
    }

    /// Render icon to display
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        match self.icon_type {
            IconType::ChevronLeft => {
                let points = [
                    self.at(position, 10, 2),
                    self.at(position, 4, 8),
                    self.at(position, 10, 14),
                ];
                Polyline::new(&points).into_styled(self.stroke()).draw(display)
            }
            IconType::ChevronRight => {
                let points = [
                    self.at(position, 6, 2),
                    self.at(position, 12, 8),
                    self.at(position, 6, 14),
                ];
                Polyline::new(&points).into_styled(self.stroke()).draw(display)
            }
            IconType::Checkmark => {
                let points = [
                    self.at(position, 3, 8),
                    self.at(position, 7, 12),
                    self.at(position, 13, 4),
                ];
                Polyline::new(&points).into_styled(self.stroke()).draw(display)
            }
            IconType::Pen => self.render_pen(display, position),
        }
    }

    fn render_pen<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        // Shaft from the nib to the top-right corner
        Line::new(self.at(position, 5, 11), self.at(position, 13, 3))
            .into_styled(self.stroke())
            .draw(display)?;

        // Nib
        Triangle::new(
            self.at(position, 2, 14),
            self.at(position, 3, 10),
            self.at(position, 6, 13),
        )
        .into_styled(PrimitiveStyle::with_fill(self.color))
        .draw(display)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dav_testing::TestCanvas;
    use embedded_graphics::primitives::Rectangle;

    #[test]
    fn test_icon_creation() {
        let icon = Icon::new(IconType::Pen, 16).color(Gray4::new(0x4));
        assert_eq!(icon.dimensions(), Size::new(16, 16));
        assert_eq!(icon.color, Gray4::new(0x4));
    }

    #[test]
    fn test_grid_points() {
        let icon = Icon::new(IconType::ChevronLeft, 32);
        assert_eq!(icon.at(Point::new(10, 10), 8, 16), Point::new(26, 42));
        assert_eq!(frac(16, 3, 0), 0);
    }

    #[test]
    fn test_every_icon_draws_inside_its_box() {
        for icon_type in [
            IconType::ChevronLeft,
            IconType::ChevronRight,
            IconType::Pen,
            IconType::Checkmark,
        ] {
            let mut canvas = TestCanvas::new(40, 40);
            Icon::new(icon_type, 16)
                .render(&mut canvas, Point::new(12, 12))
                .unwrap();

            let inside = Rectangle::new(Point::new(10, 10), Size::new(20, 20));
            let all = Rectangle::new(Point::zero(), Size::new(40, 40));
            let drawn = canvas.pixel_count_of_color(all, Gray4::BLACK);
            assert!(drawn > 0, "{icon_type:?} drew nothing");
            assert_eq!(canvas.pixel_count_of_color(inside, Gray4::BLACK), drawn);
        }
    }

    #[test]
    fn test_chevrons_mirror() {
        let mut left = TestCanvas::new(16, 16);
        let mut right = TestCanvas::new(16, 16);
        Icon::new(IconType::ChevronLeft, 16)
            .render(&mut left, Point::zero())
            .unwrap();
        Icon::new(IconType::ChevronRight, 16)
            .render(&mut right, Point::zero())
            .unwrap();

        // Tip of `<` reaches the left edge, tip of `>` the right edge.
        let left_edge = Rectangle::new(Point::zero(), Size::new(6, 16));
        let far_left = Rectangle::new(Point::zero(), Size::new(4, 16));
        let right_edge = Rectangle::new(Point::new(10, 0), Size::new(6, 16));
        let far_right = Rectangle::new(Point::new(12, 0), Size::new(4, 16));
        left.assert_region_contains(left_edge, Gray4::BLACK).unwrap();
        right.assert_region_uniform(far_left, Gray4::WHITE).unwrap();
        right.assert_region_contains(right_edge, Gray4::BLACK).unwrap();
        left.assert_region_uniform(far_right, Gray4::WHITE).unwrap();
    }
}
