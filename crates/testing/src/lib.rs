//! Headless widget testing utilities.
//!
//! [`TestCanvas`] is an in-memory `Gray4` framebuffer that implements
//! [`DrawTarget`], so any `dav-components` widget can render into it. On top
//! of the pixels it keeps a component registry queryable by test ID, and
//! offers pixel and region assertions that return [`CanvasError`] instead of
//! panicking, so tests can `?` or `.unwrap()` as they prefer.
//!
//! ```
//! use dav_testing::TestCanvas;
//! use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut canvas = TestCanvas::new(64, 32);
//! Rectangle::new(Point::new(4, 4), Size::new(8, 8))
//!     .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
//!     .draw(&mut canvas)
//!     .unwrap();
//!
//! canvas.register_component("swatch", "Rectangle", (4, 4), (8, 8));
//! canvas.assert_pixel(6, 6, Gray4::BLACK).unwrap();
//! canvas.assert_has_component("swatch").unwrap();
//! ```

#![warn(clippy::all)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::Rectangle};

/// Assertion failure reported by [`TestCanvas`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    /// The queried coordinate lies outside the canvas.
    #[error("pixel ({x}, {y}) is out of bounds")]
    OutOfBounds {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// A pixel did not have the expected luma.
    #[error("pixel ({x}, {y}): expected luma {expected}, got luma {actual}")]
    PixelMismatch {
        /// Column.
        x: u32,
        /// Row.
        y: u32,
        /// Expected luma (0..=15).
        expected: u8,
        /// Actual luma (0..=15).
        actual: u8,
    },
    /// No pixel of the requested luma exists in a region.
    #[error("no pixel with luma {luma} in region at ({x}, {y}) size {width}x{height}")]
    ColorNotFound {
        /// Luma searched for.
        luma: u8,
        /// Region left edge.
        x: i32,
        /// Region top edge.
        y: i32,
        /// Region width.
        width: u32,
        /// Region height.
        height: u32,
    },
    /// No component was registered under the test ID.
    #[error("component '{0}' not found")]
    MissingComponent(String),
}

/// A component registered in the [`TestCanvas`] registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef {
    /// The test identifier (like `data-testid` in web testing).
    pub test_id: String,
    /// Broad category, e.g. `"Pagination"`, `"Checkbox"`.
    pub component_type: String,
    /// Top-left corner in canvas coordinates.
    pub position: (i32, i32),
    /// Width × height in pixels.
    pub size: (u32, u32),
}

impl ComponentRef {
    /// The bounding rectangle.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.position.0, self.position.1),
            Size::new(self.size.0, self.size.1),
        )
    }

    /// Centre of the bounding box; handy as a click point.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// In-memory `Gray4` draw target with assertions and a component registry.
///
/// Every pixel starts white, matching a blank surface in the light theme.
pub struct TestCanvas {
    pixels: Vec<Gray4>,
    width: u32,
    height: u32,
    components: Vec<ComponentRef>,
}

impl TestCanvas {
    /// Create a blank (white) canvas.
    // SAFETY: width * height is a test canvas pixel count, far below u32::MAX.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Gray4::WHITE; (width * height) as usize],
            width,
            height,
            components: Vec::new(),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to `color`. The registry is left alone.
    pub fn fill(&mut self, color: Gray4) {
        self.pixels.fill(color);
    }

    /// Reset every pixel to white.
    pub fn clear_display(&mut self) {
        self.fill(Gray4::WHITE);
    }

    // ── Framebuffer access ───────────────────────────────────────────────────

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            // SAFETY: bounded by width * height, checked above.
            #[allow(clippy::arithmetic_side_effects)]
            let idx = (y * self.width + x) as usize;
            Some(idx)
        } else {
            None
        }
    }

    /// Colour at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Gray4> {
        self.index_of(x, y)
            .and_then(|idx| self.pixels.get(idx).copied())
    }

    fn region_pixels(&self, rect: Rectangle) -> impl Iterator<Item = Option<Gray4>> + '_ {
        rect.points().map(move |p| {
            let x = u32::try_from(p.x).ok()?;
            let y = u32::try_from(p.y).ok()?;
            self.pixel_at(x, y)
        })
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected luma.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Gray4) -> Result<(), CanvasError> {
        let actual = self.pixel_at(x, y).ok_or(CanvasError::OutOfBounds {
            x: i32::try_from(x).unwrap_or(i32::MAX),
            y: i32::try_from(y).unwrap_or(i32::MAX),
        })?;
        if actual.luma() == expected.luma() {
            Ok(())
        } else {
            Err(CanvasError::PixelMismatch {
                x,
                y,
                expected: expected.luma(),
                actual: actual.luma(),
            })
        }
    }

    /// Assert that every pixel inside `rect` has `color`.
    pub fn assert_region_uniform(&self, rect: Rectangle, color: Gray4) -> Result<(), CanvasError> {
        for p in rect.points() {
            match (u32::try_from(p.x), u32::try_from(p.y)) {
                (Ok(x), Ok(y)) => self.assert_pixel(x, y, color)?,
                _ => return Err(CanvasError::OutOfBounds { x: p.x, y: p.y }),
            }
        }
        Ok(())
    }

    /// Assert that `rect` contains at least one pixel with `color`.
    pub fn assert_region_contains(&self, rect: Rectangle, color: Gray4) -> Result<(), CanvasError> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(CanvasError::ColorNotFound {
                luma: color.luma(),
                x: rect.top_left.x,
                y: rect.top_left.y,
                width: rect.size.width,
                height: rect.size.height,
            })
        }
    }

    /// Count pixels in `rect` whose luma matches `color`. Out-of-bounds
    /// points are skipped.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: Gray4) -> usize {
        self.region_pixels(rect)
            .filter(|p| p.map(|g| g.luma()) == Some(color.luma()))
            .count()
    }

    /// Number of pixels that differ between two canvases of the same size.
    /// Canvases of different sizes differ everywhere.
    pub fn pixel_diff_count(&self, other: &TestCanvas) -> usize {
        if self.width != other.width || self.height != other.height {
            return self.pixels.len().max(other.pixels.len());
        }
        self.pixels
            .iter()
            .zip(other.pixels.iter())
            .filter(|(a, b)| a.luma() != b.luma())
            .count()
    }

    // ── Component registry ───────────────────────────────────────────────────

    /// Register (or update) a component by test ID.
    pub fn register_component(
        &mut self,
        test_id: &str,
        component_type: &str,
        position: (i32, i32),
        size: (u32, u32),
    ) {
        if let Some(existing) = self.components.iter_mut().find(|c| c.test_id == test_id) {
            existing.component_type = component_type.to_string();
            existing.position = position;
            existing.size = size;
        } else {
            self.components.push(ComponentRef {
                test_id: test_id.to_string(),
                component_type: component_type.to_string(),
                position,
                size,
            });
        }
    }

    /// Register a component from a bounding rectangle.
    pub fn register_bounds(&mut self, test_id: &str, component_type: &str, bounds: Rectangle) {
        self.register_component(
            test_id,
            component_type,
            (bounds.top_left.x, bounds.top_left.y),
            (bounds.size.width, bounds.size.height),
        );
    }

    /// Remove all registered components.
    pub fn clear_components(&mut self) {
        self.components.clear();
    }

    /// Find a component by test ID.
    pub fn query_by_test_id(&self, test_id: &str) -> Option<&ComponentRef> {
        self.components.iter().find(|c| c.test_id == test_id)
    }

    /// All registered components, in registration order.
    pub fn components(&self) -> &[ComponentRef] {
        &self.components
    }

    /// Number of registered components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Assert that a component with `test_id` exists.
    pub fn assert_has_component(&self, test_id: &str) -> Result<(), CanvasError> {
        self.query_by_test_id(test_id)
            .map(|_| ())
            .ok_or_else(|| CanvasError::MissingComponent(test_id.to_string()))
    }

    // ── Debug output ─────────────────────────────────────────────────────────

    /// Render the canvas as text, one character per pixel, darkest first:
    /// `#` (0..=3), `+` (4..=7), `.` (8..=11), space (12..=15).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.pixels.len().saturating_add(self.height as usize));
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = match self.pixel_at(x, y).map(|p| p.luma()) {
                    Some(0..=3) => '#',
                    Some(4..=7) => '+',
                    Some(8..=11) => '.',
                    _ => ' ',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for TestCanvas {
    type Color = Gray4;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if let Some(slot) = self
                .index_of(x, y)
                .and_then(|idx| self.pixels.get_mut(idx))
            {
                *slot = color;
            }
        }
        Ok(())
    }
}
