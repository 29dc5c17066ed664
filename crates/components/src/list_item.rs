//! List item widget
//!
//! Unlike the other widgets a list item does not follow the theme on its
//! own; the list that owns it passes the palette at render time.

use alloc::string::String;

use dav_ui::attrs::ListItemSize;
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::label::{Label, TextSize};
use crate::style::{centered, offset, Edges};
use crate::tokens::Palette;

/// Width used until [`ListItem::width`] is called.
pub const LIST_ITEM_DEFAULT_WIDTH: u32 = 320;

const PADDING: Edges = Edges::horizontal_vertical(12, 8);
const IMAGE_GAP: u32 = 12;
const LINE_GAP: u32 = 2;

/// Image height for a list item size.
pub const fn image_height(size: ListItemSize) -> u32 {
    match size {
        ListItemSize::Normal => 84,
        ListItemSize::Small => 56,
    }
}

/// Image sources of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemImage<'a> {
    /// Primary source.
    pub src: &'a str,
    /// Shown while `src` loads or when it fails.
    pub fallback_src: &'a str,
}

/// Row with an optional square image, a headline and a subhead.
pub struct ListItem {
    image_src: String,
    image_fallback_src: String,
    headline: String,
    subhead: String,
    size: ListItemSize,
    width: u32,
}

impl ListItem {
    /// Empty normal-size item.
    pub fn new() -> Self {
        Self {
            image_src: String::new(),
            image_fallback_src: String::new(),
            headline: String::new(),
            subhead: String::new(),
            size: ListItemSize::default(),
            width: LIST_ITEM_DEFAULT_WIDTH,
        }
    }

    /// Set the headline.
    pub fn headline(mut self, headline: &str) -> Self {
        self.headline = String::from(headline);
        self
    }

    /// Set the subhead.
    pub fn subhead(mut self, subhead: &str) -> Self {
        self.subhead = String::from(subhead);
        self
    }

    /// Set the image and its fallback.
    pub fn image(mut self, src: &str, fallback_src: &str) -> Self {
        self.image_src = String::from(src);
        self.image_fallback_src = String::from(fallback_src);
        self
    }

    /// Set the size class.
    pub fn size(mut self, size: ListItemSize) -> Self {
        self.size = size;
        self
    }

    /// Set the row width.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set a property from its markup attribute. Returns `false` for an
    /// attribute this widget does not have.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        match name {
            "image-src" => self.image_src = String::from(value),
            "image-fallback-src" => self.image_fallback_src = String::from(value),
            "headline" => self.headline = String::from(value),
            "subhead" => self.subhead = String::from(value),
            "size" => self.size = ListItemSize::from(value),
            _ => {
                tracing::trace!(name, "list item: unknown attribute");
                return false;
            }
        }
        true
    }

    /// Image sources, when the item has an image.
    pub fn image_sources(&self) -> Option<ListItemImage<'_>> {
        (!self.image_src.is_empty()).then(|| ListItemImage {
            src: &self.image_src,
            fallback_src: &self.image_fallback_src,
        })
    }

    fn text_lines(&self) -> (Option<Label<'_>>, Option<Label<'_>>) {
        let headline = (!self.headline.is_empty())
            .then(|| Label::new(&self.headline).size(TextSize::Medium));
        let subhead = (!self.subhead.is_empty())
            .then(|| Label::new(&self.subhead).size(TextSize::Small));
        (headline, subhead)
    }

    fn text_height(&self) -> u32 {
        match self.text_lines() {
            (Some(h), Some(s)) => h
                .dimensions()
                .height
                .saturating_add(LINE_GAP)
                .saturating_add(s.dimensions().height),
            (Some(line), None) | (None, Some(line)) => line.dimensions().height,
            (None, None) => 0,
        }
    }

    fn content_height(&self) -> u32 {
        let image = if self.image_sources().is_some() {
            image_height(self.size)
        } else {
            0
        };
        image.max(self.text_height())
    }

    /// Full row size.
    pub fn dimensions(&self) -> Size {
        Size::new(
            self.width,
            self.content_height().saturating_add(PADDING.vertical()),
        )
    }

    /// Bounding box at `position`.
    pub fn bounds(&self, position: Point) -> Rectangle {
        Rectangle::new(position, self.dimensions())
    }

    /// Image placeholder cell, when the item has an image.
    pub fn image_bounds(&self, position: Point) -> Option<Rectangle> {
        self.image_sources().map(|_| {
            let side = image_height(self.size);
            Rectangle::new(offset(position, PADDING.left, PADDING.top), Size::new(side, side))
        })
    }

    /// Render the item at `position` with `palette`.
    pub fn render<D>(&self, display: &mut D, position: Point, palette: &Palette) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        self.bounds(position)
            .into_styled(PrimitiveStyle::with_fill(palette.surface))
            .draw(display)?;

        let mut text_x = PADDING.left;
        if let Some(image) = self.image_bounds(position) {
            image
                .into_styled(PrimitiveStyle::with_fill(palette.outline))
                .draw(display)?;
            text_x = text_x
                .saturating_add(image.size.width)
                .saturating_add(IMAGE_GAP);
        }

        let top = PADDING
            .top
            .saturating_add(centered(self.content_height(), self.text_height()));
        let mut origin = offset(position, text_x, top);
        let (headline, subhead) = self.text_lines();
        if let Some(label) = headline {
            let height = label.dimensions().height;
            label.color(palette.on_surface).render(display, origin)?;
            origin = offset(origin, 0, height.saturating_add(LINE_GAP));
        }
        if let Some(label) = subhead {
            label
                .color(palette.on_surface_variant)
                .render(display, origin)?;
        }
        Ok(())
    }
}

impl Default for ListItem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_height_by_size() {
        assert_eq!(image_height(ListItemSize::Normal), 84);
        assert_eq!(image_height(ListItemSize::Small), 56);
    }

    #[test]
    fn test_image_requires_source() {
        let item = ListItem::new().image("", "fallback.png");
        assert!(item.image_sources().is_none());
        assert!(item.image_bounds(Point::zero()).is_none());

        let item = ListItem::new().image("a.png", "b.png").size(ListItemSize::Small);
        assert_eq!(
            item.image_sources(),
            Some(ListItemImage { src: "a.png", fallback_src: "b.png" })
        );
        assert_eq!(item.image_bounds(Point::zero()).unwrap().size, Size::new(56, 56));
        assert_eq!(item.dimensions().height, 56 + 16);
    }

    #[test]
    fn test_text_only_height() {
        let item = ListItem::new().headline("Song").subhead("Artist");
        assert_eq!(item.dimensions().height, 13 + 2 + 10 + 16);
        let item = ListItem::new().subhead("Artist");
        assert_eq!(item.dimensions().height, 10 + 16);
    }

    #[test]
    fn test_attributes() {
        let mut item = ListItem::new();
        assert!(item.set_attribute("size", "small"));
        assert_eq!(item.size, ListItemSize::Small);
        assert!(item.set_attribute("size", "tiny"));
        assert_eq!(item.size, ListItemSize::Normal);
        assert!(item.set_attribute("image-fallback-src", "b.png"));
        assert!(!item.set_attribute("orientation", "horizontal"));
    }
}
