//! Card widget

use alloc::string::String;

use dav_ui::attrs::Orientation;
use dav_ui::binding::ThemeBinding;
use dav_ui::settings::SettingsStore;
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{CornerRadii, PrimitiveStyle, Rectangle, RoundedRectangle},
};

use crate::label::{Label, TextSize};
use crate::style::{offset, Edges};
use crate::tokens::Palette;

/// Width used until [`Card::width`] is called.
pub const CARD_DEFAULT_WIDTH: u32 = 200;

/// Image height in vertical cards.
pub const VERTICAL_IMAGE_HEIGHT: u32 = 112;

/// Image side length in horizontal cards.
pub const HORIZONTAL_IMAGE_SIZE: u32 = 96;

const PADDING: Edges = Edges::all(12);
const LINE_GAP: u32 = 4;
const CORNER_RADIUS: u32 = 8;

/// Image plus headline and subhead.
pub struct Card {
    headline: String,
    subhead: String,
    image_src: String,
    orientation: Orientation,
    width: u32,
    binding: ThemeBinding,
}

impl Card {
    /// Empty vertical card.
    pub fn new() -> Self {
        Self {
            headline: String::new(),
            subhead: String::new(),
            image_src: String::new(),
            orientation: Orientation::default(),
            width: CARD_DEFAULT_WIDTH,
            binding: ThemeBinding::new(),
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

    /// Set the image source. Images are drawn as placeholders; an empty
    /// source draws no image.
    pub fn image_src(mut self, src: &str) -> Self {
        self.image_src = String::from(src);
        self
    }

    /// Set the layout direction.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the card width.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set a property from its markup attribute. Returns `false` for an
    /// attribute this widget does not have.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        match name {
            "headline" => self.headline = String::from(value),
            "subhead" => self.subhead = String::from(value),
            "image-src" => self.image_src = String::from(value),
            "orientation" => self.orientation = Orientation::from(value),
            _ => {
                tracing::trace!(name, "card: unknown attribute");
                return false;
            }
        }
        self.binding.request_render();
        true
    }

    /// Connect to `store`.
    pub fn attach(&mut self, store: &SettingsStore) {
        self.binding.attach(store);
    }

    /// Disconnect from `store`.
    pub fn detach(&mut self, store: &SettingsStore) {
        self.binding.detach(store);
    }

    /// Theme binding, for polling render requests.
    pub fn binding(&self) -> &ThemeBinding {
        &self.binding
    }

    /// Whether an image placeholder is drawn.
    pub fn has_image(&self) -> bool {
        !self.image_src.is_empty()
    }

    fn image_size(&self) -> Size {
        match self.orientation {
            Orientation::Vertical => Size::new(self.width, VERTICAL_IMAGE_HEIGHT),
            Orientation::Horizontal => Size::new(HORIZONTAL_IMAGE_SIZE, HORIZONTAL_IMAGE_SIZE),
        }
    }

    fn headline_label(&self) -> Label<'_> {
        Label::new(&self.headline).size(TextSize::Normal)
    }

    fn subhead_label(&self) -> Label<'_> {
        Label::new(&self.subhead).size(TextSize::Small)
    }

    /// Height of the visible text lines, without padding.
    fn text_height(&self) -> u32 {
        let headline = if self.headline.is_empty() {
            0
        } else {
            self.headline_label().dimensions().height
        };
        let subhead = if self.subhead.is_empty() {
            0
        } else {
            self.subhead_label().dimensions().height
        };
        let gap = if headline > 0 && subhead > 0 { LINE_GAP } else { 0 };
        headline.saturating_add(gap).saturating_add(subhead)
    }

    /// Image placeholder cell, when the card has an image.
    pub fn image_bounds(&self, position: Point) -> Option<Rectangle> {
        self.has_image()
            .then(|| Rectangle::new(position, self.image_size()))
    }

    /// Top-left corner of the text block.
    pub fn content_origin(&self, position: Point) -> Point {
        let image = if self.has_image() {
            self.image_size()
        } else {
            Size::zero()
        };
        match self.orientation {
            Orientation::Vertical => offset(position, PADDING.left, image.height.saturating_add(PADDING.top)),
            Orientation::Horizontal => offset(position, image.width.saturating_add(PADDING.left), PADDING.top),
        }
    }

    /// Full card size.
    pub fn dimensions(&self) -> Size {
        let content = self.text_height().saturating_add(PADDING.vertical());
        let height = match (self.orientation, self.has_image()) {
            (Orientation::Vertical, true) => content.saturating_add(VERTICAL_IMAGE_HEIGHT),
            (Orientation::Horizontal, true) => content.max(HORIZONTAL_IMAGE_SIZE),
            (_, false) => content,
        };
        Size::new(self.width, height)
    }

    /// Bounding box at `position`.
    pub fn bounds(&self, position: Point) -> Rectangle {
        Rectangle::new(position, self.dimensions())
    }

    /// Render the card at `position`.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let palette = Palette::for_theme(self.binding.theme());
        let frame = RoundedRectangle::new(
            self.bounds(position),
            CornerRadii::new(Size::new(CORNER_RADIUS, CORNER_RADIUS)),
        );
        frame
            .into_styled(PrimitiveStyle::with_fill(palette.surface))
            .draw(display)?;

        if let Some(image) = self.image_bounds(position) {
            image
                .into_styled(PrimitiveStyle::with_fill(palette.outline))
                .draw(display)?;
        }

        let mut origin = self.content_origin(position);
        if !self.headline.is_empty() {
            let label = self.headline_label().color(palette.on_surface);
            label.render(display, origin)?;
            origin = offset(origin, 0, label.dimensions().height.saturating_add(LINE_GAP));
        }
        if !self.subhead.is_empty() {
            self.subhead_label()
                .color(palette.on_surface_variant)
                .render(display, origin)?;
        }

        frame
            .into_styled(PrimitiveStyle::with_stroke(palette.outline, 1))
            .draw(display)?;
        Ok(())
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_card_is_just_padding() {
        let card = Card::new();
        assert!(!card.has_image());
        assert_eq!(card.dimensions(), Size::new(CARD_DEFAULT_WIDTH, 24));
        assert!(card.image_bounds(Point::zero()).is_none());
    }

    #[test]
    fn test_vertical_layout_stacks_image_above_text() {
        let card = Card::new()
            .headline("Dune")
            .subhead("Frank Herbert")
            .image_src("cover.jpg");
        assert_eq!(card.dimensions().height, 112 + 12 + 18 + 4 + 10 + 12);
        assert_eq!(card.content_origin(Point::zero()), Point::new(12, 112 + 12));
    }

    #[test]
    fn test_horizontal_layout_puts_image_left() {
        let card = Card::new()
            .headline("Dune")
            .image_src("cover.jpg")
            .orientation(Orientation::Horizontal);
        assert_eq!(
            card.image_bounds(Point::new(5, 5)),
            Some(Rectangle::new(Point::new(5, 5), Size::new(96, 96)))
        );
        assert_eq!(card.content_origin(Point::zero()), Point::new(96 + 12, 12));
        assert_eq!(card.dimensions().height, 96);
    }

    #[test]
    fn test_attributes() {
        let mut card = Card::new();
        assert!(card.set_attribute("orientation", "horizontal"));
        assert!(card.set_attribute("orientation", "sideways"));
        assert_eq!(card.orientation, Orientation::Vertical);
        assert!(card.set_attribute("image-src", "a.png"));
        assert!(card.has_image());
        assert!(!card.set_attribute("checked", ""));
    }
}
