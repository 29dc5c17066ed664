//! Label component for displaying text

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_8X13, FONT_9X18},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::Gray4,
    prelude::*,
    text::{Baseline, Text},
};

/// Text size variants
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSize {
    /// 6x10 font; captions and subheads.
    Small,
    /// 8x13 font; body text and small headers.
    Medium,
    /// 9x18 font; page numbers and normal headers.
    Normal,
    /// 10x20 font; large headers.
    Large,
}

impl TextSize {
    /// Monospace font for this size.
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Medium => &FONT_8X13,
            TextSize::Normal => &FONT_9X18,
            TextSize::Large => &FONT_10X20,
        }
    }

    /// Height of one text line in pixels.
    pub fn line_height(&self) -> u32 {
        self.font().character_size.height
    }

    /// Advance per character in pixels.
    pub fn char_width(&self) -> u32 {
        self.font()
            .character_size
            .width
            .saturating_add(self.font().character_spacing)
    }
}

/// Single line of text, positioned by its top-left corner.
pub struct Label<'a> {
    text: &'a str,
    color: Gray4,
    size: TextSize,
}

impl<'a> Label<'a> {
    /// Create a new label with the given text
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            color: Gray4::BLACK,
            size: TextSize::Medium,
        }
    }

    /// Set text color
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// Set text size
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// Get text dimensions
    pub fn dimensions(&self) -> Size {
        let chars = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        Size::new(
            chars.saturating_mul(self.size.char_width()),
            self.size.line_height(),
        )
    }

    /// Render label to display
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        if self.text.is_empty() {
            return Ok(());
        }
        let style = MonoTextStyle::new(self.size.font(), self.color);
        Text::with_baseline(self.text, position, style, Baseline::Top).draw(display)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_creation() {
        let label = Label::new("Hello World");
        assert_eq!(label.text, "Hello World");
        assert_eq!(label.color, Gray4::BLACK);
        assert_eq!(label.size, TextSize::Medium);
    }

    #[test]
    fn test_label_dimensions() {
        let label = Label::new("Test").size(TextSize::Large);
        assert_eq!(label.dimensions(), Size::new(4 * 10, 20));
        // Counted in characters, not bytes.
        let label = Label::new("Zurück").size(TextSize::Small);
        assert_eq!(label.dimensions().width, 6 * 6);
    }

    #[test]
    fn test_text_sizes() {
        assert_eq!(TextSize::Small.line_height(), 10);
        assert_eq!(TextSize::Medium.line_height(), 13);
        assert_eq!(TextSize::Normal.line_height(), 18);
        assert_eq!(TextSize::Large.line_height(), 20);
        assert_eq!(TextSize::Small.char_width(), 6);
        assert_eq!(TextSize::Large.char_width(), 10);
    }
}
