//! Button component

use dav_ui::attrs::{ButtonColor, ButtonSize};
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{CornerRadii, PrimitiveStyle, Rectangle, RoundedRectangle},
};

use crate::icon::{Icon, IconType};
use crate::label::{Label, TextSize};
use crate::style::{centered, offset, Edges, ICON_SIZE};
use crate::tokens::Palette;

/// Button style presets
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Fill colour; `None` leaves the surface showing through.
    pub background: Option<Gray4>,
    /// Text or icon colour.
    pub foreground: Gray4,
    /// One-pixel outline.
    pub border: Option<Gray4>,
    /// Space around the content for auto-sized buttons.
    pub padding: Edges,
    /// Corner radius in pixels.
    pub corner_radius: u32,
}

impl ButtonStyle {
    /// Filled accent button (selected page, primary action).
    pub fn filled(palette: &Palette) -> Self {
        Self {
            background: Some(palette.primary),
            foreground: palette.on_primary,
            border: None,
            padding: Edges::horizontal_vertical(16, 8),
            corner_radius: 4,
        }
    }

    /// Outlined button on the surface colour.
    pub fn outlined(palette: &Palette) -> Self {
        Self {
            background: None,
            foreground: palette.on_surface,
            border: Some(palette.outline),
            padding: Edges::horizontal_vertical(16, 8),
            corner_radius: 4,
        }
    }

    /// Text-only button (no background, no border)
    pub fn text(palette: &Palette) -> Self {
        Self {
            background: None,
            foreground: palette.on_surface,
            border: None,
            padding: Edges::horizontal_vertical(8, 4),
            corner_radius: 0,
        }
    }

    /// Style for a markup `color` attribute.
    pub fn for_color(color: ButtonColor, palette: &Palette) -> Self {
        match color {
            ButtonColor::Primary => Self::filled(palette),
            ButtonColor::Secondary => Self::outlined(palette),
            ButtonColor::Tertiary => Self::text(palette),
            ButtonColor::Error => Self {
                background: Some(palette.on_surface),
                foreground: palette.surface,
                ..Self::filled(palette)
            },
        }
    }

    /// Same style with its content greyed out.
    pub fn disabled(mut self, palette: &Palette) -> Self {
        self.foreground = palette.disabled;
        self.background = self.background.map(|_| palette.outline);
        self
    }

    /// Same style with tighter padding for `ButtonSize::Small`.
    pub fn sized(mut self, size: ButtonSize) -> Self {
        if size == ButtonSize::Small {
            self.padding = Edges::horizontal_vertical(8, 4);
        }
        self
    }
}

/// What a button shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonContent<'a> {
    /// A text label.
    Text(&'a str),
    /// A line-art icon.
    Icon(IconType),
}

/// Button component
pub struct Button<'a> {
    content: ButtonContent<'a>,
    style: ButtonStyle,
    text_size: TextSize,
    fixed_size: Option<Size>,
    min_width: Option<u32>,
}

impl<'a> Button<'a> {
    /// Create a text button.
    pub fn new(label: &'a str, style: ButtonStyle) -> Self {
        Self {
            content: ButtonContent::Text(label),
            style,
            text_size: TextSize::Normal,
            fixed_size: None,
            min_width: None,
        }
    }

    /// Create an icon button.
    pub fn icon(icon: IconType, style: ButtonStyle) -> Self {
        Self {
            content: ButtonContent::Icon(icon),
            style,
            text_size: TextSize::Normal,
            fixed_size: None,
            min_width: None,
        }
    }

    /// Set button style
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Set label text size
    pub fn text_size(mut self, size: TextSize) -> Self {
        self.text_size = size;
        self
    }

    /// Use an exact size instead of content + padding.
    pub fn fixed_size(mut self, size: Size) -> Self {
        self.fixed_size = Some(size);
        self
    }

    /// Set minimum width
    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    fn content_size(&self) -> Size {
        match self.content {
            ButtonContent::Text(text) => Label::new(text).size(self.text_size).dimensions(),
            ButtonContent::Icon(_) => Size::new(ICON_SIZE, ICON_SIZE),
        }
    }

    /// Calculate button size including padding
    fn calculate_size(&self) -> Size {
        if let Some(size) = self.fixed_size {
            return size;
        }
        let content = self.content_size();
        let width = content.width.saturating_add(self.style.padding.horizontal());
        let height = content.height.saturating_add(self.style.padding.vertical());
        Size::new(width.max(self.min_width.unwrap_or(0)), height)
    }

    /// Render button to display
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let size = self.calculate_size();
        let shape = RoundedRectangle::new(
            Rectangle::new(position, size),
            CornerRadii::new(Size::new(self.style.corner_radius, self.style.corner_radius)),
        );

        if let Some(background) = self.style.background {
            shape
                .into_styled(PrimitiveStyle::with_fill(background))
                .draw(display)?;
        }
        if let Some(border) = self.style.border {
            shape
                .into_styled(PrimitiveStyle::with_stroke(border, 1))
                .draw(display)?;
        }

        // Content centred in the button
        let content = self.content_size();
        let origin = offset(
            position,
            centered(size.width, content.width),
            centered(size.height, content.height),
        );
        match self.content {
            ButtonContent::Text(text) => Label::new(text)
                .size(self.text_size)
                .color(self.style.foreground)
                .render(display, origin),
            ButtonContent::Icon(icon) => Icon::new(icon, ICON_SIZE)
                .color(self.style.foreground)
                .render(display, origin),
        }
    }

    /// Get button bounding box
    pub fn bounds(&self, position: Point) -> Rectangle {
        Rectangle::new(position, self.calculate_size())
    }
}
