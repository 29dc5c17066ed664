//! Header widget

use alloc::string::String;

use dav_ui::attrs::{parse_bool_attr, Alignment, HeaderSize};
use dav_ui::binding::ThemeBinding;
use dav_ui::locale::{HEADER_BACK, HEADER_EDIT};
use dav_ui::settings::SettingsStore;
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::button::{Button, ButtonStyle};
use crate::icon::IconType;
use crate::label::{Label, TextSize};
use crate::style::{centered, offset, Edges, BUTTON_SIZE, GAP};
use crate::tokens::Palette;

/// Width used until [`Header::width`] is called.
pub const HEADER_DEFAULT_WIDTH: u32 = 320;

const PADDING: Edges = Edges::horizontal_vertical(8, 8);

/// Emitted by the header's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEvent {
    /// The back arrow was clicked.
    BackButtonClick,
    /// The pen was clicked.
    EditButtonClick,
}

/// Title font for a header size.
pub fn title_size(size: HeaderSize) -> TextSize {
    match size {
        HeaderSize::Large => TextSize::Large,
        HeaderSize::Normal => TextSize::Normal,
        HeaderSize::Small => TextSize::Medium,
    }
}

/// Page title with optional back and edit buttons.
pub struct Header {
    title: String,
    alignment: Alignment,
    size: HeaderSize,
    back_button_visible: bool,
    edit_button_visible: bool,
    width: u32,
    binding: ThemeBinding,
}

impl Header {
    /// Centred, normal size, no buttons.
    pub fn new(title: &str) -> Self {
        Self {
            title: String::from(title),
            alignment: Alignment::default(),
            size: HeaderSize::default(),
            back_button_visible: false,
            edit_button_visible: false,
            width: HEADER_DEFAULT_WIDTH,
            binding: ThemeBinding::new(),
        }
    }

    /// Set title alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set title size.
    pub fn size(mut self, size: HeaderSize) -> Self {
        self.size = size;
        self
    }

    /// Show the back arrow on the left.
    pub fn back_button_visible(mut self, visible: bool) -> Self {
        self.back_button_visible = visible;
        self
    }

    /// Show the edit pen on the right.
    pub fn edit_button_visible(mut self, visible: bool) -> Self {
        self.edit_button_visible = visible;
        self
    }

    /// Set the full width of the header.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set a property from its markup attribute. Returns `false` for an
    /// attribute this widget does not have.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        match name {
            "title" => self.title = String::from(value),
            "alignment" => self.alignment = Alignment::from(value),
            "size" => self.size = HeaderSize::from(value),
            "back-button-visible" => self.back_button_visible = parse_bool_attr(value),
            "edit-button-visible" => self.edit_button_visible = parse_bool_attr(value),
            _ => {
                tracing::trace!(name, "header: unknown attribute");
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

    /// Localized label of the back button.
    pub fn back_label(&self) -> &'static str {
        self.binding.locale().text(HEADER_BACK)
    }

    /// Localized label of the edit button.
    pub fn edit_label(&self) -> &'static str {
        self.binding.locale().text(HEADER_EDIT)
    }

    fn title_label(&self) -> Label<'_> {
        Label::new(&self.title).size(title_size(self.size))
    }

    fn content_height(&self) -> u32 {
        BUTTON_SIZE.max(title_size(self.size).line_height())
    }

    /// Full header size.
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

    fn button_top(&self) -> u32 {
        PADDING.top.saturating_add(centered(self.content_height(), BUTTON_SIZE))
    }

    /// Back button cell, when visible.
    pub fn back_button_bounds(&self, position: Point) -> Option<Rectangle> {
        self.back_button_visible.then(|| {
            Rectangle::new(
                offset(position, PADDING.left, self.button_top()),
                Size::new(BUTTON_SIZE, BUTTON_SIZE),
            )
        })
    }

    /// Edit button cell, when visible.
    pub fn edit_button_bounds(&self, position: Point) -> Option<Rectangle> {
        self.edit_button_visible.then(|| {
            let x = self
                .width
                .saturating_sub(PADDING.right)
                .saturating_sub(BUTTON_SIZE);
            Rectangle::new(
                offset(position, x, self.button_top()),
                Size::new(BUTTON_SIZE, BUTTON_SIZE),
            )
        })
    }

    /// Top-left corner of the title text.
    ///
    /// `Start` and `End` align against the buttons; `Center` centres on the
    /// full width but never overlaps a visible button.
    pub fn title_position(&self, position: Point) -> Point {
        let reserved = BUTTON_SIZE.saturating_add(GAP);
        let left = if self.back_button_visible {
            PADDING.left.saturating_add(reserved)
        } else {
            PADDING.left
        };
        let right = if self.edit_button_visible {
            self.width.saturating_sub(PADDING.right).saturating_sub(reserved)
        } else {
            self.width.saturating_sub(PADDING.right)
        };

        let text = self.title_label().dimensions();
        let last_start = right.saturating_sub(text.width).max(left);
        let x = match self.alignment {
            Alignment::Start => left,
            Alignment::End => last_start,
            Alignment::Center => centered(self.width, text.width).clamp(left, last_start),
        };
        let y = PADDING.top.saturating_add(centered(self.content_height(), text.height));
        offset(position, x, y)
    }

    /// Hit-test a click at `point`.
    pub fn click(&self, position: Point, point: Point) -> Option<HeaderEvent> {
        let event = if self
            .back_button_bounds(position)
            .is_some_and(|b| b.contains(point))
        {
            HeaderEvent::BackButtonClick
        } else if self
            .edit_button_bounds(position)
            .is_some_and(|b| b.contains(point))
        {
            HeaderEvent::EditButtonClick
        } else {
            return None;
        };
        tracing::debug!(back = event == HeaderEvent::BackButtonClick, "header click");
        Some(event)
    }

    /// Render the header at `position`.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let palette = Palette::for_theme(self.binding.theme());
        self.bounds(position)
            .into_styled(PrimitiveStyle::with_fill(palette.surface))
            .draw(display)?;

        let square = Size::new(BUTTON_SIZE, BUTTON_SIZE);
        if let Some(bounds) = self.back_button_bounds(position) {
            Button::icon(IconType::ChevronLeft, ButtonStyle::text(&palette))
                .fixed_size(square)
                .render(display, bounds.top_left)?;
        }
        if let Some(bounds) = self.edit_button_bounds(position) {
            Button::icon(IconType::Pen, ButtonStyle::text(&palette))
                .fixed_size(square)
                .render(display, bounds.top_left)?;
        }

        self.title_label()
            .color(palette.on_surface)
            .render(display, self.title_position(position))
    }
}
