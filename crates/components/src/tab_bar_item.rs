//! Tab bar item widget

use alloc::string::String;

use dav_ui::attrs::parse_bool_attr;
use dav_ui::binding::ThemeBinding;
use dav_ui::settings::SettingsStore;
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::label::{Label, TextSize};
use crate::style::{centered, offset, Edges};
use crate::tokens::Palette;

/// Width used until [`TabBarItem::width`] is called.
pub const TAB_DEFAULT_WIDTH: u32 = 96;

/// Underline thickness of the active tab.
pub const UNDERLINE_HEIGHT: u32 = 3;

/// Underline length as a percentage of the item width.
pub const UNDERLINE_PERCENT: u32 = 35;

const PADDING: Edges = Edges::horizontal_vertical(16, 6);
const UNDERLINE_GAP: u32 = 4;

/// Emitted when the tab is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBarItemClick;

/// One tab in a tab bar.
pub struct TabBarItem {
    label: String,
    active: bool,
    width: u32,
    binding: ThemeBinding,
}

impl TabBarItem {
    /// Inactive tab with `label`.
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
            active: false,
            width: TAB_DEFAULT_WIDTH,
            binding: ThemeBinding::new(),
        }
    }

    /// Mark the tab as the selected one.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the item width.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Change the active state and request a re-render.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.binding.request_render();
    }

    /// Set a property from its markup attribute. Returns `false` for an
    /// attribute this widget does not have.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        match name {
            "label" => self.label = String::from(value),
            "active" => self.active = parse_bool_attr(value),
            _ => {
                tracing::trace!(name, "tab bar item: unknown attribute");
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

    /// Whether this is the selected tab.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Report a click. Selecting the tab is up to the tab bar.
    pub fn click(&self) -> TabBarItemClick {
        tracing::debug!(active = self.active, "tab bar item click");
        TabBarItemClick
    }

    /// Report a click when `point` hits the item at `position`.
    pub fn click_at(&self, position: Point, point: Point) -> Option<TabBarItemClick> {
        self.bounds(position).contains(point).then(|| self.click())
    }

    fn text(&self) -> Label<'_> {
        Label::new(&self.label).size(TextSize::Normal)
    }

    /// Length of the underline; zero while inactive.
    pub fn underline_width(&self) -> u32 {
        if self.active {
            self.width.saturating_mul(UNDERLINE_PERCENT) / 100
        } else {
            0
        }
    }

    /// Full item size.
    pub fn dimensions(&self) -> Size {
        let height = self
            .text()
            .dimensions()
            .height
            .saturating_add(UNDERLINE_GAP)
            .saturating_add(UNDERLINE_HEIGHT)
            .saturating_add(PADDING.vertical());
        Size::new(self.width, height)
    }

    /// Bounding box at `position`.
    pub fn bounds(&self, position: Point) -> Rectangle {
        Rectangle::new(position, self.dimensions())
    }

    /// Underline cell, when active.
    pub fn underline_bounds(&self, position: Point) -> Option<Rectangle> {
        let width = self.underline_width();
        (width > 0).then(|| {
            let y = self
                .dimensions()
                .height
                .saturating_sub(PADDING.bottom)
                .saturating_sub(UNDERLINE_HEIGHT);
            Rectangle::new(
                offset(position, centered(self.width, width), y),
                Size::new(width, UNDERLINE_HEIGHT),
            )
        })
    }

    /// Render the tab at `position`.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let palette = Palette::for_theme(self.binding.theme());
        self.bounds(position)
            .into_styled(PrimitiveStyle::with_fill(palette.surface))
            .draw(display)?;

        let color = if self.active {
            palette.primary
        } else {
            palette.on_surface
        };
        let label = self.text().color(color);
        let origin = offset(
            position,
            centered(self.width, label.dimensions().width),
            PADDING.top,
        );
        label.render(display, origin)?;

        if let Some(underline) = self.underline_bounds(position) {
            underline
                .into_styled(PrimitiveStyle::with_fill(palette.primary))
                .draw(display)?;
        }
        Ok(())
    }
}
