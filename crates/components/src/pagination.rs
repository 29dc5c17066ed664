//! Pagination widget
//!
//! Draws `[<] 1 … 4 5 6 … 10 [>]` from a [`PaginationController`] and turns
//! clicks back into [`PageChange`] intents. The widget owns `current_page`:
//! the host calls [`Pagination::apply`] (or `set_current_page`) with the
//! intent it accepts, and the next render reflects it.

use core::fmt::Write;

use dav_ui::attrs::parse_number_attr;
use dav_ui::binding::ThemeBinding;
use dav_ui::config::MAX_VISIBLE_ENTRIES;
use dav_ui::locale::{PAGINATION_BACK, PAGINATION_FORWARD};
use dav_ui::pagination::{PageChange, PageEntry, PaginationController, PaginationState};
use dav_ui::settings::SettingsStore;
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use heapless::Vec;

use crate::button::{Button, ButtonStyle};
use crate::icon::IconType;
use crate::label::{Label, TextSize};
use crate::style::{centered, offset, row_width, BUTTON_SIZE, GAP};
use crate::tokens::Palette;

/// `pages` when the attribute is absent or unparsable.
pub const DEFAULT_PAGES: i32 = 1;

/// `current_page` when the attribute is absent or unparsable.
pub const DEFAULT_CURRENT_PAGE: i32 = 1;

/// Text drawn for a collapsed run of pages.
const ELLIPSIS: &str = "...";

/// One clickable or placeholder cell in the pagination row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The back arrow.
    Back,
    /// A page button or an ellipsis.
    Entry(PageEntry),
    /// The forward arrow.
    Forward,
}

/// Back, up to [`MAX_VISIBLE_ENTRIES`] entries, forward.
pub const MAX_SLOTS: usize = MAX_VISIBLE_ENTRIES + 2;

/// Row layout, left to right.
pub type Slots = Vec<(Slot, Rectangle), MAX_SLOTS>;

/// Page navigation control.
pub struct Pagination {
    pages: i32,
    current_page: i32,
    binding: ThemeBinding,
}

impl Pagination {
    /// One page, first page selected, detached.
    pub fn new() -> Self {
        Self {
            pages: DEFAULT_PAGES,
            current_page: DEFAULT_CURRENT_PAGE,
            binding: ThemeBinding::new(),
        }
    }

    /// Set the page count.
    pub fn pages(mut self, pages: i32) -> Self {
        self.pages = pages;
        self
    }

    /// Set the selected page.
    pub fn current_page(mut self, page: i32) -> Self {
        self.current_page = page;
        self
    }

    /// Change the page count and request a re-render.
    pub fn set_pages(&mut self, pages: i32) {
        self.pages = pages;
        self.binding.request_render();
    }

    /// Change the selected page and request a re-render.
    pub fn set_current_page(&mut self, page: i32) {
        self.current_page = page;
        self.binding.request_render();
    }

    /// Accept a page-change intent.
    pub fn apply(&mut self, change: PageChange) {
        self.set_current_page(change.page);
    }

    /// Set a property from its markup attribute. Returns `false` for an
    /// attribute this widget does not have.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        match name {
            "pages" => self.set_pages(parse_number_attr(value, DEFAULT_PAGES)),
            "current-page" => self.set_current_page(parse_number_attr(value, DEFAULT_CURRENT_PAGE)),
            _ => {
                tracing::trace!(name, "pagination: unknown attribute");
                return false;
            }
        }
        true
    }

    /// Connect to `store`: adopt its theme and follow later changes.
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

    /// Colours for the current theme.
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.binding.theme())
    }

    /// Controller for the current properties.
    pub fn controller(&self) -> PaginationController {
        PaginationController::new(self.pages, self.current_page)
    }

    /// Derived render state.
    pub fn state(&self) -> PaginationState {
        self.controller().state()
    }

    /// Page buttons are only shown when there is more than one page.
    pub fn page_buttons_visible(&self) -> bool {
        self.pages > 1
    }

    /// Localized label of the back arrow.
    pub fn back_label(&self) -> &'static str {
        self.binding.locale().text(PAGINATION_BACK)
    }

    /// Localized label of the forward arrow.
    pub fn forward_label(&self) -> &'static str {
        self.binding.locale().text(PAGINATION_FORWARD)
    }

    fn slot_kinds(&self) -> Vec<Slot, MAX_SLOTS> {
        let controller = self.controller();
        let mut kinds = Vec::new();
        if !controller.show_navigation() {
            return kinds;
        }
        kinds.push(Slot::Back).ok();
        if self.page_buttons_visible() {
            for entry in controller.entries() {
                kinds.push(Slot::Entry(entry)).ok();
            }
        }
        kinds.push(Slot::Forward).ok();
        kinds
    }

    /// Cells of the row, left to right, placed at `position`.
    pub fn slots(&self, position: Point) -> Slots {
        let mut slots = Slots::new();
        let mut x = 0u32;
        for kind in self.slot_kinds() {
            let bounds = Rectangle::new(offset(position, x, 0), Size::new(BUTTON_SIZE, BUTTON_SIZE));
            slots.push((kind, bounds)).ok();
            x = x.saturating_add(BUTTON_SIZE).saturating_add(GAP);
        }
        slots
    }

    /// Size of the whole row; zero when there are no pages.
    pub fn size(&self) -> Size {
        let count = self.slot_kinds().len();
        if count == 0 {
            return Size::zero();
        }
        Size::new(row_width(count, BUTTON_SIZE, GAP), BUTTON_SIZE)
    }

    /// Bounding box at `position`.
    pub fn bounds(&self, position: Point) -> Rectangle {
        Rectangle::new(position, self.size())
    }

    /// Hit-test a click at `point` and return the resulting intent.
    ///
    /// Disabled arrows and ellipses yield `None`.
    pub fn click(&self, position: Point, point: Point) -> Option<PageChange> {
        let (slot, _) = self
            .slots(position)
            .into_iter()
            .find(|(_, bounds)| bounds.contains(point))?;
        let controller = self.controller();
        match slot {
            Slot::Back => controller.back(),
            Slot::Forward => controller.forward(),
            Slot::Entry(PageEntry::Page { index, .. }) => Some(controller.select_page(index)),
            Slot::Entry(PageEntry::Ellipsis(_)) => None,
        }
    }

    /// Render the row at `position`.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let palette = self.palette();
        let controller = self.controller();
        let slots = self.slots(position);
        tracing::trace!(
            pages = self.pages,
            current_page = self.current_page,
            slots = slots.len(),
            "pagination render"
        );

        if slots.is_empty() {
            return Ok(());
        }
        self.bounds(position)
            .into_styled(PrimitiveStyle::with_fill(palette.surface))
            .draw(display)?;

        let square = Size::new(BUTTON_SIZE, BUTTON_SIZE);
        for (slot, bounds) in slots {
            match slot {
                Slot::Back | Slot::Forward => {
                    let (icon, disabled) = if slot == Slot::Back {
                        (IconType::ChevronLeft, controller.back_disabled())
                    } else {
                        (IconType::ChevronRight, controller.forward_disabled())
                    };
                    let mut style = ButtonStyle::outlined(&palette);
                    if disabled {
                        style = style.disabled(&palette);
                    }
                    Button::icon(icon, style)
                        .fixed_size(square)
                        .render(display, bounds.top_left)?;
                }
                Slot::Entry(PageEntry::Page { index, selected }) => {
                    let mut number: heapless::String<11> = heapless::String::new();
                    write!(number, "{index}").ok();
                    let style = if selected {
                        ButtonStyle::filled(&palette)
                    } else {
                        ButtonStyle::text(&palette)
                    };
                    Button::new(&number, style)
                        .fixed_size(square)
                        .render(display, bounds.top_left)?;
                }
                Slot::Entry(PageEntry::Ellipsis(_)) => {
                    let label = Label::new(ELLIPSIS)
                        .size(TextSize::Normal)
                        .color(palette.on_surface_variant);
                    let text = label.dimensions();
                    let origin = offset(
                        bounds.top_left,
                        centered(BUTTON_SIZE, text.width),
                        centered(BUTTON_SIZE, text.height),
                    );
                    label.render(display, origin)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}
