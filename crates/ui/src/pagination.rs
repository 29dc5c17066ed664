//! Pagination controller: page-range reduction and navigation intents.
//!
//! Pure computation over `(pages, current_page)`. The controller never
//! stores or changes the current page: the widget that owns it applies a
//! [`PageChange`] and builds a new controller for the next render.
//!
//! # Reduction
//!
//! Once there are at least [`REDUCTION_MIN_PAGES`] pages, runs of pages far
//! from the current one collapse into a single ellipsis on each side:
//!
//! ```text
//! pages = 10, current = 1   →  1 2 … 10
//! pages = 10, current = 5   →  1 … 4 5 6 … 10
//! pages = 10, current = 10  →  1 … 9 10
//! ```
//!
//! The first and last page stay visible, and so do the neighbours of the
//! current page. The two collapsed regions are decided independently.
//!
//! # Out-of-range input
//!
//! `current_page` outside `1..=pages` and negative `pages` are not rejected;
//! the formulas are applied literally with saturating arithmetic, so the
//! controller never panics or overflows.

use heapless::Vec;

use crate::config::{
    MAX_VISIBLE_ENTRIES, REDUCTION_END_DISTANCE, REDUCTION_MIN_PAGES, REDUCTION_NEIGHBOURS,
    REDUCTION_START_PAGE,
};

/// Which end of the page range an ellipsis stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// Pages between the first page and the current page's neighbours.
    Start,
    /// Pages between the current page's neighbours and the last page.
    End,
}

/// One slot in the rendered page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageEntry {
    /// An explicit page button.
    Page {
        /// 1-based page index.
        index: i32,
        /// `true` for the current page.
        selected: bool,
    },
    /// Placeholder for a collapsed run of pages.
    Ellipsis(Region),
}

impl PageEntry {
    /// Shorthand for [`PageEntry::Page`].
    #[must_use]
    pub const fn page(index: i32, selected: bool) -> Self {
        PageEntry::Page { index, selected }
    }

    /// Page index of an explicit button, `None` for an ellipsis.
    #[must_use]
    pub const fn index(&self) -> Option<i32> {
        match self {
            PageEntry::Page { index, .. } => Some(*index),
            PageEntry::Ellipsis(_) => None,
        }
    }

    /// Returns `true` for [`PageEntry::Ellipsis`].
    #[must_use]
    pub const fn is_ellipsis(&self) -> bool {
        matches!(self, PageEntry::Ellipsis(_))
    }
}

/// Request to navigate to `page`, emitted as the `pageChange` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PageChange {
    /// Target page.
    pub page: i32,
}

/// Ordered page entries; never longer than [`MAX_VISIBLE_ENTRIES`].
pub type PageEntries = Vec<PageEntry, MAX_VISIBLE_ENTRIES>;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// The low end of the range collapses.
    pub reduced_start: bool,
    /// The high end of the range collapses.
    pub reduced_end: bool,
    /// Back and forward controls are drawn at all (`pages > 0`).
    pub show_navigation: bool,
    /// The back control is inert.
    pub back_disabled: bool,
    /// The forward control is inert.
    pub forward_disabled: bool,
    /// Page buttons and ellipses in ascending page order.
    pub entries: PageEntries,
}

/// Stateless view over `(pages, current_page)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationController {
    pages: i32,
    current_page: i32,
}

impl PaginationController {
    /// Create a controller for `pages` pages with `current_page` selected.
    #[must_use]
    pub const fn new(pages: i32, current_page: i32) -> Self {
        Self {
            pages,
            current_page,
        }
    }

    /// Total number of pages.
    #[must_use]
    pub const fn pages(&self) -> i32 {
        self.pages
    }

    /// Currently selected page.
    #[must_use]
    pub const fn current_page(&self) -> i32 {
        self.current_page
    }

    /// `pages >= 8 && current_page >= 5`
    #[must_use]
    pub const fn reduced_start(&self) -> bool {
        self.pages >= REDUCTION_MIN_PAGES && self.current_page >= REDUCTION_START_PAGE
    }

    /// `pages >= 8 && current_page <= pages - 4`
    #[must_use]
    pub const fn reduced_end(&self) -> bool {
        self.pages >= REDUCTION_MIN_PAGES
            && self.current_page <= self.pages.saturating_sub(REDUCTION_END_DISTANCE)
    }

    /// Back and forward controls exist only when there is at least one page.
    #[must_use]
    pub const fn show_navigation(&self) -> bool {
        self.pages > 0
    }

    /// `current_page <= 1`
    #[must_use]
    pub const fn back_disabled(&self) -> bool {
        self.current_page <= 1
    }

    /// `current_page >= pages`
    #[must_use]
    pub const fn forward_disabled(&self) -> bool {
        self.current_page >= self.pages
    }

    /// Build the ordered entry list for pages `1..=pages`.
    #[must_use]
    pub fn entries(&self) -> PageEntries {
        let reduced_start = self.reduced_start();
        let reduced_end = self.reduced_end();
        let start_limit = self.current_page.saturating_sub(REDUCTION_NEIGHBOURS);
        let end_limit = self.current_page.saturating_add(REDUCTION_NEIGHBOURS);

        let mut entries = PageEntries::new();
        let mut index: i32 = 1;

        // Capacity is MAX_VISIBLE_ENTRIES, which bounds every reachable
        // layout, so the pushes below never drop an entry.
        while index <= self.pages {
            let next = if reduced_start && index <= start_limit && index != 1 {
                entries.push(PageEntry::Ellipsis(Region::Start)).ok();
                // The start region is contiguous up to `start_limit`.
                start_limit.checked_add(1)
            } else if reduced_end && index >= end_limit && index != self.pages {
                entries.push(PageEntry::Ellipsis(Region::End)).ok();
                // Everything before the last page belongs to the end region.
                Some(self.pages)
            } else {
                entries
                    .push(PageEntry::page(index, index == self.current_page))
                    .ok();
                index.checked_add(1)
            };
            match next {
                Some(n) => index = n,
                None => break,
            }
        }

        entries
    }

    /// Derive the full render state.
    #[must_use]
    pub fn state(&self) -> PaginationState {
        PaginationState {
            reduced_start: self.reduced_start(),
            reduced_end: self.reduced_end(),
            show_navigation: self.show_navigation(),
            back_disabled: self.back_disabled(),
            forward_disabled: self.forward_disabled(),
            entries: self.entries(),
        }
    }

    /// Intent for the back control; `None` while it is disabled.
    #[must_use]
    pub fn back(&self) -> Option<PageChange> {
        if self.back_disabled() {
            return None;
        }
        let change = PageChange {
            page: self.current_page.saturating_sub(1),
        };
        tracing::debug!(page = change.page, "pagination back");
        Some(change)
    }

    /// Intent for the forward control; `None` while it is disabled.
    #[must_use]
    pub fn forward(&self) -> Option<PageChange> {
        if self.forward_disabled() {
            return None;
        }
        let change = PageChange {
            page: self.current_page.saturating_add(1),
        };
        tracing::debug!(page = change.page, "pagination forward");
        Some(change)
    }

    /// Intent for a page button. Always emitted; callers only build buttons
    /// for valid indices.
    #[must_use]
    pub fn select_page(&self, index: i32) -> PageChange {
        tracing::debug!(page = index, "pagination select");
        PageChange { page: index }
    }
}
