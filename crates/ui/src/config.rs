//! Library configuration and constants
//!
//! Central tuning values for the widget logic. Widgets and tests reference
//! these constants rather than repeating the literals.

/// The library name
pub const LIB_NAME: &str = "dav-widgets";

/// Library version (synchronized with Cargo.toml)
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum page count before either end of the page range may collapse.
pub const REDUCTION_MIN_PAGES: i32 = 8;

/// Lowest current page at which the start of the range collapses.
pub const REDUCTION_START_PAGE: i32 = 5;

/// The end of the range collapses while the current page is at least this
/// many pages before the last page.
pub const REDUCTION_END_DISTANCE: i32 = 4;

/// Distance from the current page at which a collapsed region begins.
///
/// Pages `current - 1`, `current` and `current + 1` always stay visible.
pub const REDUCTION_NEIGHBOURS: i32 = 2;

/// Upper bound on the entries the pagination controller can produce:
/// first page, ellipsis, three neighbours, ellipsis, last page.
pub const MAX_VISIBLE_ENTRIES: usize = 7;

/// Language-tag prefix that selects the German locale table.
pub const GERMAN_LANG_PREFIX: &str = "de";
