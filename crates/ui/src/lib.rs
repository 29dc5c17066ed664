//! Shared widget state: settings store, theme binding, attribute parsing,
//! and the pagination controller.
//!
//! This crate is `no_std` by default; it uses `core`, `alloc` (for the
//! listener list) and `heapless`. Nothing here draws: the components crate
//! turns this state into pixels.
//!
//! # Example
//!
//! ```
//! use dav_ui::pagination::{PageEntry, PaginationController};
//! use dav_ui::settings::{SettingsStore, Theme};
//!
//! let store = SettingsStore::new();
//! store.set_theme(true);
//! assert_eq!(store.settings().theme, Theme::Dark);
//!
//! let pager = PaginationController::new(10, 5);
//! assert_eq!(pager.entries().len(), 7);
//! assert_eq!(pager.entries().first(), Some(&PageEntry::page(1, false)));
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

extern crate alloc;

pub mod attrs;
pub mod binding;
pub mod config;
pub mod locale;
pub mod pagination;
pub mod settings;

pub mod prelude {
    //! Glob import for widget implementations.
    pub use crate::attrs::*;
    pub use crate::binding::ThemeBinding;
    pub use crate::locale::LocaleTable;
    pub use crate::pagination::{PageChange, PageEntry, PaginationController, PaginationState};
    pub use crate::settings::{Settings, SettingsListener, SettingsStore, Theme};
}
