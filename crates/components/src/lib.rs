//! Themed widgets for the dav component library.
//!
//! Every widget renders onto any `embedded_graphics` draw target with
//! `Gray4` colour, follows the live theme through a
//! [`ThemeBinding`](dav_ui::binding::ThemeBinding), and reports user
//! interaction as plain event values rather than callbacks.
//!
//! # Components
//!
//! - `Pagination` - page buttons with collapsed ranges and back/forward
//! - `Checkbox` - toggle with optional label
//! - `Header` - title with optional back and edit buttons
//! - `Card` - image placeholder, headline and subhead
//! - `ListItem` - compact row with image, headline and subhead
//! - `TabBarItem` - tab label with active underline
//!
//! `Button`, `Icon` and `Label` are the building blocks they share.
//!
//! # Example
//!
//! ```
//! use dav_components::prelude::*;
//! use dav_ui::settings::SettingsStore;
//!
//! let store = SettingsStore::new();
//! let mut pagination = Pagination::new().pages(10).current_page(5);
//! pagination.attach(&store);
//!
//! assert_eq!(pagination.state().entries.len(), 7);
//! pagination.detach(&store);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod button;
pub mod card;
pub mod checkbox;
pub mod header;
pub mod icon;
pub mod label;
pub mod list_item;
pub mod pagination;
pub mod style;
pub mod tab_bar_item;
pub mod tokens;

pub mod prelude {
    //! Glob import for widget construction.
    pub use crate::button::*;
    pub use crate::card::*;
    pub use crate::checkbox::*;
    pub use crate::header::*;
    pub use crate::icon::*;
    pub use crate::label::*;
    pub use crate::list_item::*;
    pub use crate::pagination::*;
    pub use crate::tab_bar_item::*;
    pub use crate::tokens::Palette;
}
