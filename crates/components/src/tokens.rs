//! Design tokens mapped onto four-bit greyscale.
//!
//! The light and dark token sets follow the library's Material-style colour
//! roles; each role is reduced to the `Gray4` level closest to its tone.

use dav_ui::settings::Theme;
use embedded_graphics::pixelcolor::{Gray4, GrayColor};

/// Colour roles used by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Widget background.
    pub surface: Gray4,
    /// Text and icons on `surface`.
    pub on_surface: Gray4,
    /// Secondary text, ellipses.
    pub on_surface_variant: Gray4,
    /// Accent: selected page, checked box, active tab.
    pub primary: Gray4,
    /// Text and icons on `primary`.
    pub on_primary: Gray4,
    /// Borders and image placeholders.
    pub outline: Gray4,
    /// Inert controls.
    pub disabled: Gray4,
}

impl Palette {
    /// Light theme (neutral99 surface, primary40 accent).
    pub const LIGHT: Palette = Palette {
        surface: Gray4::WHITE,
        on_surface: Gray4::new(0x1),
        on_surface_variant: Gray4::new(0x4),
        primary: Gray4::new(0x5),
        on_primary: Gray4::WHITE,
        outline: Gray4::new(0x7),
        disabled: Gray4::new(0xA),
    };

    /// Dark theme (neutral10 surface, primary80 accent).
    pub const DARK: Palette = Palette {
        surface: Gray4::new(0x1),
        on_surface: Gray4::new(0xD),
        on_surface_variant: Gray4::new(0xC),
        primary: Gray4::new(0xC),
        on_primary: Gray4::new(0x3),
        outline: Gray4::new(0x8),
        disabled: Gray4::new(0x6),
    };

    /// Token set for `theme`.
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::LIGHT
    }
}
