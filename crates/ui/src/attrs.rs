//! Attribute enumerations and their string converters.
//!
//! Widget attributes arrive as strings written by markup authors. Each
//! converter is total: an unrecognised value maps to the documented default
//! instead of failing, so a typo degrades to a sensible look rather than a
//! broken widget.

/// Generates a closed attribute enum with a total `From<&str>`, `as_attr`,
/// and `Default` pointing at the fallback variant.
macro_rules! attr_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            default $default:ident => $default_attr:literal,
            $( $variant:ident => $attr:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            #[doc = concat!("`\"", $default_attr, "\"` and any unrecognised value.")]
            #[default]
            $default,
            $(
                #[doc = concat!("`\"", $attr, "\"`")]
                $variant,
            )*
        }

        impl $name {
            /// Attribute spelling of this variant.
            #[must_use]
            pub const fn as_attr(self) -> &'static str {
                match self {
                    $name::$default => $default_attr,
                    $( $name::$variant => $attr, )*
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $attr => $name::$variant, )*
                    _ => $name::$default,
                }
            }
        }
    };
}

attr_enum! {
    /// Colour role of a button.
    ButtonColor {
        default Primary => "primary",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Error => "error",
    }
}

attr_enum! {
    /// Button size.
    ButtonSize {
        default Normal => "normal",
        Small => "small",
    }
}

attr_enum! {
    /// How a side navigation panel shares space with content.
    SidenavMode {
        default Side => "side",
        Over => "over",
    }
}

attr_enum! {
    /// Horizontal alignment of header content.
    Alignment {
        default Center => "center",
        Start => "start",
        End => "end",
    }
}

attr_enum! {
    /// Header title size.
    HeaderSize {
        default Normal => "normal",
        Large => "large",
        Small => "small",
    }
}

attr_enum! {
    /// Card layout direction.
    Orientation {
        default Vertical => "vertical",
        Horizontal => "horizontal",
    }
}

attr_enum! {
    /// List item height class.
    ListItemSize {
        default Normal => "normal",
        Small => "small",
    }
}

/// Parse a boolean attribute the way markup does: presence means `true`
/// unless the value is literally `"false"`.
#[must_use]
pub fn parse_bool_attr(value: &str) -> bool {
    value != "false"
}

/// Parse a numeric attribute, falling back to `default` on anything that is
/// not a base-10 `i32`.
#[must_use]
pub fn parse_number_attr(value: &str, default: i32) -> i32 {
    value.trim().parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_color() {
        assert_eq!(ButtonColor::from("secondary"), ButtonColor::Secondary);
        assert_eq!(ButtonColor::from("tertiary"), ButtonColor::Tertiary);
        assert_eq!(ButtonColor::from("error"), ButtonColor::Error);
        assert_eq!(ButtonColor::from("primary"), ButtonColor::Primary);
        assert_eq!(ButtonColor::from("purple"), ButtonColor::Primary);
    }

    #[test]
    fn test_button_size() {
        assert_eq!(ButtonSize::from("small"), ButtonSize::Small);
        assert_eq!(ButtonSize::from("huge"), ButtonSize::Normal);
    }

    #[test]
    fn test_sidenav_mode() {
        assert_eq!(SidenavMode::from("over"), SidenavMode::Over);
        assert_eq!(SidenavMode::from(""), SidenavMode::Side);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(Alignment::from("start"), Alignment::Start);
        assert_eq!(Alignment::from("end"), Alignment::End);
        assert_eq!(Alignment::from("left"), Alignment::Center);
    }

    #[test]
    fn test_header_size() {
        assert_eq!(HeaderSize::from("large"), HeaderSize::Large);
        assert_eq!(HeaderSize::from("small"), HeaderSize::Small);
        assert_eq!(HeaderSize::from("LARGE"), HeaderSize::Normal);
    }

    #[test]
    fn test_orientation_and_list_item_size() {
        assert_eq!(Orientation::from("horizontal"), Orientation::Horizontal);
        assert_eq!(Orientation::from("diagonal"), Orientation::Vertical);
        assert_eq!(ListItemSize::from("small"), ListItemSize::Small);
        assert_eq!(ListItemSize::from("tiny"), ListItemSize::Normal);
    }

    #[test]
    fn test_as_attr_is_inverse() {
        for a in [Alignment::Start, Alignment::Center, Alignment::End] {
            assert_eq!(Alignment::from(a.as_attr()), a);
        }
        assert_eq!(HeaderSize::default().as_attr(), "normal");
    }

    #[test]
    fn test_bool_and_number_attrs() {
        assert!(parse_bool_attr(""));
        assert!(parse_bool_attr("true"));
        assert!(!parse_bool_attr("false"));
        assert_eq!(parse_number_attr(" 12 ", 1), 12);
        assert_eq!(parse_number_attr("-3", 1), -3);
        assert_eq!(parse_number_attr("twelve", 1), 1);
    }
}
