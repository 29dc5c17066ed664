//! Locale tables: static key to display-string maps for widget text.
//!
//! Two tables ship with the library: [`EN`] (the default) and [`DE`].
//! [`select`] picks one from a BCP-47 style language tag using a plain
//! prefix rule; anything unrecognised falls back to English.

use crate::config::GERMAN_LANG_PREFIX;

/// Key for the accessible label of the pagination back button.
pub const PAGINATION_BACK: &str = "pagination-back";
/// Key for the accessible label of the pagination forward button.
pub const PAGINATION_FORWARD: &str = "pagination-forward";
/// Key for the header back button label.
pub const HEADER_BACK: &str = "header-back";
/// Key for the header edit button label.
pub const HEADER_EDIT: &str = "header-edit";
/// Key announced when a checkbox becomes checked.
pub const CHECKBOX_CHECKED: &str = "checkbox-checked";
/// Key announced when a checkbox becomes unchecked.
pub const CHECKBOX_UNCHECKED: &str = "checkbox-unchecked";

/// An immutable table of localized UI strings.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleTable {
    lang: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl LocaleTable {
    /// Language code of this table (`"en"`, `"de"`).
    #[must_use]
    pub const fn lang(&self) -> &'static str {
        self.lang
    }

    /// Look up `key`, returning `None` when the table has no entry for it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    /// Look up `key`, falling back to the key itself so missing strings stay
    /// visible instead of rendering as blanks.
    #[must_use]
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// English strings (default table).
pub static EN: LocaleTable = LocaleTable {
    lang: "en",
    entries: &[
        (PAGINATION_BACK, "Previous page"),
        (PAGINATION_FORWARD, "Next page"),
        (HEADER_BACK, "Back"),
        (HEADER_EDIT, "Edit"),
        (CHECKBOX_CHECKED, "Checked"),
        (CHECKBOX_UNCHECKED, "Not checked"),
    ],
};

/// German strings.
pub static DE: LocaleTable = LocaleTable {
    lang: "de",
    entries: &[
        (PAGINATION_BACK, "Vorherige Seite"),
        (PAGINATION_FORWARD, "Nächste Seite"),
        (HEADER_BACK, "Zurück"),
        (HEADER_EDIT, "Bearbeiten"),
        (CHECKBOX_CHECKED, "Ausgewählt"),
        (CHECKBOX_UNCHECKED, "Nicht ausgewählt"),
    ],
};

/// Select the table for `lang_tag`.
///
/// Tags starting with `"de"` select [`DE`]; every other tag, including the
/// empty string, selects [`EN`].
#[must_use]
pub fn select(lang_tag: &str) -> &'static LocaleTable {
    if lang_tag.starts_with(GERMAN_LANG_PREFIX) {
        &DE
    } else {
        &EN
    }
}
