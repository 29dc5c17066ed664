//! Checkbox widget

use alloc::string::String;

use dav_ui::attrs::parse_bool_attr;
use dav_ui::binding::ThemeBinding;
use dav_ui::locale::{CHECKBOX_CHECKED, CHECKBOX_UNCHECKED};
use dav_ui::settings::SettingsStore;
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{CornerRadii, PrimitiveStyle, Rectangle, RoundedRectangle},
};

use crate::icon::{Icon, IconType};
use crate::label::{Label, TextSize};
use crate::style::{centered, offset};
use crate::tokens::Palette;

/// Side length of the box.
pub const BOX_SIZE: u32 = 18;

/// Space between the box and its label.
pub const LABEL_GAP: u32 = 8;

/// Emitted after every toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxChange {
    /// State after the toggle.
    pub checked: bool,
}

/// Keys a focused checkbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Anything else; ignored.
    Other,
}

impl Key {
    /// Map a DOM-style key code (`"Space"`, `"Enter"`).
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            "Enter" | "NumpadEnter" => Key::Enter,
            _ => Key::Other,
        }
    }
}

/// Two-state toggle with an optional text label.
pub struct Checkbox {
    label: String,
    checked: bool,
    disabled: bool,
    label_hidden: bool,
    binding: ThemeBinding,
}

impl Checkbox {
    /// Unchecked, enabled, no label.
    pub fn new() -> Self {
        Self {
            label: String::new(),
            checked: false,
            disabled: false,
            label_hidden: false,
            binding: ThemeBinding::new(),
        }
    }

    /// Set the label text.
    pub fn label(mut self, label: &str) -> Self {
        self.label = String::from(label);
        self
    }

    /// Set the initial state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Make the checkbox inert.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Keep the label for assistive text but do not draw it.
    pub fn label_hidden(mut self, hidden: bool) -> Self {
        self.label_hidden = hidden;
        self
    }

    /// Set a property from its markup attribute. Returns `false` for an
    /// attribute this widget does not have.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        match name {
            "label" => self.label = String::from(value),
            "checked" => self.checked = parse_bool_attr(value),
            "disabled" => self.disabled = parse_bool_attr(value),
            "label-hidden" => self.label_hidden = parse_bool_attr(value),
            _ => {
                tracing::trace!(name, "checkbox: unknown attribute");
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

    /// Current state.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether clicks and keys are ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the label is drawn.
    pub fn label_visible(&self) -> bool {
        !self.label_hidden && !self.label.is_empty()
    }

    /// Localized announcement of the current state.
    pub fn state_text(&self) -> &'static str {
        let key = if self.checked {
            CHECKBOX_CHECKED
        } else {
            CHECKBOX_UNCHECKED
        };
        self.binding.locale().text(key)
    }

    fn toggle(&mut self) -> Option<CheckboxChange> {
        if self.disabled {
            return None;
        }
        self.checked = !self.checked;
        self.binding.request_render();
        tracing::debug!(checked = self.checked, "checkbox change");
        Some(CheckboxChange {
            checked: self.checked,
        })
    }

    /// Toggle from a click on the box or its label.
    pub fn click(&mut self) -> Option<CheckboxChange> {
        self.toggle()
    }

    /// Toggle when `point` hits the widget at `position`.
    pub fn click_at(&mut self, position: Point, point: Point) -> Option<CheckboxChange> {
        if self.bounds(position).contains(point) {
            self.toggle()
        } else {
            None
        }
    }

    /// Toggle on Space or Enter.
    pub fn key(&mut self, key: Key) -> Option<CheckboxChange> {
        match key {
            Key::Space | Key::Enter => self.toggle(),
            Key::Other => None,
        }
    }

    fn text(&self) -> Label<'_> {
        Label::new(&self.label).size(TextSize::Medium)
    }

    /// Box plus visible label.
    pub fn size(&self) -> Size {
        if !self.label_visible() {
            return Size::new(BOX_SIZE, BOX_SIZE);
        }
        let text = self.text().dimensions();
        Size::new(
            BOX_SIZE.saturating_add(LABEL_GAP).saturating_add(text.width),
            BOX_SIZE.max(text.height),
        )
    }

    /// Bounding box at `position`.
    pub fn bounds(&self, position: Point) -> Rectangle {
        Rectangle::new(position, self.size())
    }

    /// Bounds of the box alone.
    pub fn box_bounds(&self, position: Point) -> Rectangle {
        let height = self.size().height;
        Rectangle::new(
            offset(position, 0, centered(height, BOX_SIZE)),
            Size::new(BOX_SIZE, BOX_SIZE),
        )
    }

    /// Render the checkbox at `position`.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let palette = Palette::for_theme(self.binding.theme());
        let accent = if self.disabled {
            palette.disabled
        } else {
            palette.primary
        };

        self.bounds(position)
            .into_styled(PrimitiveStyle::with_fill(palette.surface))
            .draw(display)?;

        let frame = self.box_bounds(position);
        let shape = RoundedRectangle::new(frame, CornerRadii::new(Size::new(2, 2)));
        if self.checked {
            shape
                .into_styled(PrimitiveStyle::with_fill(accent))
                .draw(display)?;
            Icon::new(IconType::Checkmark, BOX_SIZE)
                .color(palette.on_primary)
                .render(display, frame.top_left)?;
        } else {
            let border = if self.disabled {
                palette.disabled
            } else {
                palette.outline
            };
            shape
                .into_styled(PrimitiveStyle::with_stroke(border, 2))
                .draw(display)?;
        }

        if self.label_visible() {
            let color = if self.disabled {
                palette.disabled
            } else {
                palette.on_surface
            };
            let label = self.text().color(color);
            let height = self.size().height;
            let origin = offset(
                position,
                BOX_SIZE.saturating_add(LABEL_GAP),
                centered(height, label.dimensions().height),
            );
            label.render(display, origin)?;
        }
        Ok(())
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_toggles_and_reports() {
        let mut c = Checkbox::new();
        assert_eq!(c.click(), Some(CheckboxChange { checked: true }));
        assert!(c.is_checked());
        assert_eq!(c.click(), Some(CheckboxChange { checked: false }));
        assert!(!c.is_checked());
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut c = Checkbox::new().checked(true).disabled(true);
        assert_eq!(c.click(), None);
        assert_eq!(c.key(Key::Space), None);
        assert!(c.is_checked());
    }

    #[test]
    fn test_keys() {
        let mut c = Checkbox::new();
        assert_eq!(c.key(Key::from_code("KeyA")), None);
        assert_eq!(c.key(Key::from_code("Space")), Some(CheckboxChange { checked: true }));
        assert_eq!(c.key(Key::from_code("Enter")), Some(CheckboxChange { checked: false }));
    }

    #[test]
    fn test_label_visibility() {
        assert!(!Checkbox::new().label_visible());
        assert!(Checkbox::new().label("Accept").label_visible());
        assert!(!Checkbox::new().label("Accept").label_hidden(true).label_visible());

        let plain = Checkbox::new().size();
        assert_eq!(plain, Size::new(BOX_SIZE, BOX_SIZE));
        let labelled = Checkbox::new().label("Accept").size();
        assert_eq!(labelled.width, BOX_SIZE + LABEL_GAP + 6 * 8);
    }

    #[test]
    fn test_click_at_hits_label_too() {
        let mut c = Checkbox::new().label("Accept");
        let origin = Point::new(10, 10);
        assert!(c.click_at(origin, Point::new(10 + 30, 15)).is_some());
        assert!(c.click_at(origin, Point::new(5, 5)).is_none());
    }

    #[test]
    fn test_attributes() {
        let mut c = Checkbox::new();
        assert!(c.set_attribute("checked", ""));
        assert!(c.is_checked());
        assert!(c.set_attribute("checked", "false"));
        assert!(!c.is_checked());
        assert!(c.set_attribute("disabled", "true"));
        assert!(c.is_disabled());
        assert!(!c.set_attribute("size", "small"));
    }

    #[test]
    fn test_state_text_is_localized() {
        let store = SettingsStore::new();
        store.set_locale("de");
        let mut c = Checkbox::new();
        c.attach(&store);
        assert_eq!(c.state_text(), "Nicht ausgewählt");
        c.click();
        assert_eq!(c.state_text(), "Ausgewählt");
        c.detach(&store);
    }
}
