//! Settings store, the single source of truth for theme and locale.
//!
//! A [`SettingsStore`] owns the current [`Settings`] value and an ordered
//! list of [`SettingsListener`]s. `set_theme` / `set_locale` update one field
//! and then call every listener synchronously, in subscription order, before
//! returning.
//!
//! The store is an ordinary value: construct one per application and hand
//! widgets a shared reference to it. Tests construct as many independent
//! stores as they like.
//!
//! # Listener identity
//!
//! Listeners are `Rc<dyn Fn(&Settings)>` and are compared by pointer
//! ([`Rc::ptr_eq`]). A widget must keep the `Rc` it subscribed with and pass
//! that same `Rc` to [`SettingsStore::unsubscribe`]; a second closure with
//! identical behaviour is a different listener.
//!
//! # Re-entrancy
//!
//! Each notification pass iterates over a snapshot of the listener list, so a
//! listener may subscribe, unsubscribe, read the settings, or even change them
//! while being notified. Listeners added during a pass are first called on the
//! next pass; listeners removed during a pass still receive the current one.
//! Every listener reads the settings at the moment it is called.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::locale::{self, LocaleTable};

/// Light or dark visual mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Theme {
    /// Light surfaces, dark text.
    #[default]
    Light,
    /// Dark surfaces, light text.
    Dark,
}

impl Theme {
    /// `Dark` when `dark` is true, otherwise `Light`.
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Returns `true` for [`Theme::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Stable lowercase name, suitable for logs and attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Current application-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Active string table.
    pub locale: &'static LocaleTable,
    /// Active visual theme.
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: &locale::EN,
            theme: Theme::Light,
        }
    }
}

/// Callback invoked with the current settings after every change.
pub type SettingsListener = Rc<dyn Fn(&Settings)>;

/// Owner of the [`Settings`] value and its listeners.
///
/// Single-threaded by construction (`!Send`, `!Sync`): all operations run on
/// the UI thread and complete in time proportional to the listener count.
pub struct SettingsStore {
    settings: Cell<Settings>,
    listeners: RefCell<Vec<SettingsListener>>,
}

impl SettingsStore {
    /// Create a store with English strings and the light theme.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a store seeded with `settings`.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Cell::new(settings),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Return the current settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings.get()
    }

    /// Append `listener` to the notification list.
    ///
    /// Subscribing the same `Rc` twice is allowed and makes it fire twice per
    /// notification; owners are expected to subscribe once.
    pub fn subscribe(&self, listener: SettingsListener) {
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(listener);
        tracing::trace!(listeners = listeners.len(), "settings listener subscribed");
    }

    /// Remove the first entry pointer-equal to `listener`.
    ///
    /// Removing a listener that was never subscribed (or was already removed)
    /// does nothing: widget teardown order is not guaranteed relative to
    /// subscription.
    pub fn unsubscribe(&self, listener: &SettingsListener) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(pos) = listeners.iter().position(|l| Rc::ptr_eq(l, listener)) {
            listeners.remove(pos);
            tracing::trace!(listeners = listeners.len(), "settings listener unsubscribed");
        }
    }

    /// Number of subscribed listeners (duplicates counted separately).
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Switch to the dark theme when `dark` is true, otherwise the light
    /// theme, then notify every listener.
    pub fn set_theme(&self, dark: bool) {
        let mut settings = self.settings.get();
        settings.theme = Theme::from_dark(dark);
        self.settings.set(settings);
        tracing::debug!(theme = settings.theme.as_str(), "theme changed");
        self.notify();
    }

    /// Select the locale table for `lang_tag` (see [`locale::select`]), then
    /// notify every listener.
    pub fn set_locale(&self, lang_tag: &str) {
        let mut settings = self.settings.get();
        settings.locale = locale::select(lang_tag);
        self.settings.set(settings);
        tracing::debug!(lang_tag, locale = settings.locale.lang(), "locale changed");
        self.notify();
    }

    fn notify(&self) {
        // Clone the Rc handles so listeners may touch the list re-entrantly.
        let snapshot: Vec<SettingsListener> = self.listeners.borrow().clone();
        tracing::trace!(listeners = snapshot.len(), "notifying settings listeners");
        for listener in &snapshot {
            let settings = self.settings.get();
            listener(&settings);
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("settings", &self.settings.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{DE, EN};

    fn recorder() -> (Rc<RefCell<Vec<Settings>>>, SettingsListener) {
        let calls: Rc<RefCell<Vec<Settings>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let listener: SettingsListener = Rc::new(move |s: &Settings| sink.borrow_mut().push(*s));
        (calls, listener)
    }

    #[test]
    fn test_store_defaults() {
        let store = SettingsStore::new();
        let settings = store.settings();
        assert_eq!(settings.theme, Theme::Light);
        assert!(core::ptr::eq(settings.locale, &EN));
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_set_theme_notifies_once_with_dark() {
        let store = SettingsStore::new();
        let (calls, listener) = recorder();
        store.subscribe(listener);

        store.set_theme(true);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].theme, Theme::Dark);
        assert_eq!(store.settings().theme, Theme::Dark);
    }

    #[test]
    fn test_unsubscribed_listener_not_called() {
        let store = SettingsStore::new();
        let (calls, listener) = recorder();
        store.subscribe(Rc::clone(&listener));
        store.unsubscribe(&listener);

        store.set_theme(false);

        assert!(calls.borrow().is_empty());
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_duplicate_subscription_fires_twice() {
        let store = SettingsStore::new();
        let (calls, listener) = recorder();
        store.subscribe(Rc::clone(&listener));
        store.subscribe(Rc::clone(&listener));

        store.set_theme(true);
        assert_eq!(calls.borrow().len(), 2);

        // Unsubscribe removes one registration at a time.
        store.unsubscribe(&listener);
        store.set_theme(false);
        assert_eq!(calls.borrow().len(), 3);
    }

    #[test]
    fn test_unsubscribe_unknown_is_noop() {
        let store = SettingsStore::new();
        let (_calls, registered) = recorder();
        let (_other_calls, stranger) = recorder();
        store.subscribe(registered);

        store.unsubscribe(&stranger);
        store.unsubscribe(&stranger);

        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn test_identity_not_behaviour() {
        let store = SettingsStore::new();
        let hits = Rc::new(Cell::new(0u32));
        let h1 = Rc::clone(&hits);
        let h2 = Rc::clone(&hits);
        let a: SettingsListener = Rc::new(move |_: &Settings| h1.set(h1.get() + 1));
        let b: SettingsListener = Rc::new(move |_: &Settings| h2.set(h2.get() + 1));
        store.subscribe(Rc::clone(&a));

        store.unsubscribe(&b);
        store.set_theme(true);

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_notification_order_is_subscription_order() {
        let store = SettingsStore::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3u8 {
            let order = Rc::clone(&order);
            store.subscribe(Rc::new(move |_: &Settings| order.borrow_mut().push(id)));
        }

        store.set_locale("de");

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_set_locale_selects_table() {
        let store = SettingsStore::new();
        store.set_locale("de-DE");
        assert!(core::ptr::eq(store.settings().locale, &DE));
        store.set_locale("fr-FR");
        assert!(core::ptr::eq(store.settings().locale, &EN));
        store.set_locale("de");
        store.set_locale("");
        assert!(core::ptr::eq(store.settings().locale, &EN));
    }

    #[test]
    fn test_set_locale_keeps_theme() {
        let store = SettingsStore::new();
        store.set_theme(true);
        store.set_locale("de-CH");
        assert_eq!(store.settings().theme, Theme::Dark);
    }

    #[test]
    fn test_listener_added_during_notification_waits_for_next_pass() {
        let store = Rc::new(SettingsStore::new());
        let (late_calls, late) = recorder();

        let store_ref = Rc::downgrade(&store);
        let late_slot = RefCell::new(Some(late));
        let adder: SettingsListener = Rc::new(move |_: &Settings| {
            if let (Some(store), Some(late)) = (store_ref.upgrade(), late_slot.borrow_mut().take()) {
                store.subscribe(late);
            }
        });
        store.subscribe(adder);

        store.set_theme(true);
        assert!(late_calls.borrow().is_empty());
        assert_eq!(store.listener_count(), 2);

        store.set_theme(false);
        assert_eq!(late_calls.borrow().len(), 1);
    }

    #[test]
    fn test_listener_can_unsubscribe_itself() {
        let store = Rc::new(SettingsStore::new());
        let hits = Rc::new(Cell::new(0u32));
        let slot: Rc<RefCell<Option<SettingsListener>>> = Rc::new(RefCell::new(None));

        let store_ref = Rc::downgrade(&store);
        let slot_ref = Rc::clone(&slot);
        let hits_ref = Rc::clone(&hits);
        let once: SettingsListener = Rc::new(move |_: &Settings| {
            hits_ref.set(hits_ref.get() + 1);
            if let (Some(store), Some(me)) = (store_ref.upgrade(), slot_ref.borrow_mut().take()) {
                store.unsubscribe(&me);
            }
        });
        *slot.borrow_mut() = Some(Rc::clone(&once));
        store.subscribe(once);

        store.set_theme(true);
        store.set_theme(false);

        assert_eq!(hits.get(), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_listener_sees_latest_value_after_reentrant_change() {
        let store = Rc::new(SettingsStore::new());
        let store_ref = Rc::downgrade(&store);
        let flipper: SettingsListener = Rc::new(move |s: &Settings| {
            if s.theme == Theme::Dark {
                if let Some(store) = store_ref.upgrade() {
                    store.set_theme(false);
                }
            }
        });
        let (calls, observer) = recorder();
        store.subscribe(flipper);
        store.subscribe(observer);

        store.set_theme(true);

        // The nested pass reports Light; the outer pass re-reads and also sees Light.
        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|s| s.theme == Theme::Light));
    }

    #[test]
    fn test_independent_stores() {
        let a = SettingsStore::new();
        let b = SettingsStore::new();
        a.set_theme(true);
        assert_eq!(a.settings().theme, Theme::Dark);
        assert_eq!(b.settings().theme, Theme::Light);
    }
}
