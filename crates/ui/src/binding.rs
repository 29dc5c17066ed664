//! Theme binding: the per-widget half of the settings subscription.
//!
//! Every themed widget owns one [`ThemeBinding`]. `attach` mirrors the
//! widget being connected to a live tree: it reads the current settings,
//! subscribes a listener and keeps that exact `Rc` so `detach` can remove it
//! again. Notifications update the cached theme/locale and raise a
//! render-request flag the host polls with [`ThemeBinding::take_render_request`].

use alloc::rc::Rc;
use core::cell::Cell;

use crate::locale::{self, LocaleTable};
use crate::settings::{Settings, SettingsListener, SettingsStore, Theme};

struct BoundSettings {
    theme: Cell<Theme>,
    locale: Cell<&'static LocaleTable>,
    render_requested: Cell<bool>,
}

impl BoundSettings {
    fn apply(&self, settings: &Settings) {
        self.theme.set(settings.theme);
        self.locale.set(settings.locale);
        self.render_requested.set(true);
    }
}

/// Cached settings plus the listener that keeps them current.
pub struct ThemeBinding {
    state: Rc<BoundSettings>,
    listener: Option<SettingsListener>,
}

impl ThemeBinding {
    /// Create a detached binding (light theme, English, render requested).
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(BoundSettings {
                theme: Cell::new(Theme::Light),
                locale: Cell::new(&locale::EN),
                render_requested: Cell::new(true),
            }),
            listener: None,
        }
    }

    /// Read the current settings from `store` and subscribe for changes.
    ///
    /// Attaching an already attached binding does nothing, so a widget never
    /// holds more than one registration.
    pub fn attach(&mut self, store: &SettingsStore) {
        if self.listener.is_some() {
            return;
        }
        self.state.apply(&store.settings());

        let state = Rc::clone(&self.state);
        let listener: SettingsListener = Rc::new(move |settings: &Settings| state.apply(settings));
        store.subscribe(Rc::clone(&listener));
        self.listener = Some(listener);
        tracing::debug!(theme = self.theme().as_str(), "theme binding attached");
    }

    /// Unsubscribe from `store`. Detaching twice, or without attaching, is a
    /// no-op.
    pub fn detach(&mut self, store: &SettingsStore) {
        if let Some(listener) = self.listener.take() {
            store.unsubscribe(&listener);
            tracing::debug!("theme binding detached");
        }
    }

    /// Returns `true` between `attach` and `detach`.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Theme seen by the most recent notification (or `attach`).
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.theme.get()
    }

    /// Locale table seen by the most recent notification (or `attach`).
    #[must_use]
    pub fn locale(&self) -> &'static LocaleTable {
        self.state.locale.get()
    }

    /// Returns whether a re-render was requested since the last call, and
    /// clears the flag.
    pub fn take_render_request(&self) -> bool {
        self.state.render_requested.replace(false)
    }

    /// Ask for a re-render, e.g. after a property change.
    pub fn request_render(&self) {
        self.state.render_requested.set(true);
    }
}

impl Default for ThemeBinding {
    fn default() -> Self {
        Self::new()
    }
}
