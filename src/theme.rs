use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

use crate::telemetry::{log_event, LogLevel};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Icon classes for the mode indicator: a moon invites dark mode, a sun invites light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings store rejected write for {key}")]
    WriteRejected { key: String },
}

pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Where a theme becomes visible: the page mode attribute and the indicator glyph.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

pub struct ThemeManager<S> {
    store: S,
    current: Theme,
}

impl<S: SettingsStore> ThemeManager<S> {
    pub fn load(store: S) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();

        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set_theme(&mut self, theme: Theme, surface: &impl ThemeSurface) {
        surface.apply(theme);

        if let Err(error) = self.store.set(THEME_KEY, theme.as_str()) {
            log_event(
                LogLevel::Debug,
                "theme_persist_failed",
                json!({ "theme": theme.as_str(), "error": error.to_string() }),
            );
        }

        self.current = theme;
    }

    pub fn toggle_theme(&mut self, surface: &impl ThemeSurface) -> Theme {
        let next = self.current.toggled();
        self.set_theme(next, surface);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        mode: RefCell<Option<String>>,
        icon: RefCell<Option<&'static str>>,
        applied: RefCell<usize>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply(&self, theme: Theme) {
            *self.mode.borrow_mut() = Some(theme.as_str().to_string());
            *self.icon.borrow_mut() = Some(theme.icon_class());
            *self.applied.borrow_mut() += 1;
        }
    }

    struct RejectingStore;

    impl SettingsStore for RejectingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::WriteRejected { key: key.to_string() })
        }
    }

    fn store_with(value: &str) -> MemoryStore {
        let store = MemoryStore::new();
        store.set(THEME_KEY, value).expect("memory store accepts writes");
        store
    }

    #[test]
    fn missing_or_unknown_preference_defaults_to_light() {
        assert_eq!(ThemeManager::load(MemoryStore::new()).current(), Theme::Light);
        assert_eq!(ThemeManager::load(store_with("sepia")).current(), Theme::Light);
        assert_eq!(ThemeManager::load(store_with("dark")).current(), Theme::Dark);
    }

    #[test]
    fn toggle_flips_and_persists_what_is_displayed() {
        for start in [Theme::Light, Theme::Dark] {
            let mut manager = ThemeManager::load(store_with(start.as_str()));
            let surface = RecordingSurface::default();

            let next = manager.toggle_theme(&surface);

            assert_eq!(next, start.toggled());
            assert_eq!(manager.current(), next);
            assert_eq!(manager.store().get(THEME_KEY), surface.mode.borrow().clone());
            assert_eq!(*surface.icon.borrow(), Some(next.icon_class()));
        }
    }

    #[test]
    fn setting_same_theme_twice_matches_setting_once() {
        let mut once = ThemeManager::load(MemoryStore::new());
        let once_surface = RecordingSurface::default();
        once.set_theme(Theme::Dark, &once_surface);

        let mut twice = ThemeManager::load(MemoryStore::new());
        let twice_surface = RecordingSurface::default();
        twice.set_theme(Theme::Dark, &twice_surface);
        twice.set_theme(Theme::Dark, &twice_surface);

        assert_eq!(once.current(), twice.current());
        assert_eq!(once.store().get(THEME_KEY), twice.store().get(THEME_KEY));
        assert_eq!(*once_surface.mode.borrow(), *twice_surface.mode.borrow());
        assert_eq!(*once_surface.icon.borrow(), *twice_surface.icon.borrow());
    }

    #[test]
    fn failed_persistence_still_updates_current_theme() {
        let mut manager = ThemeManager::load(RejectingStore);
        let surface = RecordingSurface::default();

        manager.set_theme(Theme::Dark, &surface);

        assert_eq!(manager.current(), Theme::Dark);
        assert_eq!(*surface.applied.borrow(), 1);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }
}
