//! Persisted Client State
//!
//! The three localStorage slots (favorites, plan, theme) behind a small
//! key-value trait so the load/save logic is testable off-browser.
//! A corrupted or missing value always loads as the default; saves are
//! whole-value overwrites.

use std::collections::{BTreeMap, HashSet};

use serde::{de::DeserializeOwned, Serialize};

pub const FAVORITES_KEY: &str = "fish-fry-favorites";
pub const PLAN_KEY: &str = "fish-fry-plan";
pub const THEME_KEY: &str = "mke-fish-fry-theme";

/// String key-value storage. Failures degrade to absence on read and
/// a silent no-op on write.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage` backend.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

fn load_json<T: DeserializeOwned + Default>(backend: &impl StorageBackend, key: &str) -> T {
    backend
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn save_json<T: Serialize>(backend: &impl StorageBackend, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        backend.set(key, &raw);
    }
}

// ========================
// Favorites
// ========================

/// User-marked locations of interest, independent of any date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites(HashSet<u32>);

impl Favorites {
    pub fn load(backend: &impl StorageBackend) -> Self {
        Self(load_json::<Vec<u32>>(backend, FAVORITES_KEY).into_iter().collect())
    }

    pub fn save(&self, backend: &impl StorageBackend) {
        let ids: Vec<u32> = self.0.iter().copied().collect();
        save_json(backend, FAVORITES_KEY, &ids);
    }

    pub fn contains(&self, location_id: u32) -> bool {
        self.0.contains(&location_id)
    }

    /// Add if absent, remove if present.
    pub fn toggle(&mut self, location_id: u32) {
        if !self.0.insert(location_id) {
            self.0.remove(&location_id);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ========================
// Plan
// ========================

/// ISO date → chosen fish fry id, at most one per date.
pub type PlanMap = BTreeMap<String, u32>;

pub fn load_plan(backend: &impl StorageBackend) -> PlanMap {
    load_json(backend, PLAN_KEY)
}

pub fn save_plan(backend: &impl StorageBackend, plan: &PlanMap) {
    save_json(backend, PLAN_KEY, plan);
}

// ========================
// Theme
// ========================

/// Light/dark theme, mirrored into the `data-bs-theme` document attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Stored as the raw string `"light"`/`"dark"`. `None` when unset or
/// unrecognized, so the caller can fall back to the OS preference.
pub fn load_theme(backend: &impl StorageBackend) -> Option<Theme> {
    match backend.get(THEME_KEY)?.as_str() {
        "dark" => Some(Theme::Dark),
        "light" => Some(Theme::Light),
        _ => None,
    }
}

pub fn save_theme(backend: &impl StorageBackend, theme: Theme) {
    backend.set(THEME_KEY, theme.as_str());
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::StorageBackend;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory backend standing in for localStorage.
    #[derive(Default)]
    pub struct MemoryStorage(RefCell<HashMap<String, String>>);

    impl MemoryStorage {
        pub fn seed(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.set(key, value);
            storage
        }
    }

    impl StorageBackend for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::MemoryStorage;
    use super::*;

    #[test]
    fn test_favorites_toggle_is_idempotent_under_double_invocation() {
        let mut favorites = Favorites::default();
        favorites.toggle(7);
        assert!(favorites.contains(7));
        favorites.toggle(7);
        assert!(!favorites.contains(7));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_favorites_survive_reload() {
        let backend = MemoryStorage::default();

        let mut favorites = Favorites::load(&backend);
        favorites.toggle(3);
        favorites.toggle(11);
        favorites.save(&backend);

        // Simulated reload: re-read from the same backend.
        let reloaded = Favorites::load(&backend);
        assert_eq!(reloaded, favorites);
        assert!(reloaded.contains(3));
        assert!(reloaded.contains(11));
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn test_corrupted_favorites_load_as_empty() {
        let backend = MemoryStorage::seed(FAVORITES_KEY, "{not json");
        assert!(Favorites::load(&backend).is_empty());
    }

    #[test]
    fn test_plan_round_trips_through_storage() {
        let backend = MemoryStorage::default();

        let mut plan = PlanMap::new();
        plan.insert("2026-02-20".to_string(), 5);
        plan.insert("2026-03-13".to_string(), 12);
        save_plan(&backend, &plan);

        assert_eq!(load_plan(&backend), plan);
    }

    #[test]
    fn test_corrupted_plan_loads_as_empty() {
        let backend = MemoryStorage::seed(PLAN_KEY, "[1,2,3");
        assert!(load_plan(&backend).is_empty());
    }

    #[test]
    fn test_theme_stored_as_raw_string() {
        let backend = MemoryStorage::default();

        assert_eq!(load_theme(&backend), None);

        save_theme(&backend, Theme::Dark);
        assert_eq!(backend.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(load_theme(&backend), Some(Theme::Dark));

        save_theme(&backend, Theme::Dark.toggled());
        assert_eq!(load_theme(&backend), Some(Theme::Light));
    }

    #[test]
    fn test_unrecognized_theme_value_falls_back() {
        let backend = MemoryStorage::seed(THEME_KEY, "solarized");
        assert_eq!(load_theme(&backend), None);
    }
}
