//! Global Application State Store
//!
//! The loaded dataset plus its load status, held in a reactive store
//! for the lifetime of the session. The dataset itself is immutable
//! once loaded.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::LocationWithFishFry;

#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Joined dataset, ordered by location name.
    pub entries: Vec<LocationWithFishFry>,
    /// True until the one-shot dataset fetch settles.
    pub loading: bool,
    /// Fetch/decode failure, rendered as a page-level banner.
    pub load_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            load_error: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Record a successful load.
pub fn store_set_entries(store: &AppStore, entries: Vec<LocationWithFishFry>) {
    store.entries().set(entries);
    store.loading().set(false);
}

/// Record a failed load.
pub fn store_set_load_error(store: &AppStore, error: String) {
    store.load_error().set(Some(error));
    store.loading().set(false);
}
