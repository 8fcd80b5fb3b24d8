//! Application Context
//!
//! The three persisted slots (favorites, plan, theme) as signals with
//! write-through saves, provided via the Leptos Context API. Single
//! writer, whole-value overwrites; no hidden globals.

use leptos::prelude::*;

use crate::storage::{
    self, BrowserStorage, Favorites, PlanMap, Theme,
};

/// App-wide persisted state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub favorites: RwSignal<Favorites>,
    pub plan: RwSignal<PlanMap>,
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    /// Loads all three slots from localStorage. A missing or corrupted
    /// value falls back to its default; the theme additionally falls
    /// back to the OS color-scheme preference.
    pub fn load() -> Self {
        let backend = BrowserStorage;
        let theme = storage::load_theme(&backend).unwrap_or_else(os_preferred_theme);
        Self {
            favorites: RwSignal::new(Favorites::load(&backend)),
            plan: RwSignal::new(storage::load_plan(&backend)),
            theme: RwSignal::new(theme),
        }
    }

    pub fn toggle_favorite(&self, location_id: u32) {
        self.favorites.update(|favorites| {
            favorites.toggle(location_id);
            favorites.save(&BrowserStorage);
        });
    }

    pub fn set_plan_entry(&self, date: &str, fish_fry_id: u32) {
        self.plan.update(|plan| {
            plan.insert(date.to_string(), fish_fry_id);
            storage::save_plan(&BrowserStorage, plan);
        });
    }

    pub fn remove_plan_entry(&self, date: &str) {
        self.plan.update(|plan| {
            plan.remove(date);
            storage::save_plan(&BrowserStorage, plan);
        });
    }

    pub fn clear_plan(&self) {
        self.plan.update(|plan| {
            plan.clear();
            storage::save_plan(&BrowserStorage, plan);
        });
    }

    /// Replaces the whole plan, e.g. from a shared URL.
    pub fn import_plan(&self, new_plan: PlanMap) {
        storage::save_plan(&BrowserStorage, &new_plan);
        self.plan.set(new_plan);
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|theme| {
            *theme = theme.toggled();
            storage::save_theme(&BrowserStorage, *theme);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

fn os_preferred_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}
