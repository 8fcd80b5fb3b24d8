//! MKE Fish Fry App
//!
//! Root component: dataset load, persisted-state context, theme mirror,
//! and routing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::{FeedbackModal, NavBar};
use crate::context::AppContext;
use crate::data;
use crate::pages::{BrowsePage, GuidePage, HomePage, MapPage, PlanPage};
use crate::store::{self, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::default());
    let ctx = AppContext::load();

    provide_context(store);
    provide_context(ctx);

    // Mirror the theme into the document attribute Bootstrap reads.
    Effect::new(move |_| {
        let theme = ctx.theme.get();
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("data-bs-theme", theme.as_str());
            }
        }
    });

    // One-shot dataset load; failure becomes the page-level banner.
    spawn_local(async move {
        match data::load_dataset().await {
            Ok(entries) => {
                web_sys::console::log_1(
                    &format!("[APP] Loaded {} fish fries", entries.len()).into(),
                );
                store::store_set_entries(&store, entries);
            }
            Err(error) => {
                web_sys::console::error_1(&format!("[APP] Dataset load failed: {error}").into());
                store::store_set_load_error(&store, error.to_string());
            }
        }
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="text-muted">"Page not found."</p> }>
                <ParentRoute path=path!("/") view=Layout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("browse") view=BrowsePage />
                    <Route path=path!("map") view=MapPage />
                    <Route path=path!("plan") view=PlanPage />
                    <Route path=path!("guide") view=GuidePage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn Layout() -> impl IntoView {
    let (show_feedback, set_show_feedback) = signal(false);

    view! {
        <NavBar set_show_feedback=set_show_feedback />
        <main class="container py-3">
            <Outlet />
        </main>
        <FeedbackModal visible=show_feedback set_visible=set_show_feedback />
    }
}
