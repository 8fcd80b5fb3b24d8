//! Navigation Bar
//!
//! Sticky top bar with brand, page links, theme toggle, and the
//! feedback modal trigger.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::storage::Theme;

#[component]
pub fn NavBar(set_show_feedback: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let (nav_open, set_nav_open) = signal(false);

    let theme_icon = move || match ctx.theme.get() {
        Theme::Dark => "☀️",
        Theme::Light => "🌙",
    };

    view! {
        <nav class="navbar navbar-expand-sm navbar-dark bg-primary sticky-top">
            <div class="container">
                <A attr:class="navbar-brand fw-bold" href="/">"🐟 MKE Fish Fries"</A>

                <button
                    class="navbar-toggler"
                    type="button"
                    aria-controls="mainNav"
                    aria-expanded=move || nav_open.get().to_string()
                    aria-label="Toggle navigation"
                    on:click=move |_| set_nav_open.update(|open| *open = !*open)
                >
                    <span class="navbar-toggler-icon"></span>
                </button>

                <div
                    class=move || {
                        if nav_open.get() { "collapse navbar-collapse show" } else { "collapse navbar-collapse" }
                    }
                    id="mainNav"
                >
                    <ul class="navbar-nav ms-auto align-items-sm-center">
                        <li class="nav-item" on:click=move |_| set_nav_open.set(false)>
                            <A attr:class="nav-link" href="/" exact=true>"Home"</A>
                        </li>
                        <li class="nav-item" on:click=move |_| set_nav_open.set(false)>
                            <A attr:class="nav-link" href="/browse">"Browse"</A>
                        </li>
                        <li class="nav-item" on:click=move |_| set_nav_open.set(false)>
                            <A attr:class="nav-link" href="/map">"Map"</A>
                        </li>
                        <li class="nav-item" on:click=move |_| set_nav_open.set(false)>
                            <A attr:class="nav-link" href="/plan">"Plan"</A>
                        </li>
                        <li class="nav-item" on:click=move |_| set_nav_open.set(false)>
                            <A attr:class="nav-link" href="/guide">"Guide"</A>
                        </li>
                        <li class="nav-item">
                            <button
                                class="btn btn-link nav-link"
                                on:click=move |_| {
                                    set_nav_open.set(false);
                                    set_show_feedback.set(true);
                                }
                            >
                                "Feedback"
                            </button>
                        </li>
                        <li class="nav-item">
                            <button
                                class="btn btn-link nav-link"
                                title="Toggle dark mode"
                                on:click=move |_| ctx.toggle_theme()
                            >
                                {theme_icon}
                            </button>
                        </li>
                    </ul>
                </div>
            </div>
        </nav>
    }
}
