//! Browse Page
//!
//! Filterable, sortable listing of every fish fry in the dataset.

use leptos::prelude::*;

use crate::components::FishFryCard;
use crate::context::use_app_context;
use crate::dates::LENTEN_FRIDAYS;
use crate::filters::{distance_from, filter_and_sort, BrowseFilters, SortMode};
use crate::geo::request_position;
use crate::store::use_app_store;
use crate::store::AppStateStoreFields;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (query, set_query) = signal(String::new());
    let (dine_in, set_dine_in) = signal(false);
    let (carry_out, set_carry_out) = signal(false);
    let (drive_through, set_drive_through) = signal(false);
    let (date, set_date) = signal::<Option<String>>(None);
    let (favorites_only, set_favorites_only) = signal(false);
    let (sort, set_sort) = signal(SortMode::Name);
    let (position, set_position) = signal::<Option<(f64, f64)>>(None);

    let results = Memo::new(move |_| {
        let filters = BrowseFilters {
            query: query.get(),
            dine_in: dine_in.get(),
            carry_out: carry_out.get(),
            drive_through: drive_through.get(),
            date: date.get(),
            favorites_only: favorites_only.get(),
        };
        store.entries().with(|entries| {
            ctx.favorites
                .with(|favorites| filter_and_sort(entries, &filters, favorites, sort.get(), position.get()))
        })
    });

    // One-shot device position request; denial surfaces as an alert.
    let sort_by_distance = move |_| {
        if position.get_untracked().is_some() {
            set_sort.set(SortMode::Distance);
            return;
        }
        request_position(
            move |lat, lon| {
                set_position.set(Some((lat, lon)));
                set_sort.set(SortMode::Distance);
            },
            |message| {
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .alert_with_message(&format!("Could not get your location: {message}"));
                }
            },
        );
    };

    view! {
        <div>
            <h2 class="mb-3">"Browse Fish Fries"</h2>

            {move || store.load_error().get().map(|error| view! {
                <div class="alert alert-danger">"Failed to load: " {error}</div>
            })}

            <Show when=move || store.loading().get()>
                <div class="text-center py-5">
                    <div class="spinner-border text-primary" role="status">
                        <span class="visually-hidden">"Loading…"</span>
                    </div>
                    <p class="text-muted mt-2 small">"Loading…"</p>
                </div>
            </Show>

            <Show when=move || !store.loading().get() && store.load_error().get().is_none()>
                // Filter controls
                <div class="card mb-3">
                    <div class="card-body py-2">
                        <div class="row g-2 align-items-center">
                            <div class="col-12 col-md-5">
                                <input
                                    type="search"
                                    class="form-control form-control-sm"
                                    placeholder="Search name, city, fish, sides…"
                                    prop:value=move || query.get()
                                    on:input=move |ev| set_query.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="col-auto">
                                <select
                                    class="form-select form-select-sm"
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        set_date.set((!value.is_empty()).then_some(value));
                                    }
                                >
                                    <option value="">"Any Friday"</option>
                                    {LENTEN_FRIDAYS
                                        .iter()
                                        .map(|friday| view! {
                                            <option value=friday.value>{friday.label}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="col-auto form-check form-check-inline ms-2">
                                <input
                                    class="form-check-input"
                                    type="checkbox"
                                    id="filter-dine-in"
                                    prop:checked=move || dine_in.get()
                                    on:change=move |_| set_dine_in.update(|v| *v = !*v)
                                />
                                <label class="form-check-label small" for="filter-dine-in">"Dine-in"</label>
                            </div>
                            <div class="col-auto form-check form-check-inline">
                                <input
                                    class="form-check-input"
                                    type="checkbox"
                                    id="filter-carry-out"
                                    prop:checked=move || carry_out.get()
                                    on:change=move |_| set_carry_out.update(|v| *v = !*v)
                                />
                                <label class="form-check-label small" for="filter-carry-out">"Carry-out"</label>
                            </div>
                            <div class="col-auto form-check form-check-inline">
                                <input
                                    class="form-check-input"
                                    type="checkbox"
                                    id="filter-drive-through"
                                    prop:checked=move || drive_through.get()
                                    on:change=move |_| set_drive_through.update(|v| *v = !*v)
                                />
                                <label class="form-check-label small" for="filter-drive-through">
                                    "Drive-through"
                                </label>
                            </div>
                            <div class="col-auto form-check form-check-inline">
                                <input
                                    class="form-check-input"
                                    type="checkbox"
                                    id="filter-favorites"
                                    prop:checked=move || favorites_only.get()
                                    on:change=move |_| set_favorites_only.update(|v| *v = !*v)
                                />
                                <label class="form-check-label small" for="filter-favorites">
                                    "🐟 Favorites"
                                </label>
                            </div>
                            <div class="col-auto ms-auto">
                                <div class="btn-group btn-group-sm" role="group" aria-label="Sort">
                                    <button
                                        type="button"
                                        class=move || {
                                            if sort.get() == SortMode::Name { "btn btn-primary" } else { "btn btn-outline-primary" }
                                        }
                                        on:click=move |_| set_sort.set(SortMode::Name)
                                    >
                                        "A–Z"
                                    </button>
                                    <button
                                        type="button"
                                        class=move || {
                                            if sort.get() == SortMode::Distance { "btn btn-primary" } else { "btn btn-outline-primary" }
                                        }
                                        on:click=sort_by_distance
                                    >
                                        "📍 Near me"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                // Results
                {move || {
                    let entries = results.get();
                    if entries.is_empty() {
                        view! {
                            <p class="text-muted text-center py-4">
                                "No fish fries match the current filters."
                            </p>
                        }.into_any()
                    } else {
                        view! {
                            <div>
                                <For
                                    each=move || results.get()
                                    key=|entry| entry.fish_fry.id
                                    children=move |entry| {
                                        let for_distance = entry.clone();
                                        view! {
                                            <FishFryCard
                                                entry=entry
                                                distance=Signal::derive(move || {
                                                    distance_from(&for_distance, position.get())
                                                })
                                            />
                                        }
                                    }
                                />
                            </div>
                        }.into_any()
                    }
                }}

                <p class="text-muted small">
                    {move || format!("{} fish fries", results.get().len())}
                </p>
            </Show>
        </div>
    }
}
