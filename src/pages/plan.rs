//! Plan Page
//!
//! One fish fry per Lenten Friday: pick/change/remove per date, a map
//! of the planned stops, and share/print/clear actions. A `?plan=`
//! query parameter on load replaces the stored plan.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;

use crate::components::AddFishFryModal;
use crate::context::use_app_context;
use crate::data::fish_fry_index;
use crate::dates::{fish_fry_on_date, Friday, LENTEN_FRIDAYS};
use crate::geo::{coords_for, MKE_CENTER};
use crate::leaflet::{self, LeafletMap, Marker};
use crate::models::LocationWithFishFry;
use crate::share::{decode_plan, encode_plan, plan_param_from_url, share_or_copy, write_plan_to_url};
use crate::store::use_app_store;
use crate::store::AppStateStoreFields;

#[component]
pub fn PlanPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (active_date, set_active_date) = signal::<Option<String>>(None);

    // Restore a shared plan from the URL on first load.
    Effect::new(move |already_ran: Option<bool>| {
        if already_ran.unwrap_or(false) {
            return true;
        }
        if let Some(encoded) = plan_param_from_url() {
            ctx.import_plan(decode_plan(&encoded, &LENTEN_FRIDAYS));
        }
        true
    });

    let index = Memo::new(move |_| store.entries().with(|entries| fish_fry_index(entries)));

    // Fish fries on for the date currently being edited.
    let available = Memo::new(move |_| match active_date.get() {
        Some(date) => store.entries().with(|entries| {
            entries
                .iter()
                .filter(|entry| fish_fry_on_date(&entry.fish_fry, &date))
                .cloned()
                .collect::<Vec<_>>()
        }),
        None => Vec::new(),
    });

    // Plan entries that resolve against the dataset; unresolvable ids
    // render as absent.
    let planned_items = Memo::new(move |_| {
        let index = index.get();
        ctx.plan.with(|plan| {
            LENTEN_FRIDAYS
                .iter()
                .filter_map(|friday| {
                    let id = plan.get(friday.value)?;
                    let entry = index.get(id)?;
                    Some((*friday, entry.clone()))
                })
                .collect::<Vec<(Friday, LocationWithFishFry)>>()
        })
    });

    let plan_count = move || ctx.plan.with(|plan| plan.len());

    let handle_share = move |_| {
        let encoded = ctx.plan.with_untracked(|plan| encode_plan(plan, &LENTEN_FRIDAYS));
        let Some(share_url) = write_plan_to_url(&encoded) else {
            return;
        };
        let lines: Vec<String> = planned_items
            .get_untracked()
            .iter()
            .map(|(friday, entry)| format!("{}: {}", friday.label, entry.name()))
            .collect();
        spawn_local(async move {
            share_or_copy("My Fish Fry Plan — Lent 2026", &lines.join("\n"), &share_url).await;
        });
    };

    let handle_print = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    // ── map of planned stops ─────────────────────────────────────────

    let map_ref = NodeRef::<Div>::new();
    let map_cell: Rc<RefCell<Option<LeafletMap>>> = Rc::new(RefCell::new(None));
    let markers: Rc<RefCell<Vec<Marker>>> = Rc::new(RefCell::new(Vec::new()));

    let planned_coords = move || {
        planned_items
            .get_untracked()
            .iter()
            .filter_map(|(_, entry)| coords_for(entry.id()))
            .collect::<Vec<_>>()
    };

    {
        let map_cell = Rc::clone(&map_cell);
        let markers = Rc::clone(&markers);
        Effect::new(move |_| {
            let planned = planned_items.get();
            let Some(container) = map_ref.get() else {
                return;
            };
            if map_cell.borrow().is_none() {
                let element: web_sys::HtmlElement = container.into();
                *map_cell.borrow_mut() = Some(leaflet::init_map(&element, MKE_CENTER, 11.0));
            }
            let map_borrow = map_cell.borrow();
            let map = map_borrow.as_ref().expect("map initialized above");

            for marker in markers.borrow_mut().drain(..) {
                marker.remove();
            }
            let icon = leaflet::plan_pin_icon();
            let mut coords = Vec::new();
            for (friday, entry) in &planned {
                if let Some((lat, lon)) = coords_for(entry.id()) {
                    let popup = format!(
                        r#"<div style="min-width: 180px;"><div class="fw-bold">{}</div><div class="text-muted small">{}</div>{}</div>"#,
                        entry.name(),
                        friday.label,
                        entry
                            .fish_fry
                            .hours()
                            .map(|hours| format!(r#"<div class="small">{hours}</div>"#))
                            .unwrap_or_default(),
                    );
                    markers.borrow_mut().push(leaflet::add_marker(map, lat, lon, &icon, &popup));
                    coords.push((lat, lon));
                }
            }
            // The container may have just been unhidden; redraw tiles
            // at the correct size before fitting.
            map.invalidate_size();
            leaflet::fit_to_coords(map, &coords);
        });
    }

    // Before printing, refit so the print layout gets correct tiles.
    {
        let map_cell = Rc::clone(&map_cell);
        let handle = window_event_listener(ev::Custom::<web_sys::Event>::new("beforeprint"), move |_| {
            if let Some(map) = map_cell.borrow().as_ref() {
                map.invalidate_size();
                leaflet::fit_to_coords(map, &planned_coords());
            }
        });
        let handle = SendWrapper::new(handle);
        on_cleanup(move || handle.take().remove());
    }

    {
        let map_cell = SendWrapper::new(Rc::clone(&map_cell));
        on_cleanup(move || {
            if let Some(map) = map_cell.take().borrow_mut().take() {
                map.remove();
            }
        });
    }

    view! {
        <div>
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
                // Header
                <div class="d-flex align-items-center justify-content-between mb-3 no-print">
                    <h2 class="mb-0">"My Fish Fry Plan"</h2>
                    <Show when=move || { plan_count() > 0 }>
                        <div class="d-flex gap-2 align-items-center">
                            <button class="btn btn-sm btn-outline-primary" on:click=handle_share>
                                "Share"
                            </button>
                            <button class="btn btn-sm btn-outline-secondary" on:click=handle_print>
                                "Print"
                            </button>
                            <button
                                class="btn btn-sm btn-link text-danger p-0"
                                on:click=move |_| ctx.clear_plan()
                            >
                                "Clear plan"
                            </button>
                        </div>
                    </Show>
                </div>

                // Print header
                <div class="print-only mb-3">
                    <h2>"My Fish Fry Plan — Lent 2026"</h2>
                </div>

                // Date list
                <ul class="list-group mb-4">
                    {LENTEN_FRIDAYS
                        .iter()
                        .map(|friday| {
                            let date = friday.value;
                            let chosen = Memo::new(move |_| {
                                let id = ctx.plan.with(|plan| plan.get(date).copied())?;
                                index.get().get(&id).cloned()
                            });
                            view! {
                                <li class="list-group-item d-flex align-items-center gap-2">
                                    <span class="fw-semibold" style="min-width: 4.5rem;">
                                        {friday.label}
                                    </span>
                                    <span class="flex-grow-1">
                                        {move || match chosen.get() {
                                            Some(entry) => {
                                                let city = entry.location.city.clone();
                                                let hours = entry.fish_fry.hours();
                                                view! {
                                                    <span>
                                                        <span class="fw-medium">{entry.name().to_string()}</span>
                                                        {city.map(|c| view! {
                                                            <span class="text-muted small ms-1">{format!("· {c}")}</span>
                                                        })}
                                                        {hours.map(|h| view! {
                                                            <span class="text-muted small ms-1">{format!("· {h}")}</span>
                                                        })}
                                                    </span>
                                                }.into_any()
                                            }
                                            None => view! {
                                                <em class="text-muted">"None"</em>
                                            }.into_any(),
                                        }}
                                    </span>
                                    <div class="d-flex gap-1 no-print">
                                        <button
                                            class="btn btn-sm btn-outline-primary"
                                            on:click=move |_| set_active_date.set(Some(date.to_string()))
                                        >
                                            {move || if chosen.get().is_some() { "Change" } else { "Add" }}
                                        </button>
                                        <Show when=move || chosen.get().is_some()>
                                            <button
                                                class="btn btn-sm btn-outline-danger"
                                                aria-label="Remove"
                                                on:click=move |_| ctx.remove_plan_entry(date)
                                            >
                                                "✕"
                                            </button>
                                        </Show>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                // Map — visible on screen and in print
                <div
                    class="mb-4"
                    class:d-none=move || planned_items.get().is_empty()
                >
                    <div node_ref=map_ref style="height: 400px; border-radius: 8px;"></div>
                </div>

                // Empty state
                <Show when=move || plan_count() == 0>
                    <div class="text-center text-muted py-4 no-print">
                        <p class="mb-1">"No fish fries planned yet."</p>
                        <p class="small">
                            "Click \"Add\" next to a Friday to pick a fish fry for that date."
                        </p>
                    </div>
                </Show>

                <AddFishFryModal
                    active_date=active_date
                    set_active_date=set_active_date
                    available=available
                />
            </Show>
        </div>
    }
}
