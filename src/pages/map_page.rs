//! Map Page
//!
//! Every location with known coordinates as a marker on a Leaflet map;
//! the handful without coordinates are listed underneath.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::geo::{coords_for, MKE_CENTER};
use crate::leaflet::{self, LeafletMap, Marker};
use crate::models::LocationWithFishFry;
use crate::store::use_app_store;
use crate::store::AppStateStoreFields;

fn popup_html(entry: &LocationWithFishFry) -> String {
    let mut html = format!(
        r#"<div style="min-width: 180px;"><div class="fw-bold">{}</div>"#,
        entry.location.name
    );
    if let Some(city) = &entry.location.city {
        html.push_str(&format!(r#"<div class="text-muted small">{city}, WI</div>"#));
    }
    if let Some(hours) = entry.fish_fry.hours() {
        html.push_str(&format!(r#"<div class="small">{hours}</div>"#));
    }
    if let Some(website) = &entry.location.website {
        html.push_str(&format!(
            r#"<a href="{website}" target="_blank" rel="noopener noreferrer">Website ↗</a>"#
        ));
    }
    html.push_str("</div>");
    html
}

#[component]
pub fn MapPage() -> impl IntoView {
    let store = use_app_store();

    let map_ref = NodeRef::<Div>::new();
    let map_cell: Rc<RefCell<Option<LeafletMap>>> = Rc::new(RefCell::new(None));
    let markers: Rc<RefCell<Vec<Marker>>> = Rc::new(RefCell::new(Vec::new()));

    let unmapped = Memo::new(move |_| {
        store.entries().with(|entries| {
            entries
                .iter()
                .filter(|entry| coords_for(entry.id()).is_none())
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    // Initialize the map once the container exists, then (re)place one
    // marker per located entry whenever the dataset settles.
    {
        let map_cell = Rc::clone(&map_cell);
        let markers = Rc::clone(&markers);
        Effect::new(move |_| {
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
            let icon = leaflet::default_pin_icon();
            store.entries().with(|entries| {
                for entry in entries {
                    if let Some((lat, lon)) = coords_for(entry.id()) {
                        let marker =
                            leaflet::add_marker(map, lat, lon, &icon, &popup_html(entry));
                        markers.borrow_mut().push(marker);
                    }
                }
            });
        });
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
            <h2 class="mb-3">"Fish Fry Map"</h2>

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

            <div
                node_ref=map_ref
                class="mb-3"
                style="height: 500px; border-radius: 8px;"
            ></div>

            {move || {
                let entries = unmapped.get();
                (!entries.is_empty()).then(|| view! {
                    <div class="mt-3">
                        <h6 class="text-muted">"Not yet on the map"</h6>
                        <ul class="list-group">
                            {entries
                                .iter()
                                .map(|entry| {
                                    let city = entry.location.city.clone();
                                    view! {
                                        <li class="list-group-item d-flex align-items-center gap-2">
                                            <span class="fw-semibold">{entry.location.name.clone()}</span>
                                            {city.map(|c| view! {
                                                <span class="text-muted small">{format!("{c}, WI")}</span>
                                            })}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                })
            }}
        </div>
    }
}
