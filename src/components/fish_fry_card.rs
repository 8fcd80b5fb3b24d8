//! Fish Fry Card
//!
//! One browse-list entry: summary row, service badges, favorite toggle,
//! and an expandable detail section.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::LocationWithFishFry;

#[component]
pub fn FishFryCard(
    entry: LocationWithFishFry,
    #[prop(into)] distance: Signal<Option<f64>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (expanded, set_expanded) = signal(false);

    let location_id = entry.id();
    let name = entry.location.name.clone();
    let city = entry.location.city.clone();
    let address = entry.location.address.clone();
    let website = entry.location.website.clone();
    let phone = entry.location.phone.clone();
    let venue_notes = entry.location.venue_notes.clone();
    let ff = entry.fish_fry.clone();
    let hours = ff.hours();

    let is_favorite = move || ctx.favorites.with(|favorites| favorites.contains(location_id));

    view! {
        <div class="card mb-2">
            <div class="card-body py-2">
                <div class="d-flex align-items-start gap-2">
                    <div class="flex-grow-1">
                        <div class="d-flex align-items-center gap-1 flex-wrap">
                            <span class="fw-semibold">{name}</span>
                            {move || distance.get().map(|miles| view! {
                                <span class="badge text-bg-light">{format!("{miles:.1} mi")}</span>
                            })}
                        </div>
                        <div class="text-muted small mt-1">
                            {city.as_ref().map(|c| format!("{c}, WI"))}
                            {hours.as_ref().map(|h| format!(" · {h}"))}
                            {ff.price_adult.map(|price| format!(" · ${price} adult"))}
                        </div>
                        <div class="d-flex flex-wrap gap-1 mt-1">
                            <Show when={let dine_in = ff.dine_in; move || dine_in}>
                                <span class="badge bg-primary">"Dine-in"</span>
                            </Show>
                            <Show when={let carry_out = ff.carry_out; move || carry_out}>
                                <span class="badge bg-success">"Carry-out"</span>
                            </Show>
                            <Show when={let drive_through = ff.drive_through; move || drive_through}>
                                <span class="badge bg-warning text-dark">"Drive-through"</span>
                            </Show>
                        </div>
                    </div>

                    <button
                        class="btn btn-sm btn-link p-0 flex-shrink-0 fs-5"
                        title=move || if is_favorite() { "Remove favorite" } else { "Add favorite" }
                        on:click=move |_| ctx.toggle_favorite(location_id)
                    >
                        {move || if is_favorite() { "🐟" } else { "♡" }}
                    </button>

                    <button
                        class="btn btn-sm btn-link p-0 text-muted flex-shrink-0"
                        title=move || if expanded.get() { "Show less" } else { "Show more" }
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| set_expanded.update(|open| *open = !*open)
                    >
                        {move || if expanded.get() { "▲" } else { "▼" }}
                    </button>
                </div>

                <Show when=move || expanded.get()>
                    <div class="mt-2 pt-2 small border-top">
                        {ff.fish_types.clone().map(|fish| view! {
                            <div><span class="text-muted">"Fish: "</span>{fish}</div>
                        })}
                        {ff.sides.clone().map(|sides| view! {
                            <div><span class="text-muted">"Sides: "</span>{sides}</div>
                        })}
                        {ff.drinks_included.clone().map(|drinks| view! {
                            <div><span class="text-muted">"Drinks included: "</span>{drinks}</div>
                        })}
                        {ff.drinks_purchase.clone().map(|drinks| view! {
                            <div><span class="text-muted">"Drinks for purchase: "</span>{drinks}</div>
                        })}
                        <Show when={let dessert = ff.dessert_included; move || dessert}>
                            <div><span class="text-muted">"Dessert included"</span></div>
                        </Show>
                        {(ff.price_child.is_some() || ff.price_senior.is_some() || ff.price_family.is_some())
                            .then(|| view! {
                                <div class="d-flex gap-3 flex-wrap">
                                    {ff.price_child.map(|p| view! {
                                        <span><span class="text-muted">"Child: "</span>{format!("${p}")}</span>
                                    })}
                                    {ff.price_senior.map(|p| view! {
                                        <span><span class="text-muted">"Senior: "</span>{format!("${p}")}</span>
                                    })}
                                    {ff.price_family.map(|p| view! {
                                        <span><span class="text-muted">"Family: "</span>{format!("${p}")}</span>
                                    })}
                                </div>
                            })}
                        {ff.price_notes.clone().map(|notes| view! {
                            <div class="text-muted fst-italic">{notes}</div>
                        })}
                        {ff.description.clone().map(|description| view! {
                            <div class="text-muted mt-1">{description}</div>
                        })}
                        {address.clone().map(|addr| view! { <div class="text-muted">{addr}</div> })}
                        {phone.clone().map(|phone| view! { <div class="text-muted">{phone}</div> })}
                        {venue_notes.clone().map(|notes| view! { <div class="text-muted">{notes}</div> })}
                        {website.clone().map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="d-block">
                                "Website ↗"
                            </a>
                        })}
                    </div>
                </Show>
            </div>
        </div>
    }
}
