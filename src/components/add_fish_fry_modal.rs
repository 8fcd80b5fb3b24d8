//! Add Fish Fry Modal
//!
//! Date-scoped picker for the Plan page: lists the fish fries on for
//! the active Friday, with a favorites filter, expandable details, and
//! the current selection highlighted.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dates::friday_label;
use crate::models::LocationWithFishFry;

#[component]
pub fn AddFishFryModal(
    /// The Friday being edited; `None` hides the modal.
    active_date: ReadSignal<Option<String>>,
    set_active_date: WriteSignal<Option<String>>,
    /// Fish fries on for the active date.
    #[prop(into)] available: Signal<Vec<LocationWithFishFry>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (expanded_id, set_expanded_id) = signal::<Option<u32>>(None);
    let (fav_only, set_fav_only) = signal(false);

    // Reset the per-open state whenever the modal targets a new date.
    Effect::new(move |_| {
        let _ = active_date.get();
        set_expanded_id.set(None);
        set_fav_only.set(false);
    });

    let current_id = move || {
        active_date
            .get()
            .and_then(|date| ctx.plan.with(|plan| plan.get(&date).copied()))
    };

    let fav_count = move || {
        let favorites = ctx.favorites.get();
        available.get().iter().filter(|entry| favorites.contains(entry.id())).count()
    };

    let visible = move || {
        let entries = available.get();
        if fav_only.get() {
            let favorites = ctx.favorites.get();
            entries.into_iter().filter(|entry| favorites.contains(entry.id())).collect()
        } else {
            entries
        }
    };

    let select = move |fish_fry_id: u32| {
        if let Some(date) = active_date.get_untracked() {
            ctx.set_plan_entry(&date, fish_fry_id);
        }
        set_active_date.set(None);
    };

    view! {
        <Show when=move || active_date.get().is_some()>
            <div class="modal fade show d-block" tabindex="-1" style="background: rgba(0,0,0,0.5);">
                <div class="modal-dialog modal-dialog-scrollable">
                    <div class="modal-content">
                        <div class="modal-header flex-column align-items-start gap-2 pb-2">
                            <div class="d-flex w-100 align-items-center">
                                <h5 class="modal-title mb-0">
                                    {move || {
                                        let date = active_date.get().unwrap_or_default();
                                        format!("Choose a fish fry — {}", friday_label(&date))
                                    }}
                                </h5>
                                <button
                                    type="button"
                                    class="btn-close ms-auto"
                                    aria-label="Close"
                                    on:click=move |_| set_active_date.set(None)
                                ></button>
                            </div>
                            <Show when=move || { fav_count() > 0 }>
                                <div class="btn-group btn-group-sm w-100" role="group" aria-label="Filter fish fries">
                                    <button
                                        type="button"
                                        class=move || {
                                            if fav_only.get() { "btn btn-outline-primary" } else { "btn btn-primary" }
                                        }
                                        on:click=move |_| set_fav_only.set(false)
                                    >
                                        {move || format!("All ({})", available.get().len())}
                                    </button>
                                    <button
                                        type="button"
                                        class=move || {
                                            if fav_only.get() { "btn btn-primary" } else { "btn btn-outline-primary" }
                                        }
                                        on:click=move |_| set_fav_only.set(true)
                                    >
                                        {move || format!("🐟 Favorites ({})", fav_count())}
                                    </button>
                                </div>
                            </Show>
                        </div>
                        <div class="modal-body p-0">
                            {move || {
                                let entries = visible();
                                if entries.is_empty() {
                                    view! {
                                        <p class="text-muted p-3 mb-0">
                                            "No fish fries available for this date."
                                        </p>
                                    }.into_any()
                                } else {
                                    view! {
                                        <ul class="list-group list-group-flush">
                                            <For
                                                each=move || visible()
                                                key=|entry| entry.fish_fry.id
                                                children=move |entry| {
                                                    view! {
                                                        <ModalRow
                                                            entry=entry
                                                            current_id=Signal::derive(current_id)
                                                            expanded_id=expanded_id
                                                            set_expanded_id=set_expanded_id
                                                            on_select=select
                                                        />
                                                    }
                                                }
                                            />
                                        </ul>
                                    }.into_any()
                                }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ModalRow(
    entry: LocationWithFishFry,
    current_id: Signal<Option<u32>>,
    expanded_id: ReadSignal<Option<u32>>,
    set_expanded_id: WriteSignal<Option<u32>>,
    on_select: impl Fn(u32) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let fish_fry_id = entry.fish_fry.id;
    let name = entry.location.name.clone();
    let city = entry.location.city.clone();
    let address = entry.location.address.clone();
    let website = entry.location.website.clone();
    let ff = entry.fish_fry.clone();
    let hours = ff.hours();

    let is_selected = move || current_id.get() == Some(fish_fry_id);
    let is_expanded = move || expanded_id.get() == Some(fish_fry_id);

    view! {
        <li
            class=move || {
                if is_selected() {
                    "list-group-item list-group-item-action list-group-item-primary"
                } else {
                    "list-group-item list-group-item-action"
                }
            }
            style="cursor: pointer;"
            on:click=move |_| on_select(fish_fry_id)
        >
            <div class="d-flex align-items-start gap-2">
                <div class="flex-grow-1">
                    <div class="d-flex align-items-center gap-1 flex-wrap">
                        <span class="fw-semibold">{name}</span>
                        <Show when=is_selected>
                            <span class="badge bg-primary ms-1" style="font-size: 0.65rem;">"Selected"</span>
                        </Show>
                    </div>
                    <div class="text-muted small mt-1" style="line-height: 1.6;">
                        {city.as_ref().map(|c| format!("{c}, WI"))}
                        {hours.as_ref().map(|h| format!(" · {h}"))}
                        {ff.price_adult.map(|price| format!(" · ${price} adult"))}
                    </div>
                    <div class="d-flex flex-wrap gap-1 mt-1">
                        <Show when={let dine_in = ff.dine_in; move || dine_in}>
                            <span class="badge bg-primary" style="font-size: 0.65rem;">"Dine-in"</span>
                        </Show>
                        <Show when={let carry_out = ff.carry_out; move || carry_out}>
                            <span class="badge bg-success" style="font-size: 0.65rem;">"Carry-out"</span>
                        </Show>
                        <Show when={let drive_through = ff.drive_through; move || drive_through}>
                            <span class="badge bg-warning text-dark" style="font-size: 0.65rem;">
                                "Drive-through"
                            </span>
                        </Show>
                    </div>
                </div>

                // Expand toggle stops propagation so it doesn't select.
                <button
                    class="btn btn-sm btn-link p-0 text-muted flex-shrink-0"
                    style="font-size: 0.75rem; line-height: 1;"
                    title=move || if is_expanded() { "Show less" } else { "Show more" }
                    aria-expanded=move || is_expanded().to_string()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_expanded_id.set(if is_expanded() { None } else { Some(fish_fry_id) });
                    }
                >
                    {move || if is_expanded() { "▲" } else { "▼" }}
                </button>
            </div>

            <Show when=is_expanded>
                <div
                    class="mt-2 pt-2 small border-top"
                    on:click=move |ev| ev.stop_propagation()
                >
                    {ff.fish_types.clone().map(|fish| view! {
                        <div><span class="text-muted">"Fish: "</span>{fish}</div>
                    })}
                    {ff.sides.clone().map(|sides| view! {
                        <div><span class="text-muted">"Sides: "</span>{sides}</div>
                    })}
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
                    {website.clone().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="d-block"
                            on:click=move |ev| ev.stop_propagation()
                        >
                            "Website ↗"
                        </a>
                    })}
                    <button
                        class=move || {
                            if is_selected() { "btn btn-sm mt-2 w-100 btn-primary" } else { "btn btn-sm mt-2 w-100 btn-outline-primary" }
                        }
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_select(fish_fry_id);
                        }
                    >
                        {move || if is_selected() { "✓ Selected" } else { "Pick this fish fry" }}
                    </button>
                </div>
            </Show>
        </li>
    }
}
