//! Guide Page
//!
//! Static list of other Milwaukee-area fish fry resources.

use leptos::prelude::*;

struct GuideLink {
    url: &'static str,
    name: &'static str,
    description: &'static str,
}

const LINKS: [GuideLink; 4] = [
    GuideLink {
        url: "https://milwaukeerecord.com/food-drink/its-official-again-today-is-friday-fish-fry-day-throughout-wisconsin/",
        name: "Milwaukee Record",
        description: "A deep dive into Wisconsin's beloved Friday fish fry tradition and why it's such an enduring part of local culture.",
    },
    GuideLink {
        url: "https://onmilwaukee.com/articles/milwaukeefishfryguide",
        name: "OnMilwaukee Fish Fry Guide",
        description: "OnMilwaukee's comprehensive guide to the best fish fries around the city, with picks and reviews.",
    },
    GuideLink {
        url: "https://madisonfishfry.com/",
        name: "Madison Fish Fry",
        description: "A directory of Lenten fish fries in and around Madison, Wisconsin — a great reference for the rest of the state.",
    },
    GuideLink {
        url: "https://catholicherald.org/local/2026-lenten-fish-fry-listing/",
        name: "Catholic Herald — 2026 Lenten Fish Fry Listing",
        description: "The Archdiocese of Milwaukee's official listing of parish fish fries for Lent 2026.",
    },
];

#[component]
pub fn GuidePage() -> impl IntoView {
    view! {
        <div>
            <h2 class="mb-1">"Fish Fry Guide"</h2>
            <p class="text-muted mb-4">
                "Other great Milwaukee-area fish fry resources around the web."
            </p>

            <ul class="list-group list-group-flush">
                {LINKS
                    .iter()
                    .map(|link| view! {
                        <li class="list-group-item px-0 py-3">
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="fw-semibold text-decoration-none"
                            >
                                {link.name} " ↗"
                            </a>
                            <p class="mb-0 mt-1 text-muted small">{link.description}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
