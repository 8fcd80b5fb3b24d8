//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

const SOURCE_URL: &str = "https://www.jsonline.com/story/entertainment/dining/2026/02/18/church-and-nonprofit-fish-fries-in-milwaukee-area-for-lent-2026/88394289007/";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="text-center py-4">
            <h1 class="display-5 fw-bold mb-2">"MKE Church Fish Fries"</h1>
            <p class="lead text-muted mb-4">
                "Find a Lenten fish fry near you in the Milwaukee area — 2026 edition."
            </p>

            <div class="row g-3 justify-content-center">
                <div class="col-12 col-sm-6 col-md-4">
                    <A href="/browse" attr:class="card text-decoration-none text-body h-100">
                        <div class="card-body">
                            <div class="fs-1">"📋"</div>
                            <h5 class="card-title mt-2">"Browse"</h5>
                            <p class="card-text text-muted">
                                "View all fish fry locations with details on fish, sides, prices, and hours."
                            </p>
                        </div>
                    </A>
                </div>

                <div class="col-12 col-sm-6 col-md-4">
                    <A href="/map" attr:class="card text-decoration-none text-body h-100">
                        <div class="card-body">
                            <div class="fs-1">"🗺️"</div>
                            <h5 class="card-title mt-2">"Map"</h5>
                            <p class="card-text text-muted">
                                "See all locations on a map and find the fish fry closest to you."
                            </p>
                        </div>
                    </A>
                </div>

                <div class="col-12 col-sm-6 col-md-4">
                    <A href="/plan" attr:class="card text-decoration-none text-body h-100">
                        <div class="card-body">
                            <div class="fs-1">"📅"</div>
                            <h5 class="card-title mt-2">"Plan"</h5>
                            <p class="card-text text-muted">
                                "Pick a fish fry for each Friday of Lent and share your plan."
                            </p>
                        </div>
                    </A>
                </div>
            </div>

            <p class="text-muted mt-5 small">
                "Lenten Fridays 2026: Feb 20 & 27, Mar 6, 13, 20, 27, Apr 3"
            </p>
            <p class="text-muted small">
                "Data sourced from "
                <a href=SOURCE_URL target="_blank" rel="noreferrer" class="text-muted">
                    "Milwaukee Journal Sentinel"
                </a>
            </p>
        </div>
    }
}
