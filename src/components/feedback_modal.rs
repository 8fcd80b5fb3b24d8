//! Feedback Modal
//!
//! Posts `{type, details}` as JSON to the Formspree relay. Success and
//! failure are binary; a failed submission shows inline error text and
//! the user may resubmit manually.

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

const FORMSPREE_URL: &str = "https://formspree.io/f/xgolnaav";

#[derive(Clone, Copy, PartialEq, Eq)]
enum FeedbackType {
    MissingLocation,
    IncorrectInfo,
    Other,
}

impl FeedbackType {
    const ALL: [FeedbackType; 3] =
        [FeedbackType::MissingLocation, FeedbackType::IncorrectInfo, FeedbackType::Other];

    fn value(self) -> &'static str {
        match self {
            FeedbackType::MissingLocation => "missing-location",
            FeedbackType::IncorrectInfo => "incorrect-info",
            FeedbackType::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FeedbackType::MissingLocation => "Missing location",
            FeedbackType::IncorrectInfo => "Incorrect information",
            FeedbackType::Other => "Other",
        }
    }

    fn from_value(value: &str) -> Self {
        match value {
            "incorrect-info" => FeedbackType::IncorrectInfo,
            "other" => FeedbackType::Other,
            _ => FeedbackType::MissingLocation,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            FeedbackType::MissingLocation => {
                "e.g. St. Patrick Church on N. 4th St — fish fry every Friday 4–7 pm"
            }
            FeedbackType::IncorrectInfo => {
                "e.g. The hours for St. Mary's are listed as 4–7 pm but they close at 8 pm"
            }
            FeedbackType::Other => "Describe your feedback…",
        }
    }
}

#[derive(Serialize)]
struct FeedbackPayload<'a> {
    #[serde(rename = "type")]
    feedback_type: &'a str,
    details: &'a str,
}

async fn submit_feedback(feedback_type: FeedbackType, details: &str) -> Result<(), String> {
    let payload = FeedbackPayload { feedback_type: feedback_type.label(), details };
    let response = Request::post(FORMSPREE_URL)
        .header("Accept", "application/json")
        .json(&payload)
        .map_err(|_| "Could not send feedback. Check your connection and try again.".to_string())?
        .send()
        .await
        .map_err(|_| "Could not send feedback. Check your connection and try again.".to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err("Something went wrong. Please try again.".to_string())
    }
}

#[component]
pub fn FeedbackModal(visible: ReadSignal<bool>, set_visible: WriteSignal<bool>) -> impl IntoView {
    let (feedback_type, set_feedback_type) = signal(FeedbackType::MissingLocation);
    let (details, set_details) = signal(String::new());
    let (submitted, set_submitted) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let close = move || {
        set_visible.set(false);
        set_feedback_type.set(FeedbackType::MissingLocation);
        set_details.set(String::new());
        set_submitted.set(false);
        set_error.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = details.get();
        if text.trim().is_empty() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match submit_feedback(feedback_type.get_untracked(), &text).await {
                Ok(()) => set_submitted.set(true),
                Err(message) => set_error.set(Some(message)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Show when=move || visible.get()>
            <div class="modal fade show d-block" tabindex="-1" style="background: rgba(0,0,0,0.5);">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Submit Feedback"</h5>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| close()
                            ></button>
                        </div>

                        <div class="modal-body">
                            {move || if submitted.get() {
                                view! {
                                    <div class="text-center py-3">
                                        <div class="fs-1 mb-2">"✅"</div>
                                        <p class="mb-1 fw-semibold">"Thanks for the feedback!"</p>
                                        <p class="text-muted small mb-0">
                                            "We'll review it and update the site if needed."
                                        </p>
                                    </div>
                                }.into_any()
                            } else {
                                view! {
                                    <form id="feedback-form" on:submit=on_submit>
                                        <p class="text-muted small mb-3">
                                            "Spot a missing location or an error? Let us know and we'll get it fixed."
                                        </p>

                                        <div class="mb-3">
                                            <label for="feedback-type" class="form-label fw-semibold">
                                                "What kind of feedback?"
                                            </label>
                                            <select
                                                id="feedback-type"
                                                class="form-select"
                                                prop:value=move || feedback_type.get().value()
                                                on:change=move |ev| {
                                                    set_feedback_type
                                                        .set(FeedbackType::from_value(&event_target_value(&ev)));
                                                }
                                            >
                                                {FeedbackType::ALL
                                                    .iter()
                                                    .map(|ft| view! { <option value=ft.value()>{ft.label()}</option> })
                                                    .collect_view()}
                                            </select>
                                        </div>

                                        <div class="mb-3">
                                            <label for="feedback-details" class="form-label fw-semibold">
                                                "Details"
                                            </label>
                                            <textarea
                                                id="feedback-details"
                                                class="form-control"
                                                rows="4"
                                                placeholder=move || feedback_type.get().placeholder()
                                                prop:value=move || details.get()
                                                on:input=move |ev| set_details.set(event_target_value(&ev))
                                                required
                                            ></textarea>
                                        </div>

                                        {move || error.get().map(|message| view! {
                                            <p class="text-danger small mb-0">{message}</p>
                                        })}
                                    </form>
                                }.into_any()
                            }}
                        </div>

                        <div class="modal-footer">
                            {move || if submitted.get() {
                                view! {
                                    <button type="button" class="btn btn-secondary" on:click=move |_| close()>
                                        "Close"
                                    </button>
                                }.into_any()
                            } else {
                                view! {
                                    <button type="button" class="btn btn-secondary" on:click=move |_| close()>
                                        "Cancel"
                                    </button>
                                    <button
                                        type="submit"
                                        form="feedback-form"
                                        class="btn btn-primary"
                                        disabled=move || details.get().trim().is_empty() || submitting.get()
                                    >
                                        {move || if submitting.get() { "Sending…" } else { "Send Feedback" }}
                                    </button>
                                }.into_any()
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
