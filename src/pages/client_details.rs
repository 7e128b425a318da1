//! Client verification detail view: documents, remarks, and the decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the record the list page stashed in [`RequestsState`]. Visiting
//! this route without a selection bounces back to the list. A successful
//! decision returns to the dashboard.

#[cfg(test)]
#[path = "client_details_test.rs"]
mod client_details_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::document_grid::DocumentGrid;
use crate::components::image_modal::ImageModal;
use crate::net::api::Api;
use crate::net::types::{ClientDocuments, DecisionStatus, VerifyDecision};
use crate::state::requests::RequestsState;

/// Labeled document slots for a client, in display order.
fn document_slots(documents: &ClientDocuments) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("Front Side", documents.front_id.clone()),
        ("Back Side", documents.back_id.clone()),
    ]
}

#[component]
pub fn ClientDetailsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let selection = expect_context::<RwSignal<RequestsState>>();
    let navigate = use_navigate();

    let Some(client) = selection.get_untracked().selected_client else {
        let navigate = navigate.clone();
        Effect::new(move || navigate("/client", NavigateOptions::default()));
        return view! {
            <div class="details-page">
                <p>"No request selected, returning to the list..."</p>
            </div>
        }
        .into_any();
    };

    let remarks = RwSignal::new(String::new());
    let zoomed = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let request_id = client.id.clone();
    let decide = move |status: DecisionStatus| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let id = request_id.clone();
            leptos::task::spawn_local(async move {
                let decision = VerifyDecision::from_form(status, &remarks.get_untracked());
                match api.patch_request_status(&id, &decision).await {
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate, &request_id, status);
            busy.set(false);
        }
    };
    let decide_reject = decide.clone();

    let full_name = client.full_name();
    let email = client.contact_email().to_owned();
    let slots = document_slots(&client.client.verification_info);
    let on_zoom_close = Callback::new(move |()| zoomed.set(None));

    view! {
        <div class="details-page">
            <header class="details-page__header">
                <h1>"Client Details"</h1>
            </header>

            <section class="details-page__info">
                <h2>"Personal Information"</h2>
                <p class="details-page__name">{full_name}</p>
                <p class="details-page__email">{email}</p>
            </section>

            <section class="details-page__documents">
                <h2>"ID Document"</h2>
                <DocumentGrid slots=slots zoomed=zoomed/>
            </section>

            <section class="details-page__remarks">
                <h2>"Remarks"</h2>
                <textarea
                    placeholder="Enter your remarks here..."
                    prop:value=move || remarks.get()
                    on:input=move |ev| remarks.set(event_target_value(&ev))
                ></textarea>
            </section>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="details-page__actions">
                <button
                    class="details-page__accept"
                    disabled=move || busy.get()
                    on:click=move |_| decide(DecisionStatus::Accepted)
                >
                    "Accept"
                </button>
                <button
                    class="details-page__reject"
                    disabled=move || busy.get()
                    on:click=move |_| decide_reject(DecisionStatus::Rejected)
                >
                    "Reject"
                </button>
            </div>

            <Show when=move || zoomed.get().is_some()>
                <ImageModal src=zoomed.get().unwrap_or_default() on_close=on_zoom_close/>
            </Show>
        </div>
    }
    .into_any()
}
