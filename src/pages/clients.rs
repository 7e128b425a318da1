//! Pending client verification list.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::components::request_table::{RequestRow, RequestTable};
use crate::net::api::Api;
use crate::net::types::ClientVerifyRequest;
use crate::state::requests::RequestsState;

fn request_rows(requests: &[ClientVerifyRequest]) -> Vec<RequestRow> {
    requests
        .iter()
        .map(|request| {
            RequestRow::new(
                &request.id,
                &request.first_name,
                &request.last_name,
                request.contact_email(),
            )
        })
        .collect()
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let selection = expect_context::<RwSignal<RequestsState>>();
    let navigate = use_navigate();

    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let items = RwSignal::new(Vec::<ClientVerifyRequest>::new());

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.list_client_requests().await {
                Ok(requests) => items.set(requests),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &api;

    let on_show = move |id: String| {
        let Some(request) = items.get_untracked().into_iter().find(|r| r.id == id) else {
            return;
        };
        selection.update(|state| state.selected_client = Some(request));
        navigate("/clientdetails", NavigateOptions::default());
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
            <div class="list-page">
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="list-page__banner">
                    <h2>"Total Pending Clients:"</h2>
                    <p>{move || format!("{} Clients", items.get().len())}</p>
                </div>

                {
                    let on_show = on_show.clone();
                    move || {
                        view! { <RequestTable rows=request_rows(&items.get()) on_show=on_show.clone()/> }
                    }
                }
            </div>
        </Show>
    }
}
