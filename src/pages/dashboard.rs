//! Dashboard page summarizing the pending verification workload.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches both pending lists
//! once on entry and renders count cards plus two summary charts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::charts::{DistributionPieChart, PendingBarChart};
use crate::components::loading::Loading;
use crate::components::stat_card::StatCard;
use crate::net::api::Api;

/// `"3 Clients"`-style stat-card caption.
fn count_caption(count: usize, noun: &str) -> String {
    format!("{count} {noun}")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let total_clients = RwSignal::new(0usize);
    let total_engineers = RwSignal::new(0usize);

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let outcome = async {
                let clients = api.list_client_requests().await?;
                let engineers = api.list_engineer_requests().await?;
                Ok::<_, crate::net::error::ApiError>((clients.len(), engineers.len()))
            }
            .await;
            match outcome {
                Ok((clients, engineers)) => {
                    total_clients.set(clients);
                    total_engineers.set(engineers);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &api;

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
            <div class="dashboard-page">
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="dashboard-page__cards">
                    {move || {
                        view! {
                            <StatCard
                                title="Total Clients"
                                value=count_caption(total_clients.get(), "Clients")
                                color="stat-card--deep"
                                href="/client"
                            />
                            <StatCard
                                title="Total Engineers"
                                value=count_caption(total_engineers.get(), "Engineers")
                                color="stat-card--teal"
                                href="/engineer"
                            />
                        }
                    }}
                </div>

                <div class="dashboard-page__charts">
                    <section class="chart-panel">
                        <h2 class="chart-panel__title">"Pending Verifications Distribution"</h2>
                        <p class="chart-panel__total">
                            "Total number pending: "
                            {move || (total_clients.get() + total_engineers.get()).to_string()}
                        </p>
                        {move || {
                            view! {
                                <PendingBarChart
                                    clients=total_clients.get()
                                    engineers=total_engineers.get()
                                />
                            }
                        }}
                    </section>
                    <section class="chart-panel">
                        <h2 class="chart-panel__title">"Verification Requests Distribution"</h2>
                        {move || {
                            view! {
                                <DistributionPieChart
                                    clients=total_clients.get()
                                    engineers=total_engineers.get()
                                />
                            }
                        }}
                    </section>
                </div>
            </div>
        </Show>
    }
}
