//! Count summary card linking to a list view.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn StatCard(
    title: &'static str,
    value: String,
    /// Modifier class selecting the card's accent color.
    color: &'static str,
    href: &'static str,
) -> impl IntoView {
    view! {
        <A href=href>
            <div class=format!("stat-card {color}")>
                <h2 class="stat-card__title">{title}</h2>
                <p class="stat-card__value">{value}</p>
            </div>
        </A>
    }
}
