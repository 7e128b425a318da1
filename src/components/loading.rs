//! Full-area loading spinner shown while a page fetches its data.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <span class="loading__spinner" aria-label="Loading"></span>
        </div>
    }
}
