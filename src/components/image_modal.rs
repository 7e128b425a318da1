//! Full-size document image overlay.

use leptos::prelude::*;

/// Click-away overlay showing one document at full size.
#[component]
pub fn ImageModal(src: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="image-modal" on:click=move |_| on_close.run(())>
            <div class="image-modal__body" on:click=move |ev| ev.stop_propagation()>
                <button class="image-modal__close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <img src=src alt="Document"/>
            </div>
        </div>
    }
}
