//! Blocking confirmation dialog.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    title: &'static str,
    message: &'static str,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="confirm-modal">
            <div class="confirm-modal__card">
                <h2 class="confirm-modal__title">{title}</h2>
                <p class="confirm-modal__message">{message}</p>
                <div class="confirm-modal__actions">
                    <button class="confirm-modal__cancel" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="confirm-modal__confirm" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
