//! Admin login page with client-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only unauthenticated route. Validation runs before any network
//! call; backend rejections display inline. A successful login establishes
//! the session, which the authed-redirect guard turns into navigation to
//! the landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::Api;
use crate::state::session::SessionStore;
use crate::util::auth::install_authed_redirect;
use crate::util::validate::{LoginFormErrors, validate_login_form};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    install_authed_redirect(&session, navigate);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(LoginFormErrors::default());
    let server_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_form(&email.get(), &password.get()) {
            Ok(credentials) => {
                field_errors.set(LoginFormErrors::default());
                credentials
            }
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        busy.set(true);
        server_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match api.login_admin(&credentials).await {
                    Ok(identity) => {
                        // The authed-redirect guard picks the change up.
                        session.establish(
                            &identity.id,
                            &identity.name,
                            &identity.email,
                            &identity.token,
                        );
                    }
                    Err(err) => server_error.set(err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session, credentials);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <form class="login-form" on:submit=on_submit>
                    <h1 class="login-card__title">"Hi Admin 👋"</h1>

                    <label class="login-form__label" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        class="login-form__input"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || field_errors.get().email.is_some()>
                        <p class="login-form__error">
                            {move || field_errors.get().email.unwrap_or_default()}
                        </p>
                    </Show>

                    <label class="login-form__label" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        class="login-form__input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || field_errors.get().password.is_some()>
                        <p class="login-form__error">
                            {move || field_errors.get().password.unwrap_or_default()}
                        </p>
                    </Show>

                    <Show when=move || !server_error.get().is_empty()>
                        <p class="login-form__error login-form__error--server">
                            {move || server_error.get()}
                        </p>
                    </Show>

                    <button class="login-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
