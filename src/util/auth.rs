//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the login route apply mirrored redirect behavior,
//! decided synchronously from current session state. Token validity is
//! never verified up front; an invalid token is discovered when the first
//! authenticated call comes back 401.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionStore};

/// True when a protected view must bounce to `/login`.
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.is_logged_in
}

/// True when the login view must bounce to the authenticated landing page.
pub fn should_redirect_authed(session: &Session) -> bool {
    session.is_logged_in
}

/// Redirect to `/login` whenever the session is (or becomes)
/// unauthenticated.
pub fn install_unauth_redirect<F>(store: &SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let session = store.watch();
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", replace());
        }
    });
}

/// Redirect to `/` whenever a session is already (or becomes) established.
pub fn install_authed_redirect<F>(store: &SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let session = store.watch();
    Effect::new(move || {
        if should_redirect_authed(&session.get()) {
            navigate("/", replace());
        }
    });
}

/// History-replacing navigation, so Back does not reenter the guarded page.
fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}
