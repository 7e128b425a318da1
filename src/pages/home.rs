//! Authenticated layout: header, sidebar navigation, and logout flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the chrome around every protected route. It owns the route
//! guard for the authenticated area; child pages render through the router
//! outlet and can assume a session exists.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::confirm_modal::ConfirmModal;
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

const NAV_ITEMS: [(&str, &str, &str); 3] = [
    ("/", "Dashboard", "View your dashboard overview"),
    ("/client", "Clients", "Verify your clients"),
    ("/engineer", "Engineers", "Verify your engineers"),
];

/// Section title shown next to the product name, matching the sidebar
/// highlight: the dashboard matches exactly, other sections by prefix.
fn section_title(path: &str) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|(item_path, _, _)| {
            path == *item_path || (*item_path != "/" && path.starts_with(item_path))
        })
        .map_or("Dashboard", |(_, text, _)| text)
}

fn sidebar_nav() -> impl IntoView {
    NAV_ITEMS
        .iter()
        .map(|(path, text, description)| {
            view! {
                <A href=*path>
                    <div class="sidebar__link">
                        <span class="sidebar__link-text">{*text}</span>
                        <span class="sidebar__link-description">{*description}</span>
                    </div>
                </A>
            }
        })
        .collect_view()
}

#[component]
pub fn HomeLayout() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let location = use_location();

    install_unauth_redirect(&session, navigate);

    let session_signal = session.watch();
    let show_logout = RwSignal::new(false);
    let title = move || section_title(&location.pathname.get());

    let on_logout_cancel = Callback::new(move |()| show_logout.set(false));
    let logout_session = session.clone();
    // Teardown flips the session signal; the unauth guard handles the
    // navigation to /login.
    let on_logout_confirm = Callback::new(move |()| {
        show_logout.set(false);
        logout_session.teardown();
    });

    view! {
        <Show
            when=move || session_signal.get().is_logged_in
            fallback=|| {
                view! {
                    <div class="home-layout">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="home-layout">
                <header class="home-layout__header">
                    <div class="home-layout__titles">
                        <h1 class="home-layout__brand">"Field Talent Dashboard"</h1>
                        <span class="home-layout__divider" aria-hidden="true">"|"</span>
                        <h2 class="home-layout__section">{title}</h2>
                    </div>
                    <span class="home-layout__welcome">
                        "Welcome, " {move || session_signal.get().name}
                    </span>
                </header>
                <div class="home-layout__body">
                    <aside class="sidebar">
                        <nav class="sidebar__nav">{sidebar_nav()}</nav>
                        <button class="sidebar__logout" on:click=move |_| show_logout.set(true)>
                            "Logout"
                        </button>
                    </aside>
                    <main class="home-layout__main">
                        <Outlet/>
                    </main>
                </div>
                <Show when=move || show_logout.get()>
                    <ConfirmModal
                        title="Confirm Logout"
                        message="Are you sure you want to log out of your account?"
                        confirm_label="Logout"
                        on_confirm=on_logout_confirm
                        on_cancel=on_logout_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}
