//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Route, Router, Routes};

use crate::net::api::{Api, base_url_from_env};
use crate::pages::client_details::ClientDetailsPage;
use crate::pages::clients::ClientsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::engineer_details::EngineerDetailsPage;
use crate::pages::engineers::EngineersPage;
use crate::pages::home::HomeLayout;
use crate::pages::login::LoginPage;
use crate::state::requests::RequestsState;
use crate::state::session::{BrowserSessionBackend, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, REST gateway, and selection state, and sets
/// up client-side routing: `/login` is the only unauthenticated route;
/// everything else renders inside the guarded [`HomeLayout`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::load(Arc::new(BrowserSessionBackend));
    let on_session_expired = Callback::new(|()| force_login_navigation());
    let api = Api::new(base_url_from_env(), session.clone(), on_session_expired);

    provide_context(session);
    provide_context(api);
    provide_context(RwSignal::new(RequestsState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/field-talent-admin.css"/>
        <Title text="Field Talent Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=HomeLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("client") view=ClientsPage/>
                    <Route path=StaticSegment("clientdetails") view=ClientDetailsPage/>
                    <Route path=StaticSegment("engineer") view=EngineersPage/>
                    <Route path=StaticSegment("engineerdetails") view=EngineerDetailsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Hard navigation to the login entry point, discarding all in-memory UI
/// state. Used when the server signals that the token is no longer valid.
fn force_login_navigation() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
