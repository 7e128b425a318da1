//! # field-talent-admin
//!
//! Leptos + WASM admin console for the Field Talent identity-verification
//! workflow. Reviewers sign in, inspect pending client and engineer
//! verification requests together with their uploaded documents, and accept
//! or reject each request with optional remarks.
//!
//! This crate contains pages, components, application state, the REST
//! gateway, and the session store. The backend is an external REST service;
//! every call goes through [`net::api::Api`], which attaches the bearer
//! token and reacts to server-side session invalidation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("field-talent-admin starting");
    leptos::mount::hydrate_body(App);
}
