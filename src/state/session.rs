//! Session store: the authenticated administrator's identity and token.
//!
//! SYSTEM CONTEXT
//! ==============
//! One session exists per running client. It is seeded from `localStorage`
//! at startup, replaced wholesale by login and logout, and written back
//! synchronously on every change so a page reload resumes exactly where the
//! previous load left off. The REST gateway reads the token from here and
//! the route guards watch the logged-in flag.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// `localStorage` key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "admin";

/// The administrator session. All fields are empty strings until a login
/// succeeds; `is_logged_in` is true exactly while a non-empty token is held.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub token: String,
    #[serde(rename = "isUserLoggedIn", default)]
    pub is_logged_in: bool,
}

/// Raw persistence seam for the session record.
///
/// The browser backend wraps `localStorage`; tests substitute an in-memory
/// fake to observe write-through behavior.
pub trait SessionBackend: Send + Sync {
    /// Previously persisted raw value, if any.
    fn read(&self) -> Option<String>;
    /// Persist `raw`, reporting storage-level failures.
    fn write(&self, raw: &str) -> Result<(), String>;
}

/// `localStorage`-backed persistence. Outside the browser both operations
/// are no-ops, leaving the store in-memory only.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionBackend;

impl SessionBackend for BrowserSessionBackend {
    fn read(&self) -> Option<String> {
        crate::util::storage::load_string(SESSION_STORAGE_KEY)
    }

    fn write(&self, raw: &str) -> Result<(), String> {
        crate::util::storage::save_string(SESSION_STORAGE_KEY, raw)
    }
}

/// Reactive handle to the singleton session.
#[derive(Clone)]
pub struct SessionStore {
    session: RwSignal<Session>,
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    /// Seed the store from persisted storage. Missing or unparseable data
    /// falls back silently to the unauthenticated default.
    pub fn load(backend: Arc<dyn SessionBackend>) -> Self {
        let initial = backend
            .read()
            .and_then(|raw| serde_json::from_str::<Session>(&raw).ok())
            .map_or_else(Session::default, sanitize);
        Self {
            session: RwSignal::new(initial),
            backend,
        }
    }

    /// Snapshot of the current session.
    pub fn get(&self) -> Session {
        self.session.get_untracked()
    }

    /// Reactive view for route guards and identity-aware components.
    pub fn watch(&self) -> RwSignal<Session> {
        self.session
    }

    /// Replace the session with a logged-in identity and persist it.
    /// The token is an opaque string; no format validation happens here.
    pub fn establish(&self, id: &str, name: &str, email: &str, token: &str) {
        self.replace(Session {
            id: id.to_owned(),
            name: name.to_owned(),
            email: email.to_owned(),
            token: token.to_owned(),
            is_logged_in: true,
        });
    }

    /// Reset to the unauthenticated default and persist the reset.
    pub fn teardown(&self) {
        self.replace(Session::default());
    }

    fn replace(&self, next: Session) {
        self.persist(&next);
        self.session.set(next);
    }

    fn persist(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => {
                if let Err(err) = self.backend.write(&raw) {
                    leptos::logging::warn!("session not persisted: {err}");
                }
            }
            Err(err) => leptos::logging::warn!("session not serializable: {err}"),
        }
    }
}

/// A stored record claiming to be logged in without a token cannot satisfy
/// any authenticated call; treat it as no session.
fn sanitize(session: Session) -> Session {
    if session.is_logged_in && session.token.is_empty() {
        Session::default()
    } else {
        session
    }
}
