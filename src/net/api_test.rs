use std::sync::{Arc, Mutex};

use super::*;
use crate::state::session::SessionBackend;

#[derive(Default)]
struct MemoryBackend {
    stored: Mutex<Option<String>>,
}

impl SessionBackend for MemoryBackend {
    fn read(&self) -> Option<String> {
        self.stored.lock().unwrap().clone()
    }

    fn write(&self, raw: &str) -> Result<(), String> {
        *self.stored.lock().unwrap() = Some(raw.to_owned());
        Ok(())
    }
}

fn logged_in_store(token: &str) -> SessionStore {
    let store = SessionStore::load(Arc::new(MemoryBackend::default()));
    store.establish("1", "A", "admin@x.com", token);
    store
}

fn api_counting_expirations(store: SessionStore) -> (Api, RwSignal<u32>) {
    let expirations = RwSignal::new(0u32);
    let api = Api::new(
        "http://backend",
        store,
        Callback::new(move |()| expirations.update(|n| *n += 1)),
    );
    (api, expirations)
}

#[test]
fn authorization_header_uses_bearer_scheme() {
    let session = Session {
        token: "abc".to_owned(),
        is_logged_in: true,
        ..Session::default()
    };
    assert_eq!(authorization_header(&session), Some("Bearer abc".to_owned()));
}

#[test]
fn authorization_header_absent_without_token() {
    assert_eq!(authorization_header(&Session::default()), None);
}

#[test]
fn established_session_authorizes_subsequent_requests() {
    let store = logged_in_store("tok123");
    assert_eq!(
        authorization_header(&store.get()),
        Some("Bearer tok123".to_owned())
    );
}

#[test]
fn invalid_token_response_requires_exact_match() {
    assert!(is_invalid_token_response(401, "invalid token"));
    assert!(!is_invalid_token_response(401, "bad credentials"));
    assert!(!is_invalid_token_response(401, "Invalid Token"));
    assert!(!is_invalid_token_response(500, "invalid token"));
}

#[test]
fn verify_request_endpoint_formats_expected_path() {
    assert_eq!(verify_request_endpoint("r42"), "/verifyRequests/r42");
}

#[test]
fn endpoint_joins_base_url_and_path() {
    let (api, _) = api_counting_expirations(logged_in_store("tok123"));
    assert_eq!(api.endpoint("/login"), "http://backend/login");
}

#[test]
fn invalid_token_failure_tears_down_session_and_notifies_once() {
    let store = logged_in_store("tok123");
    let (api, expirations) = api_counting_expirations(store.clone());

    let error = api.classify_failure(401, "invalid token".to_owned());

    assert_eq!(error, ApiError::SessionExpired);
    assert!(!store.get().is_logged_in);
    assert_eq!(store.get().token, "");
    assert_eq!(expirations.get_untracked(), 1);
}

#[test]
fn other_401_bodies_pass_through_untouched() {
    let store = logged_in_store("tok123");
    let (api, expirations) = api_counting_expirations(store.clone());

    let error = api.classify_failure(401, "bad credentials".to_owned());

    assert_eq!(
        error,
        ApiError::Status {
            status: 401,
            message: "bad credentials".to_owned(),
        }
    );
    assert!(store.get().is_logged_in);
    assert_eq!(expirations.get_untracked(), 0);
}

#[test]
fn server_errors_pass_through_untouched() {
    let store = logged_in_store("tok123");
    let (api, expirations) = api_counting_expirations(store.clone());

    let error = api.classify_failure(500, "boom".to_owned());

    assert_eq!(
        error,
        ApiError::Status {
            status: 500,
            message: "boom".to_owned(),
        }
    );
    assert!(store.get().is_logged_in);
    assert_eq!(expirations.get_untracked(), 0);
}
