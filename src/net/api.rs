//! Authenticated REST gateway for the verification backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound call reads the session store and attaches the bearer
//! token when one is held. Every failed response is classified exactly
//! once: a 401 whose body is exactly `invalid token` tears the session
//! down and notifies the application shell so it can force a fresh login;
//! all other failures pass through to the calling page untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{
    ClientVerifyRequest, EngineerVerifyRequest, LoginCredentials, LoginResponse, VerifyDecision,
};
use crate::state::session::SessionStore;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::Session;

/// Response body the backend sends with a 401 when the bearer token is no
/// longer valid. Matched exactly; any other 401 body passes through.
pub const INVALID_TOKEN_BODY: &str = "invalid token";

const LOGIN_PATH: &str = "/login";
const CLIENT_REQUESTS_PATH: &str = "/clientsVerifyRequests";
const ENGINEER_REQUESTS_PATH: &str = "/engineersVerifyRequests";

/// Backend base address, fixed at compile time and overridable with the
/// `FIELD_TALENT_API_URL` build environment variable.
pub fn base_url_from_env() -> String {
    option_env!("FIELD_TALENT_API_URL")
        .unwrap_or("http://localhost:4000")
        .trim_end_matches('/')
        .to_owned()
}

/// REST gateway carrying the session handle and the expiry notification.
///
/// Stateless with respect to session writes: login responses are returned
/// to the caller, which establishes the session itself. The gateway only
/// reads the token on the way out and tears the session down when the
/// server signals invalidation on the way in.
#[derive(Clone)]
pub struct Api {
    base_url: String,
    session: SessionStore,
    on_session_expired: Callback<()>,
}

impl Api {
    pub fn new(
        base_url: impl Into<String>,
        session: SessionStore,
        on_session_expired: Callback<()>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            on_session_expired,
        }
    }

    /// POST `/login`. Does not touch the session store; the caller
    /// establishes the session from the returned identity.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the backend
    /// rejects the credentials.
    pub async fn login_admin(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authorized(gloo_net::http::Request::post(&self.endpoint(LOGIN_PATH)))
                .json(credentials)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.handle(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(not_available())
        }
    }

    /// GET `/clientsVerifyRequests`: pending client verification records.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_client_requests(&self) -> Result<Vec<ClientVerifyRequest>, ApiError> {
        self.list(CLIENT_REQUESTS_PATH).await
    }

    /// GET `/engineersVerifyRequests`: pending engineer verification records.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_engineer_requests(&self) -> Result<Vec<EngineerVerifyRequest>, ApiError> {
        self.list(ENGINEER_REQUESTS_PATH).await
    }

    /// PATCH `/verifyRequests/{id}` with the reviewer's decision. Returns
    /// the updated record as reported by the backend.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn patch_request_status(
        &self,
        id: &str,
        decision: &VerifyDecision,
    ) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(&verify_request_endpoint(id));
            let request = self
                .authorized(gloo_net::http::Request::patch(&url))
                .json(decision)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.handle(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, decision);
            Err(not_available())
        }
    }

    async fn list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self
                .authorized(gloo_net::http::Request::get(&self.endpoint(path)))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.handle(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(not_available())
        }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the uniform content type and, when a token is held, the
    /// bearer credential. A missing token sends the request bare; the
    /// backend's rejection then flows through the normal failure path.
    #[cfg(feature = "hydrate")]
    fn authorized(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        let builder = builder.header("Content-Type", "application/json");
        match authorization_header(&self.session.get()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    #[cfg(feature = "hydrate")]
    async fn handle<T: serde::de::DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(self.classify_failure(status, body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Classify a failed response, applying the session-expiry side effects
    /// for the invalid-token signal. Requests already in flight when the
    /// teardown happens are unaffected; they captured their token at
    /// dispatch.
    #[cfg(any(test, feature = "hydrate"))]
    fn classify_failure(&self, status: u16, body: String) -> ApiError {
        if is_invalid_token_response(status, &body) {
            self.session.teardown();
            self.on_session_expired.run(());
            ApiError::SessionExpired
        } else {
            ApiError::status(status, body)
        }
    }
}

/// `Authorization` header value for the current session, if one is held.
#[cfg(any(test, feature = "hydrate"))]
fn authorization_header(session: &Session) -> Option<String> {
    if session.token.is_empty() {
        None
    } else {
        Some(format!("Bearer {}", session.token))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn is_invalid_token_response(status: u16, body: &str) -> bool {
    status == 401 && body == INVALID_TOKEN_BODY
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_request_endpoint(id: &str) -> String {
    format!("/verifyRequests/{id}")
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
