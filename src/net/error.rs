//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages display these errors inline; nothing is retried. `SessionExpired`
//! is special-cased by [`crate::net::api::Api`], which tears the session
//! down before surfacing it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Error returned by every [`crate::net::api::Api`] operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status with the backend-supplied body.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A body could not be serialized or a response could not be decoded.
    #[error("could not decode server response: {0}")]
    Decode(String),
    /// The server rejected the bearer token; the session has been torn down.
    #[error("session expired, please log in again")]
    SessionExpired,
}

impl ApiError {
    /// Build a `Status` error, substituting a generic message when the
    /// backend body is empty.
    pub fn status(status: u16, body: String) -> Self {
        let message = if body.trim().is_empty() {
            format!("request failed: {status}")
        } else {
            body
        };
        Self::Status { status, message }
    }
}
