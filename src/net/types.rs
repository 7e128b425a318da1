//! Wire-schema DTOs for the verification backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON via serde renames so the
//! Rust side stays snake_case. Document slots are `Option<String>` image
//! URLs: a missing slot means "never uploaded", which renders differently
//! from an uploaded-but-broken image.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials submitted by the login form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Identity and bearer token returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// A pending client verification request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientVerifyRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Some records arrive without a contact address.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "clientId")]
    pub client: ClientIdentity,
}

impl ClientVerifyRequest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Email for table display; records without one show a placeholder.
    pub fn contact_email(&self) -> &str {
        self.email.as_deref().unwrap_or("N/A")
    }
}

/// Nested applicant record carrying the uploaded documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentity {
    #[serde(rename = "verificationInfo")]
    pub verification_info: ClientDocuments,
}

/// Document slots a client may upload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDocuments {
    #[serde(rename = "frontId", default)]
    pub front_id: Option<String>,
    #[serde(rename = "backId", default)]
    pub back_id: Option<String>,
}

/// A pending engineer verification request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineerVerifyRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "engineerId")]
    pub engineer: EngineerIdentity,
}

impl EngineerVerifyRequest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn contact_email(&self) -> &str {
        self.email.as_deref().unwrap_or("N/A")
    }
}

/// Nested applicant record carrying the uploaded documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineerIdentity {
    #[serde(rename = "verificationInfo")]
    pub verification_info: EngineerDocuments,
}

/// Document slots an engineer may upload. Engineers carry professional
/// certificates on top of the two ID sides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineerDocuments {
    #[serde(rename = "frontId", default)]
    pub front_id: Option<String>,
    #[serde(rename = "backId", default)]
    pub back_id: Option<String>,
    #[serde(rename = "militaryCert", default)]
    pub military_cert: Option<String>,
    #[serde(rename = "graduationCert", default)]
    pub graduation_cert: Option<String>,
    #[serde(rename = "unionCard", default)]
    pub union_card: Option<String>,
}

/// Reviewer verdict on a verification request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    Accepted,
    Rejected,
}

/// PATCH body submitted when a reviewer decides a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyDecision {
    pub status: DecisionStatus,
    /// Serializes as JSON `null` when the reviewer left no remarks.
    pub remarks: Option<String>,
}

impl VerifyDecision {
    /// Build a decision from the remarks textarea; blank or whitespace-only
    /// input submits as "no remarks".
    pub fn from_form(status: DecisionStatus, remarks: &str) -> Self {
        let trimmed = remarks.trim();
        Self {
            status,
            remarks: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
        }
    }
}
