//! Login-form validation, applied before any network call.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach the gateway; they come back as per-field
//! messages the form renders under each input.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::LoginCredentials;

/// Per-field validation messages for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginFormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate both fields, returning ready-to-send credentials or the set of
/// messages to display.
///
/// # Errors
///
/// Returns [`LoginFormErrors`] with a message per offending field.
pub fn validate_login_form(email: &str, password: &str) -> Result<LoginCredentials, LoginFormErrors> {
    let email = email.trim();
    let errors = LoginFormErrors {
        email: email_error(email),
        password: password_error(password),
    };
    if errors.is_empty() {
        Ok(LoginCredentials {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    } else {
        Err(errors)
    }
}

fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Enter a valid email")
    } else {
        None
    }
}

fn password_error(password: &str) -> Option<&'static str> {
    let length = password.chars().count();
    if password.is_empty() {
        Some("Password is required")
    } else if length < 8 {
        Some("Password must be at least 8 characters")
    } else if length > 20 {
        Some("Password can be at most 20 characters")
    } else {
        None
    }
}

/// Accepts a local part of `[A-Za-z0-9._%+-]`, an `@`, domain labels of
/// `[A-Za-z0-9.-]`, and a final alphabetic TLD of at least two characters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty()
        || !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
