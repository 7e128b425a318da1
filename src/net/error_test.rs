use super::*;

#[test]
fn status_error_displays_backend_body() {
    let error = ApiError::status(403, "wrong email or password".to_owned());
    assert_eq!(error.to_string(), "wrong email or password");
    assert_eq!(
        error,
        ApiError::Status {
            status: 403,
            message: "wrong email or password".to_owned(),
        }
    );
}

#[test]
fn status_error_without_body_falls_back_to_status_code() {
    let error = ApiError::status(502, "  ".to_owned());
    assert_eq!(error.to_string(), "request failed: 502");
}

#[test]
fn session_expired_display_is_actionable() {
    assert_eq!(
        ApiError::SessionExpired.to_string(),
        "session expired, please log in again"
    );
}
