use super::*;

#[test]
fn accepts_valid_credentials() {
    let credentials = validate_login_form("admin@x.com", "password1").unwrap();
    assert_eq!(credentials.email, "admin@x.com");
    assert_eq!(credentials.password, "password1");
}

#[test]
fn trims_email_before_submission() {
    let credentials = validate_login_form("  admin@x.com  ", "password1").unwrap();
    assert_eq!(credentials.email, "admin@x.com");
}

#[test]
fn empty_fields_are_required() {
    let errors = validate_login_form("", "").unwrap_err();
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
    assert!(!errors.is_empty());
}

#[test]
fn rejects_malformed_emails() {
    for email in [
        "admin",
        "admin@",
        "@x.com",
        "admin@x",
        "admin@x.c",
        "admin@.com",
        "ad min@x.com",
    ] {
        assert!(!is_valid_email(email), "{email} should be rejected");
    }
}

#[test]
fn accepts_common_email_shapes() {
    for email in [
        "admin@x.com",
        "first.last@sub.domain.org",
        "user+tag@x-mail.co",
    ] {
        assert!(is_valid_email(email), "{email} should be accepted");
    }
}

#[test]
fn password_length_bounds() {
    assert_eq!(
        validate_login_form("a@x.com", "short").unwrap_err().password,
        Some("Password must be at least 8 characters")
    );
    assert_eq!(
        validate_login_form("a@x.com", &"x".repeat(21)).unwrap_err().password,
        Some("Password can be at most 20 characters")
    );
    assert!(validate_login_form("a@x.com", &"x".repeat(8)).is_ok());
    assert!(validate_login_form("a@x.com", &"x".repeat(20)).is_ok());
}
