use super::*;
use crate::net::http::ApiError;

#[test]
fn validate_trims_email_and_keeps_password() {
    let request = validate_signin_input("  ada@example.com ", " secret ").expect("valid");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, " secret ");
}

#[test]
fn validate_rejects_blank_fields() {
    assert_eq!(validate_signin_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_signin_input("a@b.c", ""), Err("Enter both email and password."));
}

#[test]
fn validate_rejects_email_without_at() {
    assert_eq!(validate_signin_input("ada", "pw"), Err("Enter a valid email address."));
}

#[test]
fn unauthorized_maps_to_credentials_message() {
    let err = SessionError::Api(ApiError::Status {
        status_code: 401,
        message: "Unauthorized".to_owned(),
        error_code: "INVALID_CREDENTIALS".to_owned(),
    });
    assert_eq!(signin_error_message(&err), "Invalid email or password.");
}

#[test]
fn other_status_errors_use_backend_message() {
    let err = SessionError::Api(ApiError::Status {
        status_code: 403,
        message: "Account not verified".to_owned(),
        error_code: "NOT_VERIFIED".to_owned(),
    });
    assert_eq!(signin_error_message(&err), "Account not verified");
}

#[test]
fn token_problems_have_their_own_message() {
    assert!(signin_error_message(&SessionError::MissingToken).contains("unusable session"));
    assert!(signin_error_message(&SessionError::ExpiredToken).contains("expired"));
}
