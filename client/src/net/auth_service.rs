//! `/auth` endpoints: account creation, sign-in, verification, password reset.
//!
//! None of these calls carry a bearer token; sign-up and sign-in are what
//! establish a session in the first place.

#[cfg(test)]
#[path = "auth_service_test.rs"]
mod auth_service_test;

use super::http::{ApiClient, ApiError, ApiRequest};
use super::types::{
    Acknowledgement, AuthResponse, EmailRequest, ResetPasswordRequest, SigninRequest, SignupRequest,
};

fn verify_account_endpoint(email: &str, token: &str) -> String {
    format!(
        "/auth/verify-account/{}/{}",
        urlencoding::encode(email),
        urlencoding::encode(token)
    )
}

/// Create an account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn signup(client: &ApiClient, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
    client.send(ApiRequest::post("/auth/signup").json(request)?).await
}

/// Exchange credentials for a session token via `POST /auth/signin`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are rejected.
pub async fn signin(client: &ApiClient, request: &SigninRequest) -> Result<AuthResponse, ApiError> {
    client.send(ApiRequest::post("/auth/signin").json(request)?).await
}

/// Ask the backend to email a fresh verification token.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn request_verification_token(client: &ApiClient, email: &str) -> Result<Acknowledgement, ApiError> {
    let body = EmailRequest { email: email.to_owned() };
    client.send(ApiRequest::post("/auth/request-verification-token").json(&body)?).await
}

/// Confirm an account with the emailed token; both travel in the path.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is rejected.
pub async fn verify_account(client: &ApiClient, email: &str, token: &str) -> Result<Acknowledgement, ApiError> {
    client.send(ApiRequest::get(verify_account_endpoint(email, token))).await
}

/// Ask the backend to email a password-reset token.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn request_password_reset(client: &ApiClient, email: &str) -> Result<Acknowledgement, ApiError> {
    let body = EmailRequest { email: email.to_owned() };
    client.send(ApiRequest::post("/auth/request-password-reset").json(&body)?).await
}

/// Set a new password using an emailed reset token.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is rejected.
pub async fn reset_password(client: &ApiClient, request: &ResetPasswordRequest) -> Result<Acknowledgement, ApiError> {
    client.send(ApiRequest::post("/auth/reset-password").json(request)?).await
}
