//! `/user` endpoints: self-service profile and admin user management.
//!
//! Every call is token-gated. The backend decides whether the caller's role
//! may perform an admin operation.

#[cfg(test)]
#[path = "user_service_test.rs"]
mod user_service_test;

use super::http::{ApiClient, ApiError, ApiRequest};
use super::types::{
    Acknowledgement, AddUserRequest, ApiEnvelope, UpdateProfileRequest, UpdateUserStatusRequest, UserProfile,
};

const USER_ENDPOINT: &str = "/user";
const PROFILE_ENDPOINT: &str = "/user/profile";

fn user_endpoint(id: &str) -> String {
    format!("{USER_ENDPOINT}/{}", urlencoding::encode(id))
}

/// Fetch the caller's own profile.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is rejected.
pub async fn get_profile(client: &ApiClient, token: &str) -> Result<ApiEnvelope<UserProfile>, ApiError> {
    client.send(ApiRequest::get(PROFILE_ENDPOINT).bearer(token)).await
}

/// Apply a partial update to the caller's own profile.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn update_profile(
    client: &ApiClient,
    token: &str,
    payload: &UpdateProfileRequest,
) -> Result<ApiEnvelope<UserProfile>, ApiError> {
    client.send(ApiRequest::patch(PROFILE_ENDPOINT).bearer(token).json(payload)?).await
}

/// Delete the caller's own account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn delete_profile(client: &ApiClient, token: &str) -> Result<Acknowledgement, ApiError> {
    client.send(ApiRequest::delete(PROFILE_ENDPOINT).bearer(token)).await
}

/// List every user (admin).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn get_all_users(client: &ApiClient, token: &str) -> Result<ApiEnvelope<Vec<UserProfile>>, ApiError> {
    client.send(ApiRequest::get(USER_ENDPOINT).bearer(token)).await
}

/// Create a user account (admin).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn add_user(
    client: &ApiClient,
    token: &str,
    payload: &AddUserRequest,
) -> Result<ApiEnvelope<UserProfile>, ApiError> {
    client.send(ApiRequest::post(USER_ENDPOINT).bearer(token).json(payload)?).await
}

/// Fetch one user by id (admin).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the user does not exist.
pub async fn get_user_by_id(client: &ApiClient, token: &str, id: &str) -> Result<ApiEnvelope<UserProfile>, ApiError> {
    client.send(ApiRequest::get(user_endpoint(id)).bearer(token)).await
}

/// Delete one user by id (admin).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn delete_user(client: &ApiClient, token: &str, id: &str) -> Result<Acknowledgement, ApiError> {
    client.send(ApiRequest::delete(user_endpoint(id)).bearer(token)).await
}

/// Change a user's status, role, or both (admin).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn update_user_status_or_role(
    client: &ApiClient,
    token: &str,
    id: &str,
    payload: &UpdateUserStatusRequest,
) -> Result<ApiEnvelope<UserProfile>, ApiError> {
    client.send(ApiRequest::patch(user_endpoint(id)).bearer(token).json(payload)?).await
}
