//! `/category` endpoints.
//!
//! Reads are public. Mutations carry the caller's bearer token; role rules are
//! enforced by the backend, not here. Nothing is cached, so callers refetch
//! after a mutation.

#[cfg(test)]
#[path = "category_service_test.rs"]
mod category_service_test;

use super::http::{ApiClient, ApiError, ApiRequest};
use super::types::{Acknowledgement, AddCategoryRequest, ApiEnvelope, Category, UpdateCategoryRequest};

const CATEGORY_ENDPOINT: &str = "/category";

fn category_endpoint(id: &str) -> String {
    format!("{CATEGORY_ENDPOINT}/{}", urlencoding::encode(id))
}

fn toggle_status_endpoint(id: &str) -> String {
    format!("{}/toggle-status", category_endpoint(id))
}

/// List every category via `GET /category`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn get_all_categories(client: &ApiClient) -> Result<ApiEnvelope<Vec<Category>>, ApiError> {
    client.send(ApiRequest::get(CATEGORY_ENDPOINT)).await
}

/// Fetch one category via `GET /category/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the category does not exist.
pub async fn get_category_by_id(client: &ApiClient, id: &str) -> Result<ApiEnvelope<Category>, ApiError> {
    client.send(ApiRequest::get(category_endpoint(id))).await
}

/// Create a category via `POST /category`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn add_category(
    client: &ApiClient,
    token: &str,
    payload: &AddCategoryRequest,
) -> Result<ApiEnvelope<Category>, ApiError> {
    client.send(ApiRequest::post(CATEGORY_ENDPOINT).bearer(token).json(payload)?).await
}

/// Apply a partial update via `PATCH /category/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn update_category(
    client: &ApiClient,
    token: &str,
    id: &str,
    payload: &UpdateCategoryRequest,
) -> Result<ApiEnvelope<Category>, ApiError> {
    client.send(ApiRequest::patch(category_endpoint(id)).bearer(token).json(payload)?).await
}

/// Remove a category via `DELETE /category/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn delete_category(client: &ApiClient, token: &str, id: &str) -> Result<Acknowledgement, ApiError> {
    client.send(ApiRequest::delete(category_endpoint(id)).bearer(token)).await
}

/// Flip the active flag via `PATCH /category/{id}/toggle-status`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn toggle_category_status(
    client: &ApiClient,
    token: &str,
    id: &str,
) -> Result<ApiEnvelope<Category>, ApiError> {
    client.send(ApiRequest::patch(toggle_status_endpoint(id)).bearer(token)).await
}
