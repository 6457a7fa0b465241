//! Outer response shapes shared by every backend endpoint.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};

/// Error returned when an envelope does not carry what the caller needs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContractsError {
    /// The response was successful but had no `data` member.
    #[error("response envelope has no data (status: {status})")]
    MissingData { status: String },
}

/// Success envelope: `{ status, message?, data? }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Backend status label (e.g. `"ok"`, `"success"`).
    pub status: String,
    /// Optional human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload, absent for acknowledgement-only responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Take the payload out of the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ContractsError::MissingData`] if `data` was absent or null.
    pub fn into_data(self) -> Result<T, ContractsError> {
        self.data.ok_or(ContractsError::MissingData { status: self.status })
    }
}

/// Error body the backend sends with non-2xx responses.
///
/// Every field is optional so a partially-formed body still yields whatever
/// it does carry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
}
