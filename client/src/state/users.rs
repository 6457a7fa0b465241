//! User list state for the admin users page.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::http::ApiError;
use crate::net::types::{ApiEnvelope, UserProfile};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    pub items: Vec<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
    /// Case-insensitive name/email filter applied client-side.
    pub filter: String,
}

impl UsersState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a list response. A failed load keeps the previous items.
    pub fn finish_load(&mut self, result: Result<ApiEnvelope<Vec<UserProfile>>, ApiError>) {
        self.loading = false;
        match result {
            Ok(envelope) => self.items = envelope.data.unwrap_or_default(),
            Err(e) => self.record_error(&e),
        }
    }

    pub fn record_error(&mut self, err: &ApiError) {
        self.error = Some(err.user_message());
    }

    /// Users matching the current filter, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<UserProfile> {
        let needle = self.filter.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle) || u.email.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
