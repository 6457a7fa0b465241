//! Category list state for the instructor and admin pages.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::http::ApiError;
use crate::net::types::{ApiEnvelope, Category};

/// Last fetched categories plus load/error status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoriesState {
    pub items: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CategoriesState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a list response. A failed load keeps the previous items.
    pub fn finish_load(&mut self, result: Result<ApiEnvelope<Vec<Category>>, ApiError>) {
        self.loading = false;
        match result {
            Ok(envelope) => self.items = envelope.data.unwrap_or_default(),
            Err(e) => self.record_error(&e),
        }
    }

    pub fn record_error(&mut self, err: &ApiError) {
        self.error = Some(err.user_message());
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|c| c.is_active).count()
    }
}
