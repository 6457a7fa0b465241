//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the transport seam and error normalisation, `config` the base
//! URL, and the `*_service` modules map one function to one endpoint.

pub mod auth_service;
pub mod category_service;
pub mod config;
pub mod http;
pub mod types;
pub mod user_service;

#[cfg(test)]
pub(crate) mod test_support;
