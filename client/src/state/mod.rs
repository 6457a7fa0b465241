//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `categories`, `users`) so individual
//! pages can depend on small focused models.

pub mod auth;
pub mod categories;
pub mod users;
