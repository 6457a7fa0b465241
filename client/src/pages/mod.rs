//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, data loading) and
//! delegates rendering details to `components`.

pub mod admin;
pub mod admin_categories;
pub mod admin_users;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod overview;
pub mod profile;
pub mod signup;
