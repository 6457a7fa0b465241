//! Route paths and the role → landing-route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

pub const HOME: &str = "/";
pub const SIGN_IN: &str = "/auth/signin";
pub const SIGN_UP: &str = "/auth/signup";
pub const DASHBOARD: &str = "/dashboard";
pub const OVERVIEW: &str = "/dashboard/overview";
pub const PROFILE: &str = "/dashboard/profile";
pub const ADMIN: &str = "/dashboard/admin";
pub const ADMIN_CATEGORIES: &str = "/dashboard/admin/categories";
pub const ADMIN_USERS: &str = "/dashboard/admin/users";

/// `localStorage` key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "learnhub_token";

/// Where a user with `role` lands after sign-in. Unknown roles get the
/// generic dashboard.
#[must_use]
pub fn landing_route(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Student) => PROFILE,
        Some(Role::Instructor) => OVERVIEW,
        Some(Role::Admin) => ADMIN,
        None => DASHBOARD,
    }
}
