//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated page applies the same decisions: send signed-out visitors to
//! sign-in, send users whose role does not match the page to their own
//! landing route, and send the dashboard index on to the landing route once
//! the session has hydrated. The decisions are plain functions over
//! [`AuthState`]; the `install_*` wrappers run them inside an `Effect`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::routes::{DASHBOARD, SIGN_IN, landing_route};

/// Redirect target for a page that requires `required`.
///
/// `None` when nobody is signed in, when the role is not yet known, or when
/// the role matches. Unrecognised role strings go to the generic dashboard.
#[must_use]
pub fn role_guard_redirect(state: &AuthState, required: Role) -> Option<&'static str> {
    let user = state.user.as_ref()?;
    if user.role_name.is_empty() {
        return None;
    }
    match user.role {
        Some(role) if role == required => None,
        other => Some(landing_route(other)),
    }
}

/// Redirect target for the dashboard index: the user's landing route, but
/// only once the session is authenticated and no longer loading. Roles whose
/// landing route is the index itself stay put.
#[must_use]
pub fn dashboard_index_redirect(state: &AuthState) -> Option<&'static str> {
    if state.loading || !state.is_authenticated() {
        return None;
    }
    Some(landing_route(state.role())).filter(|target| *target != DASHBOARD)
}

/// Sign-in redirect for signed-out visitors once loading has finished.
#[must_use]
pub fn unauth_redirect(state: &AuthState) -> Option<&'static str> {
    if !state.loading && !state.is_authenticated() {
        Some(SIGN_IN)
    } else {
        None
    }
}

fn install_redirect<F, D>(auth: RwSignal<AuthState>, navigate: F, decide: D)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    D: Fn(&AuthState) -> Option<&'static str> + 'static,
{
    Effect::new(move || {
        if let Some(target) = auth.with(|state| decide(state)) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Redirect to sign-in whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(auth, navigate, unauth_redirect);
}

/// Redirect users whose role differs from `required` to their landing route.
pub fn install_role_guard<F>(auth: RwSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(auth, navigate, move |state| role_guard_redirect(state, required));
}

/// Forward the dashboard index to the landing route after hydration.
pub fn install_dashboard_index_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(auth, navigate, dashboard_index_redirect);
}
