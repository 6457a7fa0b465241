//! Dashboard index route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/dashboard` has no content of its own. Once the persisted session has
//! been restored it forwards to the landing route of the user's role, or to
//! sign-in when nobody is signed in.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_nav::DashboardNav;
use crate::state::auth::AuthState;
use crate::util::auth::{dashboard_index_redirect, install_dashboard_index_redirect, install_unauth_redirect};
use crate::util::routes;

pub const UNRECOGNISED_ROLE_NOTICE: &str =
    "Your account role is not recognised, so there is no dashboard for it yet. Contact an administrator.";

/// Message to show in place of the loading line once the session is settled
/// but there is nowhere to forward to.
#[must_use]
pub fn index_notice(state: &AuthState) -> Option<&'static str> {
    if state.loading || !state.is_authenticated() || dashboard_index_redirect(state).is_some() {
        return None;
    }
    Some(UNRECOGNISED_ROLE_NOTICE)
}

#[component]
pub fn DashboardIndexPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    install_dashboard_index_redirect(auth, navigate);

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <Show
                when=move || auth.with(|s| index_notice(s).is_some())
                fallback=|| view! { <p class="dashboard-page__loading">"Loading your dashboard..."</p> }
            >
                <p class="dashboard-page__notice">{move || auth.with(|s| index_notice(s).unwrap_or_default())}</p>
                <a href=routes::PROFILE>"Go to your profile"</a>
            </Show>
        </div>
    }
}
