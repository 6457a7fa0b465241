//! Admin landing page linking to the management screens.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_nav::DashboardNav;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{install_role_guard, install_unauth_redirect};
use crate::util::routes;

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    install_role_guard(auth, Role::Admin, navigate);

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <h1>"Administration"</h1>
            <ul class="admin-links">
                <li>
                    <a href=routes::ADMIN_CATEGORIES>"Manage categories"</a>
                </li>
                <li>
                    <a href=routes::ADMIN_USERS>"Manage users"</a>
                </li>
            </ul>
        </div>
    }
}
