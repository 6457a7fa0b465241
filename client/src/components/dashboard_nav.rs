//! Dashboard navigation bar with role-aware links and sign-out.

#[cfg(test)]
#[path = "dashboard_nav_test.rs"]
mod dashboard_nav_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::{AuthState, SharedTokenStore, sign_out};
use crate::util::routes;

/// Navigation entries (`label`, `href`) visible to a user with `role`.
#[must_use]
pub fn nav_links(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("Profile", routes::PROFILE)];
    match role {
        Some(Role::Instructor) => links.push(("Overview", routes::OVERVIEW)),
        Some(Role::Admin) => {
            links.push(("Admin", routes::ADMIN));
            links.push(("Categories", routes::ADMIN_CATEGORIES));
            links.push(("Users", routes::ADMIN_USERS));
        }
        Some(Role::Student) | None => {}
    }
    links
}

#[component]
pub fn DashboardNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SharedTokenStore>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        auth.set(sign_out(store.as_ref()));
        navigate(routes::SIGN_IN, NavigateOptions::default());
    };

    let user_label = move || {
        auth.get()
            .user
            .map(|u| format!("{} ({})", u.display_name(), u.role_name))
            .unwrap_or_default()
    };

    view! {
        <nav class="dashboard-nav">
            <a class="dashboard-nav__brand" href=routes::HOME>"LearnHub"</a>
            <ul class="dashboard-nav__links">
                {move || {
                    nav_links(auth.get().role())
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <a href=href>{label}</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <span class="dashboard-nav__user">{user_label}</span>
            <button class="dashboard-nav__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </nav>
    }
}
