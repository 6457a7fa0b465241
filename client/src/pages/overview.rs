//! Instructor overview: the category catalogue an instructor publishes into.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_nav::DashboardNav;
use crate::components::status_banner::StatusBanner;
use crate::net::http::ApiClient;
use crate::net::types::{Category, Role};
use crate::state::auth::AuthState;
use crate::state::categories::CategoriesState;
use crate::util::auth::{install_role_guard, install_unauth_redirect};

/// Active categories sorted by name, for the instructor's pick list.
#[must_use]
pub fn active_categories(items: &[Category]) -> Vec<Category> {
    let mut active: Vec<Category> = items.iter().filter(|c| c.is_active).cloned().collect();
    active.sort_by_key(|c| c.name.to_lowercase());
    active
}

#[component]
pub fn InstructorOverviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    install_role_guard(auth, Role::Instructor, navigate);

    let categories = RwSignal::new(CategoriesState::default());
    categories.update(CategoriesState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::category_service::get_all_categories(&client).await;
        categories.update(|s| s.finish_load(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &client;
    }

    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Welcome back, {}", u.display_name()))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <h1>{greeting}</h1>
            <StatusBanner message=Signal::derive(move || categories.get().error) error=true/>
            <Show when=move || categories.get().loading>
                <p class="dashboard-page__loading">"Loading categories..."</p>
            </Show>
            <section class="category-grid">
                {move || {
                    active_categories(&categories.get().items)
                        .into_iter()
                        .map(|c| {
                            view! {
                                <article class="category-card">
                                    <h3>{c.name}</h3>
                                    <p>{c.description.unwrap_or_default()}</p>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </section>
        </div>
    }
}
