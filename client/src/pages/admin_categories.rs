//! Admin category management: list, create, toggle, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutation is followed by a full list refetch so the table always
//! mirrors the backend. Overlapping requests are not cancelled; the last
//! response to land wins.

#[cfg(test)]
#[path = "admin_categories_test.rs"]
mod admin_categories_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_nav::DashboardNav;
use crate::components::status_banner::StatusBanner;
use crate::net::http::ApiClient;
use crate::net::types::{AddCategoryRequest, Role};
use crate::state::auth::AuthState;
use crate::state::categories::CategoriesState;
use crate::util::auth::{install_role_guard, install_unauth_redirect};

/// Build the create payload from the form fields.
///
/// # Errors
///
/// Returns the message to show when the name is blank.
pub fn build_add_category_request(name: &str, description: &str) -> Result<AddCategoryRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Category name is required.");
    }
    let description = description.trim();
    Ok(AddCategoryRequest {
        name: name.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
    })
}

#[must_use]
pub fn status_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}

#[must_use]
pub fn toggle_label(is_active: bool) -> &'static str {
    if is_active { "Deactivate" } else { "Activate" }
}

/// Category mutations the table can trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryAction {
    Add(AddCategoryRequest),
    Toggle(String),
    Delete(String),
}

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    install_role_guard(auth, Role::Admin, navigate);

    let categories = RwSignal::new(CategoriesState::default());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let reload = {
        let client = client.clone();
        Callback::new(move |()| {
            categories.update(CategoriesState::begin_load);
            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::category_service::get_all_categories(&client).await;
                    categories.update(|s| s.finish_load(result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &client;
            }
        })
    };

    let run = Callback::new(move |action: CategoryAction| {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::net::category_service;
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let outcome = match &action {
                    CategoryAction::Add(payload) => {
                        category_service::add_category(&client, &token, payload).await.map(|_| ())
                    }
                    CategoryAction::Toggle(id) => {
                        category_service::toggle_category_status(&client, &token, id).await.map(|_| ())
                    }
                    CategoryAction::Delete(id) => {
                        category_service::delete_category(&client, &token, id).await.map(|_| ())
                    }
                };
                if let Err(e) = outcome {
                    log::warn!("category action {action:?} failed: {e}");
                    categories.update(|s| s.record_error(&e));
                }
                reload.run(());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, token, action, reload);
        }
    });

    reload.run(());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_add_category_request(&name.get(), &description.get()) {
            Ok(payload) => {
                form_error.set(None);
                name.set(String::new());
                description.set(String::new());
                run.run(CategoryAction::Add(payload));
            }
            Err(msg) => form_error.set(Some(msg.to_owned())),
        }
    };

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <h1>"Categories"</h1>
            <StatusBanner message=Signal::derive(move || categories.get().error) error=true/>
            <form class="admin-form" on:submit=on_add>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit">"Add category"</button>
            </form>
            <StatusBanner message=form_error error=true/>
            <p class="admin-summary">
                {move || {
                    let state = categories.get();
                    format!("{} categories, {} active", state.items.len(), state.active_count())
                }}
            </p>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Slug"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        categories
                            .get()
                            .items
                            .into_iter()
                            .map(|c| {
                                let toggle_id = c.id.clone();
                                let delete_id = c.id.clone();
                                view! {
                                    <tr>
                                        <td>{c.name}</td>
                                        <td>{c.slug}</td>
                                        <td>{status_label(c.is_active)}</td>
                                        <td>
                                            <button on:click=move |_| {
                                                run.run(CategoryAction::Toggle(toggle_id.clone()));
                                            }>{toggle_label(c.is_active)}</button>
                                            <button on:click=move |_| {
                                                run.run(CategoryAction::Delete(delete_id.clone()));
                                            }>"Delete"</button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
