//! Admin user management: list, filter, suspend/reactivate, change role, delete.

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_nav::DashboardNav;
use crate::components::status_banner::StatusBanner;
use crate::net::http::ApiClient;
use crate::net::types::{Role, UpdateUserStatusRequest, UserStatus};
use crate::state::auth::AuthState;
use crate::state::users::UsersState;
use crate::util::auth::{install_role_guard, install_unauth_redirect};

/// Status an admin toggles a user to from their current status string.
/// Anything other than `active` is reactivated.
#[must_use]
pub fn next_status(current: Option<&str>) -> UserStatus {
    match current {
        Some("active") => UserStatus::Suspended,
        _ => UserStatus::Active,
    }
}

/// Patch body that only changes the status.
#[must_use]
pub fn status_change(status: UserStatus) -> UpdateUserStatusRequest {
    UpdateUserStatusRequest { status: Some(status), role: None }
}

/// Patch body that only changes the role; `None` for unknown role strings.
#[must_use]
pub fn role_change(role: &str) -> Option<UpdateUserStatusRequest> {
    Role::parse(role).map(|role| UpdateUserStatusRequest { status: None, role: Some(role) })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Update(String, UpdateUserStatusRequest),
    Delete(String),
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    install_role_guard(auth, Role::Admin, navigate);

    let users = RwSignal::new(UsersState::default());

    let reload = {
        let client = client.clone();
        Callback::new(move |()| {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            users.update(UsersState::begin_load);
            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::user_service::get_all_users(&client, &token).await;
                    users.update(|s| s.finish_load(result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, token);
            }
        })
    };

    let run = Callback::new(move |action: UserAction| {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::net::user_service;
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let outcome = match &action {
                    UserAction::Update(id, payload) => {
                        user_service::update_user_status_or_role(&client, &token, id, payload).await.map(|_| ())
                    }
                    UserAction::Delete(id) => user_service::delete_user(&client, &token, id).await.map(|_| ()),
                };
                if let Err(e) = outcome {
                    log::warn!("user action {action:?} failed: {e}");
                    users.update(|s| s.record_error(&e));
                }
                reload.run(());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, token, action, reload);
        }
    });

    // Reload once the restored session supplies a token.
    Effect::new(move || {
        if auth.with(|s| s.token.is_some()) {
            reload.run(());
        }
    });

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <h1>"Users"</h1>
            <StatusBanner message=Signal::derive(move || users.get().error) error=true/>
            <input
                class="login-input"
                type="search"
                placeholder="Filter by name or email"
                prop:value=move || users.get().filter
                on:input=move |ev| users.update(|s| s.filter = event_target_value(&ev))
            />
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .get()
                            .visible()
                            .into_iter()
                            .map(|u| {
                                let status_id = u.id.clone();
                                let role_id = u.id.clone();
                                let delete_id = u.id.clone();
                                let next = next_status(u.status.as_deref());
                                let current_role = u.role_name.clone();
                                view! {
                                    <tr>
                                        <td>{u.name}</td>
                                        <td>{u.email}</td>
                                        <td>
                                            <select on:change=move |ev| {
                                                if let Some(payload) = role_change(&event_target_value(&ev)) {
                                                    run.run(UserAction::Update(role_id.clone(), payload));
                                                }
                                            }>
                                                {Role::ALL
                                                    .iter()
                                                    .map(|r| {
                                                        let selected = r.as_str() == current_role;
                                                        view! {
                                                            <option value=r.as_str() selected=selected>
                                                                {r.as_str()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td>{u.status.unwrap_or_default()}</td>
                                        <td>
                                            <button on:click=move |_| {
                                                run.run(UserAction::Update(status_id.clone(), status_change(next)));
                                            }>
                                                {if next == UserStatus::Active { "Activate" } else { "Suspend" }}
                                            </button>
                                            <button on:click=move |_| {
                                                run.run(UserAction::Delete(delete_id.clone()));
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
