//! Own-profile page: view and edit name, phone and bio.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_nav::DashboardNav;
use crate::components::status_banner::StatusBanner;
use crate::net::http::ApiClient;
use crate::net::types::{UpdateProfileRequest, UserProfile};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

fn changed(current: Option<&str>, edited: &str) -> Option<String> {
    let edited = edited.trim();
    (current.unwrap_or_default() != edited).then(|| edited.to_owned())
}

/// Patch body holding only the fields that differ from `current`.
///
/// Returns `None` when nothing changed or the name was blanked.
#[must_use]
pub fn build_profile_update(current: &UserProfile, name: &str, phone: &str, bio: &str) -> Option<UpdateProfileRequest> {
    if name.trim().is_empty() {
        return None;
    }
    let update = UpdateProfileRequest {
        name: changed(Some(current.name.as_str()), name),
        phone: changed(current.phone.as_deref(), phone),
        bio: changed(current.bio.as_deref(), bio),
        avatar: None,
    };
    (update != UpdateProfileRequest::default()).then_some(update)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    let profile = RwSignal::new(None::<UserProfile>);
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let apply = move |p: UserProfile| {
        name.set(p.name.clone());
        phone.set(p.phone.clone().unwrap_or_default());
        bio.set(p.bio.clone().unwrap_or_default());
        profile.set(Some(p));
    };

    let load_client = client.clone();
    Effect::new(move || {
        let Some(token) = auth.with(|s| s.token.clone()) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let client = load_client.clone();
            leptos::task::spawn_local(async move {
                match crate::net::user_service::get_profile(&client, &token).await {
                    Ok(envelope) => match envelope.into_data() {
                        Ok(p) => apply(p),
                        Err(e) => info.set(Some(e.to_string())),
                    },
                    Err(e) => info.set(Some(e.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&load_client, token, apply);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (Some(current), Some(token)) = (profile.get(), auth.get_untracked().token) else {
            return;
        };
        let Some(update) = build_profile_update(&current, &name.get(), &phone.get(), &bio.get()) else {
            info.set(Some("Nothing to save.".to_owned()));
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match crate::net::user_service::update_profile(&client, &token, &update).await {
                    Ok(envelope) => {
                        if let Some(p) = envelope.data {
                            apply(p);
                        }
                        info.set(Some(envelope.message.unwrap_or_else(|| "Profile saved.".to_owned())));
                    }
                    Err(e) => info.set(Some(e.user_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, token, update);
        }
    };

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <h1>"My profile"</h1>
            <p class="profile-email">{move || profile.get().map(|p| p.email).unwrap_or_default()}</p>
            <form class="admin-form" on:submit=on_save>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="tel"
                    placeholder="Phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <textarea
                    class="login-input"
                    placeholder="Bio"
                    prop:value=move || bio.get()
                    on:input=move |ev| bio.set(event_target_value(&ev))
                ></textarea>
                <button class="login-button" type="submit" disabled=move || busy.get() || profile.get().is_none()>
                    "Save"
                </button>
            </form>
            <StatusBanner message=info/>
        </div>
    }
}
