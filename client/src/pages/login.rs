//! Sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits credentials through the session layer, stores the resulting
//! session in context, and hands over to the dashboard index which picks the
//! role's landing route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::SigninRequest;
use crate::state::auth::{AuthState, SessionError, SharedTokenStore};
use crate::util::routes;

/// Trim and check the form fields.
///
/// # Errors
///
/// Returns the message to show when a field is empty.
pub fn validate_signin_input(email: &str, password: &str) -> Result<SigninRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(SigninRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Message shown for a failed sign-in.
#[must_use]
pub fn signin_error_message(err: &SessionError) -> String {
    match err {
        SessionError::Api(api) if api.is_unauthorized() => "Invalid email or password.".to_owned(),
        SessionError::Api(api) => api.user_message(),
        SessionError::MissingToken | SessionError::MalformedToken => {
            "Sign-in failed: the server returned an unusable session.".to_owned()
        }
        SessionError::ExpiredToken => "Sign-in failed: the session has already expired.".to_owned(),
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<ApiClient>();
    let store = expect_context::<SharedTokenStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signin_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let now = crate::util::clock::now_secs();
                match crate::state::auth::sign_in(&client, store.as_ref(), &request, now).await {
                    Ok(state) => {
                        auth.set(state);
                        info.set(String::new());
                        navigate(routes::DASHBOARD, NavigateOptions::default());
                    }
                    Err(e) => info.set(signin_error_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &store, &navigate, auth, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"LearnHub"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href=routes::SIGN_UP>"Create one"</a>
                </p>
            </div>
        </div>
    }
}
