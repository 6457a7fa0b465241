//! Account registration page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::{Role, SignupRequest};
use crate::util::routes;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim and check the registration fields. Only `student` and `instructor`
/// may self-register; any other selection leaves the role to the backend.
///
/// # Errors
///
/// Returns the message to show for the first invalid field.
pub fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    let role = Role::parse(role).filter(|r| matches!(r, Role::Student | Role::Instructor));
    Ok(SignupRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned(), role })
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup_input(&name.get(), &email.get(), &password.get(), &role.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth_service::signup(&client, &request).await {
                    Ok(resp) => info.set(
                        resp.message
                            .unwrap_or_else(|| "Account created. Check your email to verify it.".to_owned()),
                    ),
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <select class="login-input" on:change=move |ev| role.set(event_target_value(&ev))>
                        <option value="student" selected=move || role.get() == "student">"Student"</option>
                        <option value="instructor" selected=move || role.get() == "instructor">"Instructor"</option>
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=routes::SIGN_IN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
