//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::routes;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <main class="home-page">
            <h1>"LearnHub"</h1>
            <p>"Courses taught by working instructors."</p>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| {
                    view! {
                        <a class="login-button" href=routes::SIGN_IN>"Sign in"</a>
                        <a class="login-button" href=routes::SIGN_UP>"Sign up"</a>
                    }
                }
            >
                <a class="login-button" href=routes::DASHBOARD>"Go to dashboard"</a>
            </Show>
        </main>
    }
}
