//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
#[cfg(feature = "ssr")]
use leptos_meta::MetaTags;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::config::ApiConfig;
use crate::net::http::{ApiClient, UnavailableTransport};
use crate::pages::{
    admin::AdminHomePage, admin_categories::AdminCategoriesPage, admin_users::AdminUsersPage,
    dashboard::DashboardIndexPage, home::HomePage, login::SignInPage, overview::InstructorOverviewPage,
    profile::ProfilePage, signup::SignUpPage,
};
use crate::state::auth::{AuthState, SharedTokenStore, default_token_store, restore};

/// Seconds between session expiry checks in the browser.
#[cfg(feature = "hydrate")]
const EXPIRY_CHECK_INTERVAL_SECS: u64 = 30;

/// HTML shell rendered on the server for SSR + hydration.
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn api_client() -> ApiClient {
    match ApiClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            log::error!("api client unavailable: {e}");
            ApiClient::new(ApiConfig::from_env(), Arc::new(UnavailableTransport))
        }
    }
}

/// Root application component.
///
/// Provides the session, API client, and token store contexts, restores the
/// persisted session once mounted, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::hydrating());
    let store: SharedTokenStore = default_token_store();

    provide_context(auth);
    provide_context(api_client());
    provide_context(store.clone());

    // Effects only run on the client, so the server render stays in the
    // hydrating state and the browser restores from localStorage.
    let restore_store = store.clone();
    Effect::new(move || {
        let state = restore(restore_store.as_ref(), crate::util::clock::now_secs());
        auth.set(state);
    });

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let expiry_store = store.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(EXPIRY_CHECK_INTERVAL_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let now = crate::util::clock::now_secs();
                let next = auth.with_untracked(|state| {
                    crate::state::auth::teardown_if_expired(state, expiry_store.as_ref(), now)
                });
                if let Some(next) = next {
                    auth.set(next);
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = store;
    }

    view! {
        <Title text="LearnHub"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signin")) view=SignInPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignUpPage/>
                <Route path=StaticSegment("dashboard") view=DashboardIndexPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("overview")) view=InstructorOverviewPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("profile")) view=ProfilePage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("admin")) view=AdminHomePage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("admin"), StaticSegment("categories"))
                    view=AdminCategoriesPage
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("admin"), StaticSegment("users"))
                    view=AdminUsersPage
                />
            </Routes>
        </Router>
    }
}
