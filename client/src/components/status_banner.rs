//! Inline error/info banner shared by dashboard pages.

use leptos::prelude::*;

/// Shows `message` when it is non-empty; `error` switches the styling.
#[component]
pub fn StatusBanner(#[prop(into)] message: Signal<Option<String>>, #[prop(optional)] error: bool) -> impl IntoView {
    let class = if error { "status-banner status-banner--error" } else { "status-banner" };
    view! {
        <Show when=move || message.get().is_some_and(|m| !m.is_empty())>
            <p class=class>{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
