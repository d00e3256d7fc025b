//! Top navigation bar with the signed-in identity and logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.user = None);
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        });
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Taskdeck"
            </a>
            <Show when=move || auth.with(|a| a.user.is_some())>
                <a class="nav-bar__link" href="/">
                    "Dashboard"
                </a>
                <a class="nav-bar__link" href="/projects">
                    "Projects"
                </a>
                <span class="nav-bar__spacer"></span>
                <span class="nav-bar__self">
                    {move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
                </span>
                <button class="btn btn--outline" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
