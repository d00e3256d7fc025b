//! Login page for email + access-code auth.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

const CODE_LEN: usize = 6;

fn normalize_code_input(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

fn validate_request_code_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    Ok(email.to_owned())
}

fn validate_verify_code_input(email: &str, code: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let code = code.trim();
    if email.is_empty() || code.chars().count() != CODE_LEN {
        return Err("Enter both email and 6-char code.");
    }
    Ok((email.to_owned(), code.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_request_code_input(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Requesting code...".to_owned());
        echoed_code.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_email_login_code(&email_value).await {
                Ok(code_opt) => {
                    echoed_code.set(code_opt);
                    info.set("Code sent. Check your email.".to_owned());
                }
                Err(e) => info.set(format!("Code request failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, code_value) = match validate_verify_code_input(&email.get(), &code.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_email_login_code(&email_value, &code_value).await {
                Ok(()) => {
                    // Full reload so App re-resolves the session from the new cookie.
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    info.set(format!("Verification failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, code_value);
    };

    view! {
        <div class="login-page">
            <div class="card login-card">
                <h1>"Taskdeck"</h1>
                <p class="card__description">"Sign in with an email access code"</p>
                <form class="login-form" on:submit=on_request_code>
                    <input
                        class="input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send Code"
                    </button>
                </form>
                <form class="login-form" on:submit=on_verify_code>
                    <input
                        class="input input--code"
                        type="text"
                        maxlength="6"
                        placeholder="ABC234"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || echoed_code.get().is_some()>
                    <p class="login-message login-message--code">
                        "Code: "
                        <span>{move || echoed_code.get().unwrap_or_default()}</span>
                    </p>
                </Show>
            </div>
        </div>
    }
}
