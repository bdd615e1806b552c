//! Email + password form shared by the login and register pages.

#[cfg(test)]
#[path = "credentials_form_test.rs"]
mod credentials_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::AuthAction;
use crate::routes::ROOT_PATH;
use crate::state::session::SessionStore;

const MISSING_FIELDS: &str = "Enter both email and password.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Trim and check form input before it is sent to the endpoint.
fn validate_credentials_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn heading(action: AuthAction) -> &'static str {
    match action {
        AuthAction::Login => "Sign In",
        AuthAction::Register => "Create Account",
    }
}

fn submit_label(action: AuthAction, busy: bool) -> &'static str {
    match (action, busy) {
        (AuthAction::Login, false) => "Sign In",
        (AuthAction::Login, true) => "Signing in...",
        (AuthAction::Register, false) => "Register",
        (AuthAction::Register, true) => "Registering...",
    }
}

#[component]
pub fn CredentialsForm(action: AuthAction) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match store.authenticate(action, &email_value, &password_value).await {
                Ok(_) => navigate(ROOT_PATH, NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{heading(action)}</h1>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || submit_label(action, busy.get())}
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
