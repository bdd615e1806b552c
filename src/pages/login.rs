//! Login page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::credentials_form::CredentialsForm;
use crate::net::types::AuthAction;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <CredentialsForm action=AuthAction::Login/>
        <p class="auth-switch">"No account yet? " <A href="/register">"Register"</A></p>
    }
}
