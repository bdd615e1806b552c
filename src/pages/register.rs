//! Registration page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::credentials_form::CredentialsForm;
use crate::net::types::AuthAction;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <CredentialsForm action=AuthAction::Register/>
        <p class="auth-switch">"Already registered? " <A href="/login">"Sign in"</A></p>
    }
}
