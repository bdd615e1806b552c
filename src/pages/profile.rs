//! Profile page showing the signed-in account.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let user_store = store.clone();
    let user_id = move || user_store.user_id().unwrap_or_default();

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <dl class="profile-card">
                <dt>"User ID"</dt>
                <dd>{user_id}</dd>
            </dl>
            <A href="/">"Back to dashboard"</A>
            <button class="auth-button" on:click=move |_| store.logout()>
                "Log Out"
            </button>
        </div>
    }
}
