//! Dashboard page, the authenticated landing route.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let user_store = store.clone();
    let user_id = move || user_store.user_id().unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <p>"Signed in as user " <span class="user-id">{user_id}</span></p>
            <nav class="dashboard-nav">
                <A href="/profile">"Profile"</A>
                <button class="auth-button" on:click=move |_| store.logout()>
                    "Log Out"
                </button>
            </nav>
        </div>
    }
}
