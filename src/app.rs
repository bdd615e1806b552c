//! Root application component with routing and the session context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::config::AuthConfig;
use crate::net::transport::HttpTransport;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::routes::{DASHBOARD, LOGIN, PROFILE, REGISTER};
use crate::state::session::SessionStore;
use crate::util::navigation::LocationNavigator;
use crate::util::storage::LocalStorage;

/// Build the browser session store from config.
///
/// A bad endpoint override is not fatal; the default endpoint is used.
fn browser_session_store() -> SessionStore {
    let config = AuthConfig::from_env().unwrap_or_else(|e| {
        log::warn!("{e}; using default auth endpoint");
        AuthConfig::default()
    });
    log::debug!("auth endpoint: {}", config.endpoint);
    SessionStore::new(Arc::new(LocalStorage), Arc::new(HttpTransport::new(&config)), Arc::new(LocationNavigator))
}

/// Root application component.
///
/// Provides the session store and sets up client-side routing. Every route
/// is wrapped in `Guarded`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(browser_session_store());

    view! {
        <Title text="Profile Card"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Guarded route=DASHBOARD><DashboardPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <Guarded route=LOGIN><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <Guarded route=REGISTER><RegisterPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <Guarded route=PROFILE><ProfilePage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}
