//! Route wrapper that applies the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app.rs` wraps every route view in `Guarded`. The decision is re-evaluated
//! whenever the session changes, so logging in on `/login` moves the visitor
//! on without a reload.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::guard::{self, NavigationDecision};
use crate::routes::RouteDef;
use crate::state::session::SessionStore;

#[component]
pub fn Guarded(route: RouteDef, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    move || match guard::check_route(&route, store.is_authenticated()) {
        NavigationDecision::Proceed => children().into_any(),
        NavigationDecision::Redirect(target) => view! { <Redirect path=target/> }.into_any(),
    }
}
