//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route transition is checked here before its view renders. The guard
//! only reads the authentication status; it never touches the session.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{self, Access, LOGIN_PATH, ROOT_PATH, RouteDef};

/// Outcome of evaluating a single navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Continue to the requested path unchanged.
    Proceed,
    /// Send the visitor to another path instead.
    Redirect(&'static str),
}

impl NavigationDecision {
    pub fn is_proceed(self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Decide a navigation from the target's access tag and the current status.
pub fn evaluate(access: Access, authenticated: bool) -> NavigationDecision {
    match access {
        Access::RequiresAuth if !authenticated => NavigationDecision::Redirect(LOGIN_PATH),
        Access::RequiresGuest if authenticated => NavigationDecision::Redirect(ROOT_PATH),
        _ => NavigationDecision::Proceed,
    }
}

/// Decide a navigation to a registered route.
pub fn check_route(route: &RouteDef, authenticated: bool) -> NavigationDecision {
    let decision = evaluate(route.access, authenticated);
    if let NavigationDecision::Redirect(target) = decision {
        log::debug!("guard: {} ({}) -> redirect {target}", route.path, route.name);
    }
    decision
}

/// Decide a navigation to an arbitrary path.
///
/// Paths missing from the route table carry no access tag and proceed.
pub fn check_path(path: &str, authenticated: bool) -> NavigationDecision {
    routes::find(path).map_or(NavigationDecision::Proceed, |route| check_route(route, authenticated))
}
