//! Static route table.
//!
//! Each route declares an [`Access`] tag that the navigation guard checks on
//! every transition. Views are bound to these routes in `app.rs`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Access requirement declared by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Only reachable with an active session.
    RequiresAuth,
    /// Only reachable without an active session.
    RequiresGuest,
    /// Reachable by everyone.
    Public,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub access: Access,
}

pub const LOGIN_PATH: &str = "/login";
pub const ROOT_PATH: &str = "/";

pub const DASHBOARD: RouteDef = RouteDef { path: ROOT_PATH, name: "dashboard", access: Access::RequiresAuth };
pub const LOGIN: RouteDef = RouteDef { path: LOGIN_PATH, name: "login", access: Access::RequiresGuest };
pub const REGISTER: RouteDef = RouteDef { path: "/register", name: "register", access: Access::RequiresGuest };
pub const PROFILE: RouteDef = RouteDef { path: "/profile", name: "profile", access: Access::RequiresAuth };

pub static ROUTES: [RouteDef; 4] = [DASHBOARD, LOGIN, REGISTER, PROFILE];

/// Look up the route registered for `path`.
///
/// A single trailing slash is ignored, so `/profile/` resolves like
/// `/profile`.
pub fn find(path: &str) -> Option<&'static RouteDef> {
    let normalized = match path.strip_suffix('/') {
        Some("") | None => path,
        Some(stripped) => stripped,
    };
    ROUTES.iter().find(|route| route.path == normalized)
}
