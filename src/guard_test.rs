use super::*;
use crate::routes::{DASHBOARD, LOGIN, PROFILE, REGISTER, ROUTES};

// =============================================================
// evaluate
// =============================================================

#[test]
fn requires_auth_redirects_to_login_when_logged_out() {
    assert_eq!(evaluate(Access::RequiresAuth, false), NavigationDecision::Redirect("/login"));
}

#[test]
fn requires_auth_proceeds_when_logged_in() {
    assert_eq!(evaluate(Access::RequiresAuth, true), NavigationDecision::Proceed);
}

#[test]
fn requires_guest_redirects_to_root_when_logged_in() {
    assert_eq!(evaluate(Access::RequiresGuest, true), NavigationDecision::Redirect("/"));
}

#[test]
fn requires_guest_proceeds_when_logged_out() {
    assert_eq!(evaluate(Access::RequiresGuest, false), NavigationDecision::Proceed);
}

#[test]
fn public_always_proceeds() {
    assert!(evaluate(Access::Public, false).is_proceed());
    assert!(evaluate(Access::Public, true).is_proceed());
}

// =============================================================
// route table properties
// =============================================================

#[test]
fn every_auth_route_redirects_logged_out_visitors_to_login() {
    for route in ROUTES.iter().filter(|r| r.access == Access::RequiresAuth) {
        assert_eq!(
            check_route(route, false),
            NavigationDecision::Redirect("/login"),
            "route {}",
            route.path
        );
    }
}

#[test]
fn every_guest_route_redirects_logged_in_users_to_root() {
    for route in ROUTES.iter().filter(|r| r.access == Access::RequiresGuest) {
        assert_eq!(check_route(route, true), NavigationDecision::Redirect("/"), "route {}", route.path);
    }
}

#[test]
fn matching_state_proceeds_on_every_route() {
    assert!(check_route(&DASHBOARD, true).is_proceed());
    assert!(check_route(&PROFILE, true).is_proceed());
    assert!(check_route(&LOGIN, false).is_proceed());
    assert!(check_route(&REGISTER, false).is_proceed());
}

// =============================================================
// check_path scenarios
// =============================================================

#[test]
fn logged_out_visitor_requesting_profile_goes_to_login() {
    assert_eq!(check_path("/profile", false), NavigationDecision::Redirect("/login"));
}

#[test]
fn logged_in_user_requesting_login_goes_to_root() {
    assert_eq!(check_path("/login", true), NavigationDecision::Redirect("/"));
}

#[test]
fn unknown_path_proceeds_regardless_of_state() {
    assert!(check_path("/about", false).is_proceed());
    assert!(check_path("/about", true).is_proceed());
}

#[test]
fn trailing_slash_is_guarded_like_bare_path() {
    assert_eq!(check_path("/profile/", false), NavigationDecision::Redirect("/login"));
}
