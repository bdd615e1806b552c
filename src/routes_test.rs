use super::*;

#[test]
fn table_declares_expected_access_tags() {
    let tags: Vec<(&str, Access)> = ROUTES.iter().map(|r| (r.path, r.access)).collect();
    assert_eq!(
        tags,
        vec![
            ("/", Access::RequiresAuth),
            ("/login", Access::RequiresGuest),
            ("/register", Access::RequiresGuest),
            ("/profile", Access::RequiresAuth),
        ]
    );
}

#[test]
fn route_names_are_unique() {
    let mut names: Vec<&str> = ROUTES.iter().map(|r| r.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ROUTES.len());
}

#[test]
fn find_returns_registered_route() {
    assert_eq!(find("/profile"), Some(&PROFILE));
    assert_eq!(find("/"), Some(&DASHBOARD));
}

#[test]
fn find_ignores_trailing_slash() {
    assert_eq!(find("/register/"), Some(&REGISTER));
}

#[test]
fn find_unknown_path_returns_none() {
    assert_eq!(find("/settings"), None);
    assert_eq!(find(""), None);
}
