use super::*;

#[test]
fn auth_request_serializes_action_lowercase() {
    let req = AuthRequest::new(AuthAction::Register, "a@b.com", "pw");
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "action": "register", "email": "a@b.com", "password": "pw" }));
}

#[test]
fn auth_request_debug_redacts_password() {
    let req = AuthRequest::new(AuthAction::Login, "a@b.com", "hunter2");
    let debug = format!("{req:?}");
    assert!(debug.contains("a@b.com"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn generic_failure_messages_per_action() {
    assert_eq!(AuthAction::Login.generic_failure(), "Login failed");
    assert_eq!(AuthAction::Register.generic_failure(), "Registration failed");
}

#[test]
fn auth_success_accepts_string_user_id() {
    let body: AuthSuccess = serde_json::from_str(r#"{"token":"T1","user_id":"U1","expires":3600}"#).unwrap();
    assert_eq!(body, AuthSuccess { token: "T1".to_owned(), user_id: "U1".to_owned() });
}

#[test]
fn auth_success_accepts_integer_user_id() {
    let body: AuthSuccess = serde_json::from_str(r#"{"token":"T1","user_id":42}"#).unwrap();
    assert_eq!(body.user_id, "42");
}

#[test]
fn auth_success_rejects_fractional_user_id() {
    assert!(serde_json::from_str::<AuthSuccess>(r#"{"token":"T1","user_id":4.5}"#).is_err());
}

#[test]
fn auth_failure_body_message_is_optional() {
    let body: AuthFailureBody = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
    assert_eq!(body.message, None);
}

#[test]
fn raw_response_success_range() {
    let ok = RawResponse { status: 201, body: String::new() };
    let redirect = RawResponse { status: 302, body: String::new() };
    let denied = RawResponse { status: 401, body: String::new() };
    assert!(ok.is_success());
    assert!(!redirect.is_success());
    assert!(!denied.is_success());
}

#[test]
fn rejected_error_displays_server_message_verbatim() {
    let err = AuthError::Rejected { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(err.to_string(), "Invalid credentials");
}
