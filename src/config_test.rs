use super::*;

#[test]
fn parse_endpoint_defaults_when_unset() {
    assert_eq!(parse_endpoint(None).unwrap(), DEFAULT_AUTH_ENDPOINT);
}

#[test]
fn parse_endpoint_defaults_when_blank() {
    assert_eq!(parse_endpoint(Some("   ")).unwrap(), DEFAULT_AUTH_ENDPOINT);
}

#[test]
fn parse_endpoint_trims_whitespace() {
    assert_eq!(
        parse_endpoint(Some("  https://auth.example.test/api/auth.php \n")).unwrap(),
        "https://auth.example.test/api/auth.php"
    );
}

#[test]
fn parse_endpoint_rejects_relative_url() {
    let err = parse_endpoint(Some("/backend/api/auth.php")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidEndpoint("/backend/api/auth.php".to_owned()));
    assert!(err.to_string().contains(ENDPOINT_ENV_VAR));
}

#[test]
fn default_config_points_at_local_backend() {
    assert_eq!(AuthConfig::default().endpoint, "http://localhost:8000/backend/api/auth.php");
}

#[test]
fn from_env_reads_runtime_override() {
    // Only this test touches the variable.
    unsafe { std::env::set_var(ENDPOINT_ENV_VAR, "http://127.0.0.1:9000/auth") };
    let cfg = AuthConfig::from_env().unwrap();
    unsafe { std::env::remove_var(ENDPOINT_ENV_VAR) };

    assert_eq!(cfg.endpoint, "http://127.0.0.1:9000/auth");
}
