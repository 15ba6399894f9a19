//! Environment-based construction tests.
//!
//! Environment variables are process-global, so every test here holds
//! `ENV_LOCK` while it mutates them.

use std::env;
use std::sync::{Mutex, MutexGuard};

use backand::{BackandClient, BackandError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const REQUIRED: [&str; 4] = [
    "BACKAND_USERNAME",
    "BACKAND_PASSWORD",
    "BACKAND_APPNAME",
    "BACKAND_ANONYMOUS_TOKEN",
];

fn lock_env() -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for name in REQUIRED {
        env::set_var(name, "value");
    }
    for name in ["BACKAND_TOKEN_URL", "BACKAND_REST_URL", "BACKAND_TIMEOUT_SECS"] {
        env::remove_var(name);
    }
    guard
}

#[test]
fn test_from_env_with_all_variables() {
    let _guard = lock_env();

    let client = BackandClient::from_env().unwrap();
    assert_eq!(
        client.endpoints().token_url.as_str(),
        "https://api.backand.com:8080/token"
    );
    assert_eq!(
        client.endpoints().rest_url.as_str(),
        "https://api.backand.com:8078/"
    );
    assert!(!client.is_authenticated());
}

#[test]
fn test_missing_any_variable_constructs_no_client() {
    let _guard = lock_env();

    for name in REQUIRED {
        env::set_var(name, "");
        let result = BackandClient::from_env();
        assert!(
            matches!(result, Err(BackandError::ConfigMissing(_))),
            "{name} empty should fail"
        );

        env::remove_var(name);
        let result = BackandClient::from_env();
        assert!(
            matches!(result, Err(BackandError::ConfigMissing(_))),
            "{name} unset should fail"
        );

        env::set_var(name, "value");
    }
}

#[test]
fn test_endpoint_overrides() {
    let _guard = lock_env();
    env::set_var("BACKAND_TOKEN_URL", "http://localhost:4000/token");
    env::set_var("BACKAND_REST_URL", "http://localhost:4001");

    let client = BackandClient::from_env().unwrap();
    assert_eq!(
        client.endpoints().token_url.as_str(),
        "http://localhost:4000/token"
    );
    assert_eq!(
        client.endpoints().rest_url.as_str(),
        "http://localhost:4001/"
    );

    env::remove_var("BACKAND_TOKEN_URL");
    env::remove_var("BACKAND_REST_URL");
}

#[test]
fn test_invalid_timeout_rejected() {
    let _guard = lock_env();
    env::set_var("BACKAND_TIMEOUT_SECS", "soon");

    let result = BackandClient::from_env();
    env::remove_var("BACKAND_TIMEOUT_SECS");

    assert!(matches!(result, Err(BackandError::InvalidConfig(_))));
}
