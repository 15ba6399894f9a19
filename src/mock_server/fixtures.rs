//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use serde_json::{json, Value};

use crate::{Credentials, Result};

use super::state::MockState;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Username of the default user.
    pub const USERNAME: &'static str = "test@example.com";
    /// Password of the default user.
    pub const PASSWORD: &'static str = "password123";
    /// Application name of the default scenario.
    pub const APP_NAME: &'static str = "testapp";
    /// Anonymous token of the default scenario.
    pub const ANONYMOUS_TOKEN: &'static str = "anon-0000-1111";

    /// Credentials matching the default scenario.
    pub fn credentials() -> Result<Credentials> {
        Credentials::new(
            Self::USERNAME,
            Self::PASSWORD,
            Self::APP_NAME,
            Self::ANONYMOUS_TOKEN,
        )
    }

    /// An item object as a client would submit it.
    pub fn item(name: &str, price: f64) -> Value {
        json!({
            "name": name,
            "description": format!("{name} for testing"),
            "price": price,
        })
    }

    /// A user profile object.
    pub fn profile(first_name: &str, last_name: &str) -> Value {
        json!({
            "firstName": first_name,
            "lastName": last_name,
            "email": format!("{}@example.com", first_name.to_lowercase()),
        })
    }

    /// The state served by [`MockServer::start`](super::MockServer::start).
    ///
    /// One user, three `items` and an empty `profiles` collection.
    pub fn default_state() -> MockState {
        MockState::new(Self::APP_NAME, Self::ANONYMOUS_TOKEN)
            .with_user(Self::USERNAME, Self::PASSWORD)
            .with_object("items", Self::item("Widget", 9.99))
            .with_object("items", Self::item("Gadget", 24.5))
            .with_object("items", Self::item("Gizmo", 3.25))
            .with_collection("profiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_contents() {
        let state = Fixtures::default_state();
        assert_eq!(state.collection("items").unwrap().len(), 3);
        assert!(state.collection("profiles").unwrap().is_empty());
        assert!(state.users.contains_key(Fixtures::USERNAME));
    }

    #[test]
    fn test_fixture_credentials_are_valid() {
        let creds = Fixtures::credentials().unwrap();
        assert_eq!(creds.app_name(), Fixtures::APP_NAME);
    }
}
