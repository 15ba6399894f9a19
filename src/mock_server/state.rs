//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Backand API server.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// One object collection.
#[derive(Debug, Default)]
pub struct Collection {
    next_id: u64,
    rows: BTreeMap<u64, Map<String, Value>>,
}

impl Collection {
    /// Insert an object, assigning the next ID. Returns the stored object.
    pub fn insert(&mut self, mut object: Map<String, Value>) -> &Map<String, Value> {
        self.next_id += 1;
        let id = self.next_id;
        object.insert("id".to_string(), Value::from(id));
        self.rows.entry(id).or_insert(object)
    }

    /// Get an object by ID.
    pub fn get(&self, id: u64) -> Option<&Map<String, Value>> {
        self.rows.get(&id)
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One page of objects in ID order. Pages are 1-indexed.
    pub fn page(&self, page_size: u32, page_number: u32) -> Vec<&Map<String, Value>> {
        let start = (page_number.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        self.rows
            .values()
            .skip(start)
            .take(page_size as usize)
            .collect()
    }
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Application name expected in token requests and the `AppName` header.
    pub app_name: String,

    /// Token accepted in the `AnonymousToken` header.
    pub anonymous_token: String,

    /// Registered users: username to password.
    pub users: HashMap<String, String>,

    /// Access tokens issued by the token endpoint.
    pub issued_tokens: HashSet<String>,

    /// Object collections indexed by object type.
    pub collections: HashMap<String, Collection>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new(app_name: &str, anonymous_token: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            anonymous_token: anonymous_token.to_string(),
            ..Self::default()
        }
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Register a user.
    pub fn with_user(mut self, username: &str, password: &str) -> Self {
        self.users
            .insert(username.to_string(), password.to_string());
        self
    }

    /// Add an empty collection.
    pub fn with_collection(mut self, object_type: &str) -> Self {
        self.collections.entry(object_type.to_string()).or_default();
        self
    }

    /// Add an object to a collection, creating the collection if needed.
    ///
    /// Non-object values are ignored.
    pub fn with_object(mut self, object_type: &str, object: Value) -> Self {
        if let Value::Object(map) = object {
            self.collections
                .entry(object_type.to_string())
                .or_default()
                .insert(map);
        }
        self
    }

    /// Check a password grant and issue a token on success.
    pub fn grant(&mut self, username: &str, password: &str, app_name: &str) -> Option<String> {
        let valid = app_name == self.app_name
            && self.users.get(username).is_some_and(|p| p == password);
        if !valid {
            return None;
        }

        let token = format!("mock-token-{}", self.issued_tokens.len() + 1);
        self.issued_tokens.insert(token.clone());
        Some(token)
    }

    /// Whether an access token was issued by this server.
    pub fn is_issued(&self, token: &str) -> bool {
        self.issued_tokens.contains(token)
    }

    /// Get a collection by object type.
    pub fn collection(&self, object_type: &str) -> Option<&Collection> {
        self.collections.get(object_type)
    }

    /// Get a mutable collection by object type.
    pub fn collection_mut(&mut self, object_type: &str) -> Option<&mut Collection> {
        self.collections.get_mut(object_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_add_and_get_object() {
        let state = MockState::new("app", "anon").with_object("items", json!({"name": "widget"}));

        let items = state.collection("items").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items.get(1).unwrap()["name"], "widget");
    }

    #[test]
    fn test_collection_paging() {
        let mut state = MockState::new("app", "anon");
        for i in 0..5 {
            state = state.with_object("items", json!({"n": i}));
        }

        let items = state.collection("items").unwrap();
        assert_eq!(items.page(2, 1).len(), 2);
        assert_eq!(items.page(2, 3).len(), 1);
        assert_eq!(items.page(2, 3)[0]["n"], 4);
        assert!(items.page(2, 4).is_empty());
    }

    #[test]
    fn test_grant_checks_credentials() {
        let mut state = MockState::new("app", "anon").with_user("alice", "pw");

        assert!(state.grant("alice", "wrong", "app").is_none());
        assert!(state.grant("alice", "pw", "other-app").is_none());

        let token = state.grant("alice", "pw", "app").unwrap();
        assert!(state.is_issued(&token));
    }
}
