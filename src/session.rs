//! Bearer-token session state.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Which credential a read request presents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Access {
    /// Send only the `AnonymousToken` header.
    #[default]
    Anonymous,
    /// Send the bearer token from the current session.
    Authenticated,
}

impl From<bool> for Access {
    /// `true` means anonymous.
    fn from(anonymous: bool) -> Self {
        if anonymous {
            Self::Anonymous
        } else {
            Self::Authenticated
        }
    }
}

/// The token obtained by the last successful password grant.
///
/// A fresh session holds nothing. It is replaced wholesale on every
/// successful token request and never expires on its own.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
    token_type: Option<String>,
    obtained_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token_type", &self.token_type)
            .field("has_access_token", &self.access_token.is_some())
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

impl Session {
    /// Build a session from a decoded token payload.
    ///
    /// Fields absent from the payload stay unset.
    pub fn from_grant(payload: &Value) -> Self {
        let field = |name: &str| payload.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            access_token: field("access_token"),
            token_type: field("token_type"),
            obtained_at: Some(Utc::now()),
        }
    }

    /// The bearer token, if one has been obtained.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The token type (usually `bearer`), if one has been obtained.
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    /// When the token was stored.
    pub fn obtained_at(&self) -> Option<DateTime<Utc>> {
        self.obtained_at
    }

    /// Whether a token has been stored.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// `Authorization` header value: `"<tokenType> <accessToken>"`.
    ///
    /// Unset fields render as empty strings, so an empty session yields `" "`.
    pub fn authorization(&self) -> String {
        format!(
            "{} {}",
            self.token_type.as_deref().unwrap_or_default(),
            self.access_token.as_deref().unwrap_or_default()
        )
    }
}
