//! Request bodies for object creation.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Body of a create request.
///
/// Structured values are serialized to JSON text before sending; raw strings
/// go out exactly as given.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A JSON value to serialize.
    Json(Value),
    /// Pre-encoded body text.
    Raw(String),
}

impl Payload {
    /// Build a payload from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Whether this payload is JSON `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Json(Value::Null))
    }

    /// The body text to send.
    pub(crate) fn into_body(self) -> Result<String> {
        match self {
            Self::Json(value) => Ok(serde_json::to_string(&value)?),
            Self::Raw(text) => Ok(text),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Raw(text),
            other => Self::Json(other),
        }
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}
