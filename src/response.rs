//! Decoded API responses.
//!
//! Every request resolves to an [`ApiResponse`]: the JSON body the server sent,
//! tagged with whether the call succeeded. Error payloads are returned, not
//! raised, so callers see exactly what the server said.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::{BackandError, Result};

/// Outcome of a single Backand request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// 2xx response with its decoded body.
    Success { status: u16, body: Value },
    /// Non-2xx response with its decoded body, or a transport failure
    /// (`status: None`) described as `{"error": "<message>"}`.
    Failure { status: Option<u16>, body: Value },
}

impl ApiResponse {
    /// Decode an HTTP response into a tagged payload.
    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = match response.text().await {
            Ok(text) => decode_body(&text),
            Err(e) => return Self::transport_failure(&e),
        };

        if status.is_success() {
            Self::Success {
                status: status.as_u16(),
                body,
            }
        } else {
            tracing::warn!(status = %status, "Backand request failed");
            Self::Failure {
                status: Some(status.as_u16()),
                body,
            }
        }
    }

    /// Outcome of a `send()` call, with transport errors folded into `Failure`.
    pub(crate) async fn from_send(
        result: core::result::Result<Response, reqwest::Error>,
    ) -> Self {
        match result {
            Ok(response) => Self::from_response(response).await,
            Err(e) => Self::transport_failure(&e),
        }
    }

    fn transport_failure(error: &reqwest::Error) -> Self {
        tracing::warn!(error = %error, "Backand request did not complete");
        Self::Failure {
            status: error.status().map(|s| s.as_u16()),
            body: json!({ "error": error.to_string() }),
        }
    }

    /// Whether the server answered with a 2xx status.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// HTTP status, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Success { status, .. } => Some(*status),
            Self::Failure { status, .. } => *status,
        }
    }

    /// The decoded body, success or failure alike.
    pub fn body(&self) -> &Value {
        match self {
            Self::Success { body, .. } | Self::Failure { body, .. } => body,
        }
    }

    /// Consume the response, keeping only the decoded body.
    pub fn into_body(self) -> Value {
        match self {
            Self::Success { body, .. } | Self::Failure { body, .. } => body,
        }
    }

    /// Convert into a `Result`, turning failures into [`BackandError::Api`].
    ///
    /// # Errors
    ///
    /// Returns [`BackandError::Api`] carrying the error payload on failure.
    pub fn into_result(self) -> Result<Value> {
        match self {
            Self::Success { body, .. } => Ok(body),
            Self::Failure { status, body } => Err(BackandError::Api { status, body }),
        }
    }

    /// Decode a successful body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`BackandError::Api`] on failure or [`BackandError::ParseError`]
    /// if the body does not match `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.into_result()?;
        Ok(serde_json::from_value(body)?)
    }
}

/// Decode a response body; non-JSON text is kept as a JSON string.
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
