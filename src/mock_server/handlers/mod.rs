//! HTTP request handlers for the mock server.

pub mod objects;
pub mod token;

pub use objects::*;
pub use token::*;

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::mock_server::state::MockState;

/// Who made a request, as established from its headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    /// Presented the anonymous token.
    Anonymous,
    /// Presented a bearer token issued by this server.
    User,
}

/// JSON error body with a `message` field.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "message": message.into() })),
    )
        .into_response()
}

/// Identify the caller from `Authorization`/`AppName` or `AnonymousToken`.
///
/// A bearer token, when present, must be valid; the anonymous token is only
/// consulted when no `Authorization` header was sent.
pub fn authorize(state: &MockState, headers: &HeaderMap) -> Result<Caller, Response> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    if let Some(authorization) = header("authorization") {
        let token = authorization
            .trim()
            .split_once(' ')
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim());

        let app_matches = header("appname") == Some(state.app_name.as_str());
        return match token {
            Some(token) if state.is_issued(token) && app_matches => Ok(Caller::User),
            _ => Err(error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid or missing bearer token",
            )),
        };
    }

    match header("anonymoustoken") {
        Some(token) if token == state.anonymous_token => Ok(Caller::Anonymous),
        _ => Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Authorization has been denied for this request.",
        )),
    }
}
