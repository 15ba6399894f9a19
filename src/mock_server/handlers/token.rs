//! Token endpoint handler.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

/// Lifetime reported for issued tokens, in seconds.
const TOKEN_LIFETIME_SECS: u64 = 86_399;

/// Password-grant form body.
#[derive(Debug, Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
    pub appname: String,
    pub grant_type: String,
}

/// POST /token
pub async fn issue_token(
    State(state): State<Arc<RwLock<MockState>>>,
    Form(form): Form<TokenForm>,
) -> Response {
    if form.grant_type != "password" {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "unsupported_grant_type"
            })),
        )
            .into_response();
    }

    let mut state = state.write().await;

    match state.grant(&form.username, &form.password, &form.appname) {
        Some(access_token) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "access_token": access_token,
                "token_type": "bearer",
                "expires_in": TOKEN_LIFETIME_SECS,
                "appName": form.appname,
                "username": form.username,
            })),
        )
            .into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "The user name or password is incorrect."
            })),
        )
            .into_response(),
    }
}
