//! Error types for Backand API operations.

use thiserror::Error;

/// Errors that can occur during Backand API operations.
///
/// Remote failures are normally reported through
/// [`ApiResponse::Failure`](crate::ApiResponse::Failure) rather than this
/// type; [`BackandError::Api`] only appears once a caller opts into
/// typed handling via [`ApiResponse::into_result`](crate::ApiResponse::into_result)
/// or the [`Create`](crate::Create)/[`Get`](crate::Get)/[`List`](crate::List) traits.
#[derive(Debug, Error)]
pub enum BackandError {
    /// Configuration is missing or incomplete.
    #[error("Backand configuration required: {0}")]
    ConfigMissing(String),

    /// A configuration value was present but malformed.
    #[error("Invalid Backand configuration: {0}")]
    InvalidConfig(String),

    /// A required argument was missing or empty.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The API returned an error payload.
    #[error("Backand API error{}: {body}", status_suffix(.status))]
    Api {
        status: Option<u16>,
        body: serde_json::Value,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON encoding or decoding error.
    #[error("Failed to parse payload: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

/// Result type alias for Backand operations.
pub type Result<T> = core::result::Result<T, BackandError>;
