//! Backand API client library.
//!
//! A Rust library for the Backand backend-as-a-service REST API. The client
//! obtains a bearer token with the password grant and issues object calls
//! (create, list, get) against the REST endpoints.
//!
//! # Quick Start
//!
//! ```no_run
//! use backand::{Access, BackandClient, PageParams};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> backand::Result<()> {
//!     // Create client from environment variables
//!     let client = BackandClient::from_env()?;
//!
//!     // Create an object (requests a fresh token first)
//!     let created = client.create_object("items", json!({"name": "widget"})).await?;
//!     println!("Created: {}", created.body());
//!
//!     // List objects anonymously
//!     let page = client
//!         .get_object_list("items", PageParams::default(), Access::Anonymous)
//!         .await?;
//!     println!("Items: {}", page.body());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Responses
//!
//! Raw client methods return an [`ApiResponse`]: the decoded JSON body tagged
//! as success or failure. Error payloads from the server are returned, not
//! raised; only configuration and argument problems produce `Err`.
//!
//! For typed models, implement [`BackandObject`] and use the [`Create`],
//! [`Get`] and [`List`] traits, which turn error payloads into
//! [`BackandError::Api`].
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `BACKAND_USERNAME` (required) - Account username
//! - `BACKAND_PASSWORD` (required) - Account password
//! - `BACKAND_APPNAME` (required) - Application name
//! - `BACKAND_ANONYMOUS_TOKEN` (required) - Token for anonymous reads
//! - `BACKAND_TOKEN_URL` (optional) - Token endpoint (defaults to `https://api.backand.com:8080/token`)
//! - `BACKAND_REST_URL` (optional) - REST base URL (defaults to `https://api.backand.com:8078`)
//! - `BACKAND_TIMEOUT_SECS` (optional) - Request timeout in seconds (defaults to 30)

pub mod cli;
mod client;
mod config;
mod error;
pub mod output;
mod pagination;
mod payload;
mod response;
mod session;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{BackandClient, Headers};
pub use config::{ClientOptions, Credentials, Endpoints, DEFAULT_REST_URL, DEFAULT_TOKEN_URL};
pub use error::{BackandError, Result};
pub use pagination::{ObjectPage, PageParams, DEFAULT_PAGE_SIZE};
pub use payload::Payload;
pub use response::ApiResponse;
pub use session::{Access, Session};

// Re-export traits
pub use traits::{BackandObject, Create, Get, List};
