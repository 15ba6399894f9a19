//! Mock Backand API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Backand
//! token and object endpoints for integration and end-to-end testing. Unlike
//! wiremock which mocks at the HTTP level per-test, this server issues real
//! tokens, checks them on later requests and keeps created objects, enabling
//! realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use backand::mock_server::MockServer;
//! use backand::Access;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = server.client().unwrap();
//!
//!     // Server comes with default fixtures
//!     let token = client.get_token().await;
//!     assert!(token.is_success());
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{Collection, MockState};
