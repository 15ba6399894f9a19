//! Mock Backand API server.
//!
//! Provides an axum-based HTTP server that simulates the Backand API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;
use super::handlers;
use super::state::MockState;
use crate::{BackandClient, ClientOptions, Credentials, Endpoints, Result};

/// A mock Backand API server for testing.
///
/// The server runs in the background and serves both the token endpoint and
/// the object routes from one address.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Fixtures::default_state()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Token and REST endpoints pointing at this server.
    pub fn endpoints(&self) -> Result<Endpoints> {
        Endpoints::single_host(&self.url)
    }

    /// A client for this server using the given credentials.
    pub fn client_with(&self, credentials: Credentials) -> Result<BackandClient> {
        let options = ClientOptions::default().with_endpoints(self.endpoints()?);
        BackandClient::new(credentials, options)
    }

    /// A client for this server using the default fixture credentials.
    pub fn client(&self) -> Result<BackandClient> {
        self.client_with(Fixtures::credentials()?)
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }
}

/// Create the axum router with all routes.
pub(crate) fn router(state: Arc<RwLock<MockState>>) -> Router {
    Router::new()
        .route("/token", post(handlers::issue_token))
        .route(
            "/1/objects/:object_type",
            get(handlers::list_objects).post(handlers::create_object),
        )
        .route("/1/objects/:object_type/:id", get(handlers::get_object))
        // Health check
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
