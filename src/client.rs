//! Backand API client.
//!
//! Holds the credentials, the bearer-token session and the HTTP connection
//! pool. Every request method returns the decoded JSON body tagged as an
//! [`ApiResponse`]; remote failures never surface as `Err`.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::config::{ClientOptions, Credentials, Endpoints};
use crate::error::{BackandError, Result};
use crate::pagination::PageParams;
use crate::payload::Payload;
use crate::response::ApiResponse;
use crate::session::{Access, Session};

/// Request headers keyed by their canonical name.
pub type Headers = BTreeMap<&'static str, String>;

const OBJECTS_PATH: &str = "1/objects";

/// Backand REST API client.
///
/// The token obtained by [`get_token`](Self::get_token) is kept in memory and
/// reused by authenticated calls until the next successful token request
/// replaces it. Nothing refreshes it automatically: [`create_object`](Self::create_object)
/// requests a new token every time, while [`get_object_list`](Self::get_object_list)
/// and [`get_single_object`](Self::get_single_object) use whatever the session
/// holds.
///
/// This struct is cheaply cloneable. Clones share the connection pool and the
/// session; concurrent token requests follow last-writer-wins.
///
/// # Example
///
/// ```no_run
/// use backand::{Access, BackandClient, PageParams};
///
/// # async fn example() -> backand::Result<()> {
/// let client = BackandClient::from_env()?;
///
/// let token = client.get_token().await;
/// assert!(token.body().get("access_token").is_some());
///
/// let items = client
///     .get_object_list("items", PageParams::new(10, 1), Access::Authenticated)
///     .await?;
/// println!("{}", items.body());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BackandClient {
    http: Client,
    endpoints: Arc<Endpoints>,
    credentials: Arc<Credentials>,
    session: Arc<RwLock<Session>>,
}

impl std::fmt::Debug for BackandClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackandClient")
            .field("rest_url", &self.endpoints.rest_url.as_str())
            .field("app_name", &self.credentials.app_name())
            .finish_non_exhaustive()
    }
}

impl BackandClient {
    /// Create a client from environment variables.
    ///
    /// Requires `BACKAND_USERNAME`, `BACKAND_PASSWORD`, `BACKAND_APPNAME` and
    /// `BACKAND_ANONYMOUS_TOKEN`. `BACKAND_TOKEN_URL`, `BACKAND_REST_URL` and
    /// `BACKAND_TIMEOUT_SECS` optionally override the transport defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BackandError::ConfigMissing`] if any required variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        let options = ClientOptions::from_env()?;
        Self::new(credentials, options)
    }

    /// Create a client with explicit credentials and transport options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: Credentials, options: ClientOptions) -> Result<Self> {
        let http = Client::builder()
            .user_agent(options.user_agent)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(options.timeout)
            .build()
            .map_err(BackandError::HttpError)?;

        Ok(Self {
            http,
            endpoints: Arc::new(options.endpoints),
            credentials: Arc::new(credentials),
            session: Arc::new(RwLock::new(Session::default())),
        })
    }

    /// The endpoints this client talks to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The credentials this client was built with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a token has been obtained.
    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    /// Request a bearer token with the password grant.
    ///
    /// On success the session is replaced with the returned `access_token`
    /// and `token_type`, and the full token payload is returned. On failure
    /// the session is left as it was and the server's error payload is
    /// returned instead. A 2xx body that is not a JSON object with a string
    /// `access_token` counts as a failure.
    #[tracing::instrument(skip(self))]
    pub async fn get_token(&self) -> ApiResponse {
        let request = self
            .http
            .post(self.endpoints.token_url.clone())
            .form(&self.credentials.token_request());

        match ApiResponse::from_send(request.send().await).await {
            ApiResponse::Success { status, body } if !is_grant(&body) => {
                tracing::warn!(status, "Backand token response carried no access_token");
                ApiResponse::Failure {
                    status: Some(status),
                    body,
                }
            }
            ApiResponse::Success { status, body } => {
                let session = Session::from_grant(&body);
                tracing::debug!(token_type = ?session.token_type(), "Stored Backand session token");
                self.replace_session(session);
                ApiResponse::Success { status, body }
            }
            failure => failure,
        }
    }

    /// Headers for a request made with the given access mode.
    ///
    /// Anonymous requests carry only `AnonymousToken`. Authenticated requests
    /// carry `Content-Type`, `Accept`, `Authorization` and `AppName`, with
    /// `Authorization` built from whatever the session currently holds.
    pub fn build_headers(&self, access: Access) -> Headers {
        let mut headers = Headers::new();
        match access {
            Access::Anonymous => {
                headers.insert(
                    "AnonymousToken",
                    self.credentials.anonymous_token().to_string(),
                );
            }
            Access::Authenticated => {
                let authorization = self
                    .session
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .authorization();
                headers.insert("Content-Type", "application/json".to_string());
                headers.insert("Accept", "application/json".to_string());
                headers.insert("Authorization", authorization);
                headers.insert("AppName", self.credentials.app_name().to_string());
            }
        }
        headers
    }

    /// Create an object of the given type.
    ///
    /// Always requests a fresh token first, then POSTs the payload with
    /// `returnObject=true` so the server echoes the created object.
    ///
    /// # Errors
    ///
    /// Returns [`BackandError::InvalidArgument`] if `object_type` is empty or
    /// the payload is JSON `null`; nothing is sent in that case.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_object(
        &self,
        object_type: &str,
        payload: impl Into<Payload>,
    ) -> Result<ApiResponse> {
        let payload = payload.into();
        if object_type.is_empty() || payload.is_null() {
            return Err(BackandError::InvalidArgument(
                "object type and payload are required to create an object".to_string(),
            ));
        }

        let body = payload.into_body()?;
        let url = self.object_url(&[object_type])?;

        self.get_token().await;

        let request = self
            .http
            .post(url)
            .query(&[("returnObject", "true")])
            .body(body);

        Ok(self.send(request, self.build_headers(Access::Authenticated)).await)
    }

    /// List objects of the given type, one page at a time.
    ///
    /// Does not request a token; authenticated access uses the current session.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request URL cannot be built.
    #[tracing::instrument(skip(self))]
    pub async fn get_object_list(
        &self,
        object_type: &str,
        page: PageParams,
        access: Access,
    ) -> Result<ApiResponse> {
        let url = self.object_url(&[object_type])?;
        let request = self.http.get(url).query(&page);

        Ok(self.send(request, self.build_headers(access)).await)
    }

    /// Fetch a single object by type and ID.
    ///
    /// Does not request a token; authenticated access uses the current session.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request URL cannot be built.
    #[tracing::instrument(skip(self))]
    pub async fn get_single_object(
        &self,
        object_type: &str,
        object_id: &str,
        access: Access,
    ) -> Result<ApiResponse> {
        let url = self.object_url(&[object_type, object_id])?;
        let request = self.http.get(url);

        Ok(self.send(request, self.build_headers(access)).await)
    }

    /// `{REST}/1/objects/<segment>/...` with each segment percent-encoded.
    fn object_url(&self, segments: &[&str]) -> Result<Url> {
        let mut path = OBJECTS_PATH.to_string();
        for segment in segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        Ok(self.endpoints.rest_url.join(&path)?)
    }

    async fn send(&self, request: RequestBuilder, headers: Headers) -> ApiResponse {
        let request = headers
            .iter()
            .fold(request, |request, (name, value)| request.header(*name, value));

        ApiResponse::from_send(request.send().await).await
    }

    pub(crate) fn replace_session(&self, session: Session) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
    }
}

/// Whether a token response body is a usable password grant.
fn is_grant(body: &Value) -> bool {
    body.get("access_token").is_some_and(Value::is_string)
}
