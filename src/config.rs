//! Client configuration.
//!
//! Credentials are read once at construction and never change afterwards.
//! Endpoints default to the hosted Backand API but can be pointed elsewhere
//! (a staging deployment or a local mock server).

use std::env;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::error::{BackandError, Result};

/// Token endpoint of the hosted Backand API.
pub const DEFAULT_TOKEN_URL: &str = "https://api.backand.com:8080/token";
/// REST base URL of the hosted Backand API.
pub const DEFAULT_REST_URL: &str = "https://api.backand.com:8078";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("backand-rs/", env!("CARGO_PKG_VERSION"));
const GRANT_TYPE: &str = "password";

const ENV_USERNAME: &str = "BACKAND_USERNAME";
const ENV_PASSWORD: &str = "BACKAND_PASSWORD";
const ENV_APP_NAME: &str = "BACKAND_APPNAME";
const ENV_ANONYMOUS_TOKEN: &str = "BACKAND_ANONYMOUS_TOKEN";
const ENV_TOKEN_URL: &str = "BACKAND_TOKEN_URL";
const ENV_REST_URL: &str = "BACKAND_REST_URL";
const ENV_TIMEOUT_SECS: &str = "BACKAND_TIMEOUT_SECS";

/// Account credentials used for the password grant and anonymous reads.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    app_name: String,
    anonymous_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("app_name", &self.app_name)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Create credentials from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`BackandError::ConfigMissing`] if any value is empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        app_name: impl Into<String>,
        anonymous_token: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Self {
            username: username.into(),
            password: password.into(),
            app_name: app_name.into(),
            anonymous_token: anonymous_token.into(),
        };

        let missing: Vec<&str> = [
            (ENV_ANONYMOUS_TOKEN, &credentials.anonymous_token),
            (ENV_APP_NAME, &credentials.app_name),
            (ENV_USERNAME, &credentials.username),
            (ENV_PASSWORD, &credentials.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(missing_error(&missing));
        }

        Ok(credentials)
    }

    /// Read credentials from `BACKAND_USERNAME`, `BACKAND_PASSWORD`,
    /// `BACKAND_APPNAME` and `BACKAND_ANONYMOUS_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`BackandError::ConfigMissing`] naming every variable that is
    /// unset or empty.
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| env::var(name).unwrap_or_default();
        Self::new(
            read(ENV_USERNAME),
            read(ENV_PASSWORD),
            read(ENV_APP_NAME),
            read(ENV_ANONYMOUS_TOKEN),
        )
    }

    /// The account username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The application name sent as the `AppName` header.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The token sent as the `AnonymousToken` header for anonymous reads.
    pub fn anonymous_token(&self) -> &str {
        &self.anonymous_token
    }

    /// Form body for the password-grant token request.
    pub(crate) fn token_request(&self) -> TokenRequest<'_> {
        TokenRequest {
            username: &self.username,
            password: &self.password,
            appname: &self.app_name,
            grant_type: GRANT_TYPE,
        }
    }
}

fn missing_error(missing: &[&str]) -> BackandError {
    BackandError::ConfigMissing(format!(
        "set the environment variables BACKAND_ANONYMOUS_TOKEN, BACKAND_APPNAME, \
         BACKAND_USERNAME and BACKAND_PASSWORD (missing: {})",
        missing.join(", ")
    ))
}

/// Form-encoded body of the token request.
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub appname: &'a str,
    pub grant_type: &'static str,
}

/// Backand endpoint locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Full URL of the token endpoint.
    pub token_url: Url,
    /// REST base URL; object routes live under `1/objects/`.
    pub rest_url: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: Url::parse(DEFAULT_TOKEN_URL).expect("default token URL is valid"),
            rest_url: Url::parse(DEFAULT_REST_URL).expect("default REST URL is valid"),
        }
    }
}

impl Endpoints {
    /// Create endpoints from URL strings.
    ///
    /// The REST base is normalized to end with `/` so relative object paths
    /// join beneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if either URL is invalid.
    pub fn new(token_url: &str, rest_url: &str) -> Result<Self> {
        let rest_url_str = if rest_url.ends_with('/') {
            rest_url.to_string()
        } else {
            format!("{rest_url}/")
        };

        Ok(Self {
            token_url: Url::parse(token_url)?,
            rest_url: Url::parse(&rest_url_str)?,
        })
    }

    /// Endpoints for a single server exposing `/token` and the object routes,
    /// such as a local mock.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn single_host(base_url: &str) -> Result<Self> {
        let base = base_url.trim_end_matches('/');
        Self::new(&format!("{base}/token"), base)
    }
}

/// Transport configuration for the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Where to send requests.
    pub endpoints: Endpoints,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientOptions {
    /// Defaults overridden by `BACKAND_TOKEN_URL`, `BACKAND_REST_URL` and
    /// `BACKAND_TIMEOUT_SECS` when set.
    ///
    /// # Errors
    ///
    /// Returns [`BackandError::UrlError`] if an override URL is invalid, or
    /// [`BackandError::InvalidConfig`] if the timeout is not a whole number of
    /// seconds.
    pub fn from_env() -> Result<Self> {
        let mut options = Self::default();

        let token_url = env::var(ENV_TOKEN_URL).ok();
        let rest_url = env::var(ENV_REST_URL).ok();
        if token_url.is_some() || rest_url.is_some() {
            options.endpoints = Endpoints::new(
                token_url.as_deref().unwrap_or(DEFAULT_TOKEN_URL),
                rest_url.as_deref().unwrap_or(DEFAULT_REST_URL),
            )?;
        }

        if let Ok(secs) = env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                BackandError::InvalidConfig(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{secs}'"
                ))
            })?;
            options.timeout = Duration::from_secs(secs);
        }

        Ok(options)
    }

    /// Replace the endpoints.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Replace the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
