//! Public configuration for the Siddhi client.
//!
//! Hosts, credentials and transport settings are passed in explicitly;
//! nothing here reads the environment.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Default host of the app management endpoints.
pub const DEFAULT_APPS_HOST: &str = "https://localhost:9443";

/// Default host of the store query endpoint.
pub const DEFAULT_QUERY_HOST: &str = "https://localhost:7443";

/// Basic authentication credentials.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// A pre-encoded `user:password` token, sent as-is after `Basic `.
    Token(String),
    /// Plain user name and password, encoded on use.
    UserPassword { username: String, password: String },
}

impl Credentials {
    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            Self::Token(token) => format!("Basic {token}"),
            Self::UserPassword { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
            }
        }
    }
}

// Keeps secrets out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(..)"),
            Self::UserPassword { username, .. } => f
                .debug_struct("UserPassword")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}

/// Configuration for the Siddhi client.
///
/// # Example
///
/// ```
/// use siddhi_api::{Credentials, SiddhiClientConfig};
/// use std::time::Duration;
///
/// let config = SiddhiClientConfig::new()
///     .with_apps_host("https://worker:9443")
///     .with_credentials(Credentials::UserPassword {
///         username: "admin".into(),
///         password: "admin".into(),
///     })
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct SiddhiClientConfig {
    /// Base URL of the app management API
    pub(crate) apps_host: String,
    /// Base URL of the store query API
    pub(crate) query_host: String,
    /// Basic auth credentials, if any
    pub(crate) credentials: Option<Credentials>,
    /// Skip TLS certificate validation
    pub(crate) accept_invalid_certs: bool,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for SiddhiClientConfig {
    fn default() -> Self {
        Self {
            apps_host: DEFAULT_APPS_HOST.to_string(),
            query_host: DEFAULT_QUERY_HOST.to_string(),
            credentials: None,
            accept_invalid_certs: false,
            timeout: Duration::from_secs(30),
            user_agent: concat!("siddhi-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SiddhiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the app management API.
    ///
    /// Defaults to `https://localhost:9443`.
    #[must_use]
    pub fn with_apps_host(mut self, host: impl Into<String>) -> Self {
        self.apps_host = host.into();
        self
    }

    /// Set the base URL of the store query API.
    ///
    /// Defaults to `https://localhost:7443`.
    #[must_use]
    pub fn with_query_host(mut self, host: impl Into<String>) -> Self {
        self.query_host = host.into();
        self
    }

    /// Set basic auth credentials.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set optional basic auth credentials.
    #[must_use]
    pub fn with_optional_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Accept self-signed or otherwise invalid TLS certificates.
    ///
    /// Off by default. Only meant for local development workers.
    #[must_use]
    pub const fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn apps_host(&self) -> &str {
        &self.apps_host
    }

    pub fn query_host(&self) -> &str {
        &self.query_host
    }

    pub const fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}
