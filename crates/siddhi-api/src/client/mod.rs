//! Siddhi client for the app management and store query endpoints.

mod apps;
mod query;

use url::Url;

use crate::config::SiddhiClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{ApiResponse, HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Siddhi client using the reqwest HTTP backend.
pub type DefaultSiddhiClient = SiddhiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the management API of one Siddhi worker.
///
/// Generic over the HTTP backend so tests can run without a network.
/// Use [`DefaultSiddhiClient`] in production code.
pub struct SiddhiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) apps_host: Url,
    pub(crate) query_host: Url,
}

impl DefaultSiddhiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &SiddhiClientConfig) -> ApiResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(config, backend)
    }
}

impl<B: HttpBackend> SiddhiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend. Credentials and TLS settings
    /// are the backend's concern; only the hosts are read here.
    pub fn with_backend(config: &SiddhiClientConfig, backend: B) -> ApiResult<Self> {
        Ok(Self {
            backend,
            apps_host: parse_host(&config.apps_host)?,
            query_host: parse_host(&config.query_host)?,
        })
    }

    /// The backend requests go through.
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

fn parse_host(host: &str) -> ApiResult<Url> {
    let url = Url::parse(host)?;
    if url.cannot_be_a_base() {
        return Err(ApiError::Configuration {
            message: format!("'{host}' cannot be used as a base URL"),
        });
    }
    Ok(url)
}

/// Append percent-encoded path segments to a host URL.
pub(crate) fn endpoint(host: &Url, segments: &[&str]) -> ApiResult<Url> {
    let mut url = host.clone();
    url.path_segments_mut()
        .map_err(|()| ApiError::Configuration {
            message: format!("'{host}' cannot be used as a base URL"),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Turn a non-2xx response into [`ApiError::RequestFailed`].
pub(crate) fn ensure_success(response: ApiResponse, url: &Url) -> ApiResult<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::RequestFailed {
            status: response.status,
            url: url.to_string(),
        })
    }
}
