//! HTTP backend abstraction for the Siddhi management API.
//!
//! The client talks to a [`HttpBackend`] rather than to reqwest directly, so
//! tests can swap in [`testing::FakeBackend`]. The backend only moves bytes;
//! status handling and JSON decoding belong to the client.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::SiddhiClientConfig;
use crate::error::{ApiError, ApiResult};

// ============================================================================
// Request / Response
// ============================================================================

/// HTTP methods used by the management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        })
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Sent as `text/plain; charset=utf-8`.
    Text(String),
    /// Sent as `application/json`.
    Json(serde_json::Value),
}

/// A request to send through a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub body: RequestBody,
}

impl ApiRequest {
    pub const fn new(method: HttpMethod, url: Url, body: RequestBody) -> Self {
        Self { method, url, body }
    }
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can send a request and return the response.
///
/// Any status code is a successful send. Only transport failures are errors.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Authentication and the user agent are installed as default headers, so
/// every request carries them.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &SiddhiClientConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(credentials) = &config.credentials {
            let mut value = HeaderValue::from_str(&credentials.header_value()).map_err(|e| {
                ApiError::Configuration {
                    message: format!("invalid authorization header: {e}"),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, request.url);
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Text(text) => builder
                .header(CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(text),
            RequestBody::Json(value) => builder.json(&value),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "received response");

        Ok(ApiResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Canned response for the fake backend.
    #[derive(Debug, Clone)]
    pub struct CannedResponse {
        pub status: u16,
        pub body: String,
    }

    impl CannedResponse {
        /// A 200 response with a JSON body.
        pub fn json(body: impl Into<String>) -> Self {
            Self::status(200, body)
        }

        /// A response with an arbitrary status and body.
        pub fn status(status: u16, body: impl Into<String>) -> Self {
            Self {
                status,
                body: body.into(),
            }
        }
    }

    struct Route {
        method: HttpMethod,
        path_contains: String,
        response: CannedResponse,
    }

    /// A fake HTTP backend that records requests and returns canned responses.
    ///
    /// Routes are matched in registration order on method and path substring.
    /// Unmatched requests get an empty 404. Clones share the request log.
    #[derive(Clone, Default)]
    pub struct FakeBackend {
        routes: Arc<Mutex<Vec<Route>>>,
        requests: Arc<Mutex<Vec<ApiRequest>>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for a method and path fragment.
        #[must_use]
        pub fn with_response(
            self,
            method: HttpMethod,
            path_contains: &str,
            response: CannedResponse,
        ) -> Self {
            self.routes.lock().unwrap().push(Route {
                method,
                path_contains: path_contains.to_string(),
                response,
            });
            self
        }

        /// Every request sent so far, in order.
        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Requests sent with the given method, in order.
        pub fn requests_with(&self, method: HttpMethod) -> Vec<ApiRequest> {
            self.requests()
                .into_iter()
                .filter(|request| request.method == method)
                .collect()
        }

        fn find_response(&self, request: &ApiRequest) -> Option<CannedResponse> {
            let routes = self.routes.lock().unwrap();
            routes
                .iter()
                .find(|route| {
                    route.method == request.method
                        && request.url.path().contains(&route.path_contains)
                })
                .map(|route| route.response.clone())
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
            let response = self
                .find_response(&request)
                .unwrap_or_else(|| CannedResponse::status(404, ""));
            self.requests.lock().unwrap().push(request);
            Ok(ApiResponse::new(response.status, response.body))
        }
    }
}
