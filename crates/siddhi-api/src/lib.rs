#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultSiddhiClient, SiddhiClient};

// Configuration
pub use config::{Credentials, DEFAULT_APPS_HOST, DEFAULT_QUERY_HOST, SiddhiClientConfig};

// Errors
pub use error::{ApiError, ApiResult};

// HTTP seam
pub use http::{ApiRequest, ApiResponse, HttpBackend, HttpMethod, ReqwestBackend, RequestBody};

#[cfg(any(test, feature = "test-utils"))]
pub use http::testing;
