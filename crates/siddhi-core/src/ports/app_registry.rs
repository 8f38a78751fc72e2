//! Remote app registry port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{DeployedApp, OperationResult, QueryResult, StateQuery};

/// Errors from registry port operations.
///
/// These are hard failures. A registry that answers a deploy or delete with a
/// structured error message is not an error here: that comes back as
/// [`OperationResult::Failed`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry refused a request with a non-success status.
    #[error("Request rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// The rejected request
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The registry answered with a body that could not be understood.
    #[error("Invalid registry response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client configuration error (bad URL, bad credentials).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for registry port operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Port trait for the remote worker's app management API.
///
/// The implementation lives in `siddhi-api`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRegistryPort: Send + Sync {
    /// List the names of the apps currently active on the worker.
    async fn list_active_apps(&self) -> RegistryResult<Vec<DeployedApp>>;

    /// Deploy an app from its definition source.
    async fn deploy(&self, source: &str) -> RegistryResult<OperationResult>;

    /// Delete a deployed app by name.
    async fn delete(&self, app_name: &str) -> RegistryResult<OperationResult>;

    /// Read every record of a table in the context of an app.
    async fn execute_state_query(&self, query: &StateQuery) -> RegistryResult<QueryResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn AppRegistryPort>) {}

    #[test]
    fn test_error_display() {
        let err = RegistryError::Rejected {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request rejected with status 401: Unauthorized"
        );
    }
}
