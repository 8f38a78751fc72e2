//! Port trait implementation for `SiddhiClient`.
//!
//! Implements the core-owned `AppRegistryPort` and converts between the wire
//! types of this crate and core domain types.

use async_trait::async_trait;
use siddhi_core::ports::{AppRegistryPort, RegistryError, RegistryResult};
use siddhi_core::{DeployedApp, OperationResult, QueryRecord, QueryResult, StateQuery};

use crate::client::SiddhiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;
use crate::models::ChangeOutcome;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `RegistryError`.
fn map_error(err: ApiError) -> RegistryError {
    match err {
        ApiError::RequestFailed { status, url } => RegistryError::Rejected {
            status,
            message: url,
        },
        ApiError::InvalidResponse { message } => RegistryError::InvalidResponse { message },
        ApiError::Configuration { message } => RegistryError::Configuration { message },
        ApiError::Network(e) => RegistryError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => RegistryError::Configuration {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => RegistryError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

fn to_operation_result(outcome: ChangeOutcome, applied: OperationResult) -> OperationResult {
    match outcome {
        ChangeOutcome::Applied => applied,
        ChangeOutcome::Refused(message) => OperationResult::Failed(message),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + 'static> AppRegistryPort for SiddhiClient<B> {
    async fn list_active_apps(&self) -> RegistryResult<Vec<DeployedApp>> {
        let names = self.active_apps().await.map_err(map_error)?;
        Ok(names.into_iter().map(DeployedApp::new).collect())
    }

    async fn deploy(&self, source: &str) -> RegistryResult<OperationResult> {
        let outcome = self.deploy_app(source).await.map_err(map_error)?;
        Ok(to_operation_result(outcome, OperationResult::Deployed))
    }

    async fn delete(&self, app_name: &str) -> RegistryResult<OperationResult> {
        let outcome = self.delete_app(app_name).await.map_err(map_error)?;
        Ok(to_operation_result(outcome, OperationResult::Deleted))
    }

    async fn execute_state_query(&self, query: &StateQuery) -> RegistryResult<QueryResult> {
        let records = self
            .store_query(&query.app_name, &query.query_text())
            .await
            .map_err(map_error)?;
        Ok(QueryResult::new(
            records.into_iter().map(QueryRecord).collect(),
        ))
    }
}
