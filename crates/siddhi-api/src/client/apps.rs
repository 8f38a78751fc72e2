//! App management endpoints.

use tracing::debug;

use super::{SiddhiClient, endpoint, ensure_success};
use crate::error::ApiResult;
use crate::http::{ApiRequest, ApiResponse, HttpBackend, HttpMethod, RequestBody};
use crate::models::{ChangeOutcome, ErrorBody};

const APPS_PATH: &str = "siddhi-apps";

impl<B: HttpBackend> SiddhiClient<B> {
    /// Names of the apps active on the worker.
    ///
    /// A non-2xx status is returned as [`crate::error::ApiError::RequestFailed`].
    pub async fn active_apps(&self) -> ApiResult<Vec<String>> {
        let url = endpoint(&self.apps_host, &[APPS_PATH])?;
        let response = self
            .backend
            .send(ApiRequest::new(HttpMethod::Get, url.clone(), RequestBody::Empty))
            .await?;
        let names: Vec<String> = ensure_success(response, &url)?.json()?;
        debug!(count = names.len(), "listed active apps");
        Ok(names)
    }

    /// Upload an app source to the worker.
    pub(crate) async fn deploy_app(&self, source: &str) -> ApiResult<ChangeOutcome> {
        let url = endpoint(&self.apps_host, &[APPS_PATH])?;
        let request = ApiRequest::new(HttpMethod::Put, url, RequestBody::Text(source.to_string()));
        let response = self.backend.send(request).await?;
        change_outcome(&response)
    }

    /// Remove the app named `app_name` from the worker.
    pub(crate) async fn delete_app(&self, app_name: &str) -> ApiResult<ChangeOutcome> {
        let url = endpoint(&self.apps_host, &[APPS_PATH, app_name])?;
        let request = ApiRequest::new(HttpMethod::Delete, url, RequestBody::Empty);
        let response = self.backend.send(request).await?;
        change_outcome(&response)
    }
}

/// A 2xx status applies the change; otherwise the JSON error body's
/// `message` explains the refusal. A body that is not JSON is an error.
fn change_outcome(response: &ApiResponse) -> ApiResult<ChangeOutcome> {
    if response.is_success() {
        return Ok(ChangeOutcome::Applied);
    }

    let body: ErrorBody = response.json()?;
    let message = body
        .message
        .unwrap_or_else(|| format!("HTTP {}", response.status));
    Ok(ChangeOutcome::Refused(message))
}
