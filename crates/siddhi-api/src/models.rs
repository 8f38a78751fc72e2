//! Wire types of the Siddhi management API.

use serde::{Deserialize, Serialize};

/// Error body returned by the worker on a refused deploy or delete.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /stores/query`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoreQueryRequest<'a> {
    pub app_name: &'a str,
    pub query: &'a str,
}

/// Response of `POST /stores/query`.
#[derive(Debug, Deserialize)]
pub(crate) struct StoreQueryResponse {
    #[serde(alias = "Records")]
    pub records: Vec<Vec<serde_json::Value>>,
}

/// Outcome of a deploy or delete the worker answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChangeOutcome {
    Applied,
    Refused(String),
}

/// Render one field of a store query record.
pub(crate) fn field_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
