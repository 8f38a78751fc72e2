//! Store query endpoint.

use tracing::debug;

use super::{SiddhiClient, endpoint, ensure_success};
use crate::error::ApiResult;
use crate::http::{ApiRequest, HttpBackend, HttpMethod, RequestBody};
use crate::models::{StoreQueryRequest, StoreQueryResponse, field_text};

impl<B: HttpBackend> SiddhiClient<B> {
    /// Run `query` against the stores of `app_name` on the query host.
    ///
    /// Returns every record with its fields rendered as text. Non-2xx
    /// statuses and malformed bodies are errors.
    pub async fn store_query(&self, app_name: &str, query: &str) -> ApiResult<Vec<Vec<String>>> {
        let url = endpoint(&self.query_host, &["stores", "query"])?;
        let payload = serde_json::to_value(StoreQueryRequest { app_name, query })?;
        let request = ApiRequest::new(HttpMethod::Post, url.clone(), RequestBody::Json(payload));

        let response = ensure_success(self.backend.send(request).await?, &url)?;
        let parsed: StoreQueryResponse = response.json()?;
        debug!(app = %app_name, records = parsed.records.len(), "store query returned");

        Ok(parsed
            .records
            .iter()
            .map(|record| record.iter().map(field_text).collect())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::fake_client;
    use crate::error::ApiError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[tokio::test]
    async fn test_store_query_posts_structured_body() {
        let backend = FakeBackend::new().with_response(
            HttpMethod::Post,
            "/stores/query",
            CannedResponse::json(r#"{"records":[["1","apple",3.5],["2",null,true]]}"#),
        );
        let client = fake_client(backend);

        let records = client
            .store_query("Orders", "from OrderTable select *")
            .await
            .unwrap();
        assert_eq!(
            records,
            vec![vec!["1", "apple", "3.5"], vec!["2", "", "true"]]
        );

        let request = &client.backend().requests()[0];
        assert_eq!(request.url.as_str(), "https://worker:7443/stores/query");
        assert_eq!(
            request.body,
            RequestBody::Json(json!({"appName": "Orders", "query": "from OrderTable select *"}))
        );
    }

    #[tokio::test]
    async fn test_store_query_empty_records() {
        let backend = FakeBackend::new().with_response(
            HttpMethod::Post,
            "/stores/query",
            CannedResponse::json(r#"{"Records":[]}"#),
        );
        let records = fake_client(backend)
            .store_query("Orders", "from T select *")
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_store_query_failures() {
        let backend = FakeBackend::new().with_response(
            HttpMethod::Post,
            "/stores/query",
            CannedResponse::status(500, r#"{"message":"no such table"}"#),
        );
        let result = fake_client(backend).store_query("A", "from T select *").await;
        assert!(matches!(
            result,
            Err(ApiError::RequestFailed { status: 500, .. })
        ));

        let backend = FakeBackend::new().with_response(
            HttpMethod::Post,
            "/stores/query",
            CannedResponse::json(r#"{"rows":[]}"#),
        );
        let result = fake_client(backend).store_query("A", "from T select *").await;
        assert!(matches!(result, Err(ApiError::JsonParse(_))));
    }
}
