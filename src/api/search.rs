use std::time::Instant;

use axum::extract::State;
use axum::Json;

use crate::api::extract::JsonBody;
use crate::app::AppState;
use crate::error::AppError;
use crate::models::search::{SearchMeta, SearchRequest, SearchResponse};
use crate::search::engine::SearchEngine;

/// Core search logic, separated from the HTTP layer for testability.
pub fn process_search(
    engine: &SearchEngine,
    request: &SearchRequest,
) -> Result<SearchResponse, AppError> {
    let started = Instant::now();

    let outcome = engine.search(request).inspect_err(|e| {
        tracing::debug!("Rejected search request: {e}");
    })?;

    let took = format!("{}ms", started.elapsed().as_millis());
    tracing::info!(
        query = %outcome.query,
        results = outcome.results.len(),
        took = %took,
        "Search completed"
    );

    Ok(SearchResponse {
        meta: SearchMeta {
            total: outcome.results.len(),
            query: outcome.query,
            took,
        },
        data: outcome.results,
    })
}

/// Axum handler for `POST /api/search`.
pub async fn search_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<SearchResponse>, AppError> {
    let request =
        SearchRequest::from_json_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let response = process_search(&state.search_engine, &request)?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::store::InMemoryDocumentStore;
    use crate::models::document::Document;

    fn engine() -> SearchEngine {
        let doc = Document {
            id: "sdk-go".to_string(),
            slug: None,
            title: "Go SDK".to_string(),
            description: "Idiomatic Go client".to_string(),
            content: None,
            tags: vec!["golang".to_string()],
            section: "SDKs".to_string(),
            order: 1,
        };
        SearchEngine::new(Arc::new(InMemoryDocumentStore::new(vec![doc]).unwrap()))
    }

    #[test]
    fn test_meta_reports_returned_count_and_raw_query() {
        let response = process_search(&engine(), &SearchRequest::new(" GoLang ")).unwrap();
        assert_eq!(response.meta.total, 1);
        assert_eq!(response.meta.query, " GoLang ");
        assert!(response.meta.took.ends_with("ms"));
        assert_eq!(response.data[0].score, 0.8);
    }

    #[test]
    fn test_total_is_post_truncation() {
        let response =
            process_search(&engine(), &SearchRequest::new("go").with_limit(0)).unwrap();
        assert_eq!(response.meta.total, 0);
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_blank_query_is_bad_request() {
        match process_search(&engine(), &SearchRequest::new("   ")) {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "\"q\" is required"),
            other => panic!("Expected BadRequest error, got: {:?}", other),
        }
    }
}
