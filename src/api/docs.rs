use serde::{Deserialize, Serialize};

use crate::db::store::{DocLookup, DocumentStore};
use crate::error::AppError;
use crate::models::document::Document;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocListMeta {
    pub total: usize,
}

/// Response for `GET /api/docs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocListResponse {
    pub data: Vec<Document>,
    pub meta: DocListMeta,
}

/// Response for `GET /api/docs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocResponse {
    pub data: Document,
}

/// The full, unfiltered collection in store order.
pub fn list_documents(store: &dyn DocumentStore) -> DocListResponse {
    let data = store.all().to_vec();
    DocListResponse {
        meta: DocListMeta { total: data.len() },
        data,
    }
}

pub fn get_document(
    store: &dyn DocumentStore,
    key: &str,
    lookup: DocLookup,
) -> Result<DocResponse, AppError> {
    store
        .find(key, lookup)
        .cloned()
        .map(|data| DocResponse { data })
        .ok_or_else(|| AppError::NotFound("Not found".into()))
}

/// Axum handler for `GET /api/docs`.
pub async fn list_docs_handler(
    axum::extract::State(state): axum::extract::State<crate::app::AppState>,
) -> axum::Json<DocListResponse> {
    axum::Json(list_documents(state.document_store.as_ref()))
}

/// Axum handler for `GET /api/docs/{id}`.
pub async fn get_doc_handler(
    axum::extract::State(state): axum::extract::State<crate::app::AppState>,
    axum::extract::Path(id): axum::extract::Path<String>,
) -> Result<axum::Json<DocResponse>, AppError> {
    let response = get_document(state.document_store.as_ref(), &id, state.lookup)?;
    Ok(axum::Json(response))
}
