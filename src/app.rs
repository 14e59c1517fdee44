use std::sync::Arc;
use std::time::Instant;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::AppConfig;
use crate::db::store::{DocLookup, DocumentStore};
use crate::search::engine::SearchEngine;

/// Shared state handed to every handler. Everything in it is read-only.
#[derive(Clone)]
pub struct AppState {
    pub document_store: Arc<dyn DocumentStore>,
    pub search_engine: SearchEngine,
    pub lookup: DocLookup,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(document_store: Arc<dyn DocumentStore>, config: &AppConfig) -> Self {
        let search_engine =
            SearchEngine::with_default_limit(document_store.clone(), config.search.default_limit);

        Self {
            document_store,
            search_engine,
            lookup: config.docs.lookup,
            started_at: Instant::now(),
        }
    }
}

/// Build the API router with logging, CORS and panic recovery applied.
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route("/api/health", get(api::health::health_handler))
        .route("/api/docs", get(api::docs::list_docs_handler))
        .route("/api/docs/{id}", get(api::docs::get_doc_handler))
        .route("/api/search", post(api::search::search_handler))
        .fallback(api::errors::not_found_handler)
        .method_not_allowed_fallback(api::errors::not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config))
                .layer(CatchPanicLayer::custom(api::errors::panic_response)),
        )
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
