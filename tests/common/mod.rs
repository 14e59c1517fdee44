#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;

use devdocs::app::{build_router, AppState};
use devdocs::config::AppConfig;
use devdocs::db::store::{DocLookup, DocumentStore, InMemoryDocumentStore};
use devdocs::models::document::Document;

/// Holds an in-process router wired to a synthetic document store.
pub struct TestEnv {
    pub router: Router,
    pub store: Arc<dyn DocumentStore>,
}

impl TestEnv {
    /// Router over the two-document fixture used throughout the search tests.
    pub fn start() -> Self {
        Self::with_documents(sample_documents())
    }

    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self::with_config(documents, AppConfig::default())
    }

    pub fn with_lookup(documents: Vec<Document>, lookup: DocLookup) -> Self {
        let mut config = AppConfig::default();
        config.docs.lookup = lookup;
        Self::with_config(documents, config)
    }

    pub fn with_config(documents: Vec<Document>, config: AppConfig) -> Self {
        let store: Arc<dyn DocumentStore> = Arc::new(
            InMemoryDocumentStore::new(documents).expect("Failed to build document store"),
        );
        let state = AppState::new(store.clone(), &config);
        let router = build_router(state, &config);

        Self { router, store }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .try_build(self.router.clone())
            .expect("Failed to build TestServer")
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .try_build(self.router.clone())
            .expect("Failed to build TestServer")
    }
}

pub fn document(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    section: &str,
) -> Document {
    Document {
        id: id.to_string(),
        slug: None,
        title: title.to_string(),
        description: description.to_string(),
        content: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        section: section.to_string(),
        order: 0,
    }
}

/// `a` matches "auth" in its title, `b` only in its description.
pub fn sample_documents() -> Vec<Document> {
    vec![
        document(
            "a",
            "Authentication",
            "how to auth",
            &["auth", "oauth"],
            "Getting Started",
        ),
        document(
            "b",
            "Search API",
            "auth is mentioned here too",
            &["search"],
            "Core",
        ),
    ]
}

/// `(id, score)` pairs of a search response body.
pub fn hits(body: &serde_json::Value) -> Vec<(String, f64)> {
    body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|hit| {
            (
                hit["id"].as_str().unwrap().to_string(),
                hit["score"].as_f64().unwrap(),
            )
        })
        .collect()
}
