use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::fixture;
use crate::models::document::Document;

/// Errors raised while loading the document collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML fixture: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported fixture format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("duplicate document id '{0}'")]
    DuplicateId(String),
}

/// How `GET /api/docs/{id}` resolves its path parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocLookup {
    /// Match on `id` only.
    #[default]
    Id,
    /// Match on `id`, falling back to `slug`.
    IdOrSlug,
}

/// Read-only access to the documentation collection.
///
/// Implementations are immutable after construction, so they can be shared
/// across request handlers without locking.
pub trait DocumentStore: Send + Sync {
    /// All documents, ordered by `order` ascending with ties kept in load order.
    fn all(&self) -> &[Document];

    /// Find a single document according to the lookup rule.
    fn find(&self, key: &str, lookup: DocLookup) -> Option<&Document> {
        let docs = self.all();
        docs.iter().find(|d| d.id == key).or_else(|| match lookup {
            DocLookup::Id => None,
            DocLookup::IdOrSlug => docs
                .iter()
                .find(|d| d.slug.as_deref().is_some_and(|s| slug_matches(s, key))),
        })
    }
}

/// Slugs are stored with or without a leading `/` (e.g. `/guide-deploy`).
fn slug_matches(slug: &str, key: &str) -> bool {
    slug.trim_start_matches('/') == key.trim_start_matches('/')
}

/// The in-memory document collection, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Vec<Document>,
}

impl InMemoryDocumentStore {
    /// Build a store from documents in load order.
    ///
    /// Documents are sorted by `order` (stable), and duplicate ids are rejected.
    pub fn new(mut documents: Vec<Document>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(StoreError::DuplicateId(doc.id.clone()));
            }
        }

        documents.sort_by_key(|d| d.order);
        Ok(Self { documents })
    }

    /// The fixture compiled into the binary.
    pub fn bundled() -> Result<Self, StoreError> {
        Self::new(fixture::bundled_documents()?)
    }

    /// Load a fixture file from disk (`.json`, `.yaml` or `.yml`).
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        Self::new(fixture::load_documents(path)?)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn all(&self) -> &[Document] {
        &self.documents
    }
}
