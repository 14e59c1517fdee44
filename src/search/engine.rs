use std::sync::Arc;

use thiserror::Error;

use crate::db::store::DocumentStore;
use crate::models::document::{Document, SearchResult};
use crate::models::search::SearchRequest;
use crate::search::query::NormalizedQuery;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("\"q\" is required")]
    InvalidQuery,
}

/// Where a candidate matched the query, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchLocation {
    Title,
    Tag,
    Body,
}

impl MatchLocation {
    pub fn score(self) -> f64 {
        match self {
            MatchLocation::Title => 1.0,
            MatchLocation::Tag => 0.8,
            MatchLocation::Body => 0.5,
        }
    }

    /// Classify a document against a lowercased needle, or `None` if it is
    /// not a candidate.
    pub fn classify(doc: &Document, needle: &str) -> Option<Self> {
        if !doc.haystack().contains(needle) {
            return None;
        }

        if doc.title.to_lowercase().contains(needle) {
            Some(MatchLocation::Title)
        } else if doc.tags.iter().any(|t| t.to_lowercase().contains(needle)) {
            Some(MatchLocation::Tag)
        } else {
            Some(MatchLocation::Body)
        }
    }
}

/// Results of a single search, before any transport framing.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    /// The query as originally supplied.
    pub query: String,
}

/// Score, filter, sort and truncate `documents` for an already validated query.
///
/// Equal scores keep the relative order of `documents`.
pub fn rank(documents: &[Document], query: &NormalizedQuery) -> Vec<SearchResult> {
    let mut matches: Vec<(MatchLocation, &Document)> = documents
        .iter()
        .filter_map(|doc| MatchLocation::classify(doc, &query.needle).map(|loc| (loc, doc)))
        .filter(|(_, doc)| match &query.section {
            Some(section) => doc.section.to_lowercase() == *section,
            None => true,
        })
        .collect();

    tracing::debug!(
        query = %query.needle,
        candidates = matches.len(),
        "Scored search candidates"
    );

    // `sort_by_key` is stable, which keeps store order among equal scores.
    matches.sort_by_key(|(loc, _)| *loc);

    matches
        .into_iter()
        .take(query.take())
        .map(|(loc, doc)| SearchResult {
            document: doc.clone(),
            score: loc.score(),
        })
        .collect()
}

/// Substring search over a read-only document store.
#[derive(Clone)]
pub struct SearchEngine {
    store: Arc<dyn DocumentStore>,
    default_limit: usize,
}

impl SearchEngine {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_default_limit(store, DEFAULT_LIMIT)
    }

    pub fn with_default_limit(store: Arc<dyn DocumentStore>, default_limit: usize) -> Self {
        Self {
            store,
            default_limit,
        }
    }

    /// Run a search. Fails only when `q` is missing or blank.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let query = NormalizedQuery::parse(request, self.default_limit)?;
        let results = rank(self.store.all(), &query);

        Ok(SearchOutcome {
            results,
            query: query.original,
        })
    }
}
