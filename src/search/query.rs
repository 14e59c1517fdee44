use crate::models::search::SearchRequest;
use crate::search::engine::SearchError;

/// A validated search request, ready for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// `q` exactly as the caller sent it, echoed back in `meta.query`.
    pub original: String,
    /// Trimmed, lowercased `q`.
    pub needle: String,
    /// Requested result count; zero or negative means no results.
    pub limit: i64,
    /// Lowercased section filter.
    pub section: Option<String>,
}

impl NormalizedQuery {
    /// Validate a raw request. `default_limit` applies when `limit` is omitted.
    pub fn parse(request: &SearchRequest, default_limit: usize) -> Result<Self, SearchError> {
        let original = request.q.as_deref().ok_or(SearchError::InvalidQuery)?;
        let needle = original.trim().to_lowercase();
        if needle.is_empty() {
            return Err(SearchError::InvalidQuery);
        }

        let limit = request
            .limit
            .unwrap_or_else(|| i64::try_from(default_limit).unwrap_or(i64::MAX));

        let section = request.section.as_deref().map(str::to_lowercase);

        Ok(Self {
            original: original.to_string(),
            needle,
            limit,
            section,
        })
    }

    /// How many results to keep after sorting.
    pub fn take(&self) -> usize {
        if self.limit <= 0 {
            0
        } else {
            usize::try_from(self.limit).unwrap_or(usize::MAX)
        }
    }
}
