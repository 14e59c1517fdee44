use serde::{Deserialize, Serialize};

/// A single documentation page served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique, stable identifier (e.g. `quickstart`).
    pub id: String,
    /// Optional URL path segment, only consulted by slug-aware lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Human-readable title.
    pub title: String,
    /// One-line summary.
    pub description: String,
    /// Full-text body in Markdown. May be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Tags for categorization and search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Navigation section this page belongs to.
    pub section: String,
    /// Position hint within the navigation. Lower numbers come first.
    #[serde(default)]
    pub order: i64,
}

impl Document {
    /// The lowercased text the search engine scans: title, description,
    /// content and every tag joined with single spaces.
    pub fn haystack(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.title, &self.description];
        if let Some(content) = &self.content {
            parts.push(content);
        }
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

/// A document annotated with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub document: Document,
    pub score: f64,
}
