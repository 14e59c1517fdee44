use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::document::SearchResult;

/// Body of `POST /api/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Raw query as supplied. Non-string values are treated as absent.
    #[serde(default, deserialize_with = "string_or_absent")]
    pub q: Option<String>,
    /// Maximum number of results. Zero or negative yields no results.
    #[serde(default)]
    pub limit: Option<i64>,
    /// Case-insensitive section filter.
    #[serde(default)]
    pub section: Option<String>,
}

impl SearchRequest {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Read a request from an already parsed JSON body.
    ///
    /// Only an object supplies fields. Arrays, scalars and `null` yield an
    /// empty request, which then fails validation for its missing `q`.
    pub fn from_json_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(map) => serde_json::from_value(Value::Object(map)),
            _ => Ok(Self::default()),
        }
    }
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Metadata accompanying a search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMeta {
    /// Number of results returned (after truncation).
    pub total: usize,
    /// The query exactly as the caller sent it.
    pub query: String,
    /// Elapsed time, e.g. `"0ms"`.
    pub took: String,
}

/// Response of `POST /api/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<SearchResult>,
    pub meta: SearchMeta,
}
