use std::path::Path;

use crate::db::store::StoreError;
use crate::models::document::Document;

/// The documentation pages shipped with the binary.
const BUNDLED_DOCS: &str = include_str!("../../fixtures/docs.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(StoreError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a list of documents from fixture text.
pub fn parse_documents(raw: &str, format: FixtureFormat) -> Result<Vec<Document>, StoreError> {
    let docs = match format {
        FixtureFormat::Json => serde_json::from_str(raw)?,
        FixtureFormat::Yaml => serde_yaml::from_str(raw)?,
    };
    Ok(docs)
}

pub fn bundled_documents() -> Result<Vec<Document>, StoreError> {
    parse_documents(BUNDLED_DOCS, FixtureFormat::Json)
}

/// Read and parse a fixture file, picking the parser from the extension.
pub fn load_documents(path: &Path) -> Result<Vec<Document>, StoreError> {
    let format = FixtureFormat::from_path(path)?;
    let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let docs = parse_documents(&raw, format)?;
    tracing::info!("Loaded {} documents from {}", docs.len(), path.display());
    Ok(docs)
}
