use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::db::store::DocLookup;
use crate::error::AppError;
use crate::search::engine::DEFAULT_LIMIT;

/// Top-level application configuration.
///
/// Sources, lowest precedence first: struct defaults, an optional config
/// file, then `DEVDOCS_`-prefixed environment variables using `__` as the
/// nesting separator (e.g. `DEVDOCS_SERVER__PORT=8080`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub docs: DocsConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. `"*"` allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:8744".to_string(),
                "*".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Fixture to load instead of the bundled one.
    pub fixture_path: Option<PathBuf>,
    pub lookup: DocLookup,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Result count used when a request omits `limit`.
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl AppConfig {
    /// Load configuration from an optional file plus the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        Self::from_builder(builder.add_source(environment()))
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config = builder.build()?.try_deserialize::<AppConfig>()?;
        Ok(config)
    }

    /// `host:port` string handed to the listener, which resolves host names.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.server.cors_origins.iter().any(|o| o == "*")
    }
}

/// `DEVDOCS_`-prefixed variables; `server.cors_origins` is comma-separated.
fn environment() -> Environment {
    Environment::with_prefix("DEVDOCS")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("server.cors_origins")
        .try_parsing(true)
}
