#[cfg(feature = "server")]
#[derive(Debug, clap::Parser)]
#[command(name = "devdocs", version, about = "DevDocs Pro documentation API")]
struct Cli {
    /// Path to a TOML, YAML or JSON config file.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Document fixture to serve instead of the bundled one.
    #[arg(long)]
    fixture: Option<std::path::PathBuf>,

    /// Port to listen on, overriding the configuration.
    #[arg(long)]
    port: Option<u16>,
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use clap::Parser;
    use devdocs::app::{build_router, AppState};
    use devdocs::config::AppConfig;
    use devdocs::db::store::InMemoryDocumentStore;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devdocs=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(fixture) = cli.fixture {
        config.docs.fixture_path = Some(fixture);
    }

    tracing::info!("Starting DevDocs API v{}...", env!("CARGO_PKG_VERSION"));

    let store = match &config.docs.fixture_path {
        Some(path) => InMemoryDocumentStore::from_path(path)
            .with_context(|| format!("Failed to load fixture {}", path.display()))?,
        None => InMemoryDocumentStore::bundled().context("Failed to load bundled fixture")?,
    };
    if store.is_empty() {
        tracing::warn!("Document store is empty; every search will return no results");
    }
    tracing::info!(
        "Document store ready with {} documents (lookup: {:?})",
        store.len(),
        config.docs.lookup
    );

    let state = AppState::new(Arc::new(store), &config);
    let app = build_router(state, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(feature = "server")]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

// Without the server feature only the library is useful.
#[cfg(not(feature = "server"))]
fn main() {
    eprintln!("devdocs was built without the `server` feature");
}
