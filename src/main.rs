//! Cinescope Web Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from a TOML file (see [`cinescope::config`]) with environment
//! variable overrides:
//! - `CINESCOPE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CINESCOPE_PORT`: Port to listen on (default: 4000)
//! - `CINESCOPE_PUBLIC_DIR`: Static asset directory (default: public)
//! - `CINESCOPE_CATALOG`: Movie catalog JSON file (default: data/movies.json)
//! - `CINESCOPE_ENV`: Set to `development` to enable live reload
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Context;
use cinescope::catalog::MovieCatalog;
use cinescope::config::Config;
use cinescope::server::{serve, AppState, ServerConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinescope=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Movie searcher v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_default();
    let server_config = ServerConfig::from(config.server.clone());

    tracing::info!("Public directory: {:?}", server_config.public_dir);
    if server_config.dev {
        tracing::info!("Development mode enabled");
    }

    // Load the movie catalog
    let catalog = MovieCatalog::load(&config.catalog.path)
        .await
        .with_context(|| format!("loading movie catalog from {}", config.catalog.path))?;
    tracing::info!("Loaded {} movies from {}", catalog.len(), config.catalog.path);

    let state = AppState::new(Arc::new(catalog), server_config);

    serve(state).await.context("web server failed")?;

    tracing::info!("Movie searcher stopped");
    Ok(())
}
