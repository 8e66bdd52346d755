//! Application State
//!
//! Shared state accessible by all request handlers. Only immutable data
//! lives here; per-request state is built inside the render handler.

use crate::catalog::MovieCatalog;
use crate::config::ServerSettings;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Movie catalog, immutable after startup
    pub catalog: Arc<MovieCatalog>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(catalog: Arc<MovieCatalog>, config: ServerConfig) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }
}

/// Web server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory served as static assets at the URL root
    pub public_dir: PathBuf,
    /// URL of the client bundle script referenced by rendered pages
    pub bundle_path: String,
    /// Development mode: attaches the live-reload layer
    pub dev: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            public_dir: PathBuf::from("public"),
            bundle_path: "/pkg/cinescope_ui.js".to_string(),
            dev: false,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<ServerSettings> for ServerConfig {
    fn from(settings: ServerSettings) -> Self {
        Self {
            host: settings.host,
            port: settings.port,
            public_dir: PathBuf::from(settings.public_dir),
            bundle_path: settings.bundle_path,
            dev: settings.dev,
        }
    }
}
