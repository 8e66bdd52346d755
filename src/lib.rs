//! # Cinescope
//!
//! Movie searcher - a server-side-rendered movie search application.
//!
//! Every page is rendered on the server with Leptos against a per-request
//! state store, then handed to the browser together with a JSON snapshot
//! of that store under `window.__PRELOADED_STATE__`. The `cinescope-ui`
//! crate mounts the client-side counterpart of the tree and hydrates from
//! the snapshot, so the browser never refetches what the server already
//! rendered.
//!
//! ## Modules
//!
//! - [`catalog`]: Movie dataset with ranked search
//! - [`store`]: Per-request application state container
//! - [`app`]: Leptos component tree (pages, components, style collection)
//! - [`server`]: Axum server - SSR pipeline, static files, JSON API
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cinescope::catalog::MovieCatalog;
//! use cinescope::server::{serve, AppState, ServerConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Arc::new(MovieCatalog::load("data/movies.json").await?);
//!     let state = AppState::new(catalog, ServerConfig::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod server;
pub mod store;

// Re-export top-level types for convenience
pub use catalog::{CatalogError, CatalogResult, Movie, MovieCatalog};

pub use store::{Action, SearchStatus, Snapshot, Store};

pub use server::{build_router, serve, AppState, ServerConfig, ServerError, ServerResult};

pub use config::{Config, ConfigError, LoggingConfig};
