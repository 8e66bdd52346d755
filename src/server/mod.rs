//! HTTP Server
//!
//! Web layer for the movie searcher, built with Axum.
//!
//! # Routes
//!
//! ## JSON API (used by the hydrated client)
//! - `GET /api/v1/search?q=` - Search the catalog
//! - `GET /api/v1/movies/:id` - Fetch one movie
//!
//! ## Pages
//! - Static assets are served from the public directory at the URL root.
//! - Every other path falls through to the catch-all server-side render
//!   handler, which always answers `text/html` (or a 302 when the render
//!   requests a redirect).
//!
//! In development mode a live-reload layer is attached; it injects its own
//! script tag into rendered pages and serves the reload endpoint.
//!
//! # Example
//!
//! ```rust,ignore
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

pub mod document;
pub mod dto;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::{AppState, ServerConfig};

use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_livereload::LiveReloadLayer;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let dev = state.config.dev;
    let public_dir = state.config.public_dir.clone();
    let shared_state = Arc::new(state);

    let api_routes = Router::new()
        .route("/search", get(routes::search_movies))
        .route("/movies/:id", get(routes::get_movie))
        .with_state(Arc::clone(&shared_state));

    // Static files first; anything the public directory cannot satisfy
    // falls through to the render handler.
    let render_service = any(render::render_page).with_state(shared_state);
    let static_files = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(render_service);

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http());

    if dev {
        tracing::info!("Development mode: live reload enabled");
        router = router.layer(LiveReloadLayer::new());
    }

    router
}

/// Start the web server
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Movie searcher listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Movie searcher shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Movie, MovieCatalog};
    use crate::store::{SearchStatus, Snapshot};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn sample_movies() -> Vec<Movie> {
        vec![
            Movie {
                id: 1,
                title: "Alien".to_string(),
                year: 1979,
                genres: vec!["Horror".to_string(), "Sci-Fi".to_string()],
                overview: "The crew of the Nostromo encounters a deadly creature".to_string(),
                poster: None,
                rating: 8.5,
            },
            Movie {
                id: 2,
                title: "Arrival".to_string(),
                year: 2016,
                genres: vec!["Sci-Fi".to_string()],
                overview: "Linguists decode a visitor language".to_string(),
                poster: None,
                rating: 7.9,
            },
            Movie {
                id: 3,
                title: "Heat".to_string(),
                year: 1995,
                genres: vec!["Crime".to_string()],
                overview: "A detective pursues a master thief across Los Angeles".to_string(),
                poster: None,
                rating: 8.3,
            },
        ]
    }

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            public_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let catalog = Arc::new(MovieCatalog::from_movies(sample_movies()));
        let state = AppState::new(catalog, config);

        (build_router(state), dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Pull the hydration payload back out of a rendered document
    fn extract_snapshot(body: &str) -> Snapshot {
        let marker = "window.__PRELOADED_STATE__ = ";
        let start = body.find(marker).expect("hydration payload missing") + marker.len();
        let end = body[start..].find("</script>").expect("unterminated hydration script") + start;
        serde_json::from_str(&body[start..end]).expect("hydration payload is not valid JSON")
    }

    fn is_html(headers: &axum::http::HeaderMap) -> bool {
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("text/html"))
            .unwrap_or(false)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_home_page_renders() {
        let (app, _dir) = create_test_app();
        let (status, headers, body) = get(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(is_html(&headers));
        assert!(body.contains(r#"<div id="root">"#));
        assert!(body.contains(r#"<style id="ssr-styles">"#));

        let snapshot = extract_snapshot(&body);
        assert_eq!(snapshot.query, "");
        assert_eq!(snapshot.status, SearchStatus::Ready);
        // Blank query renders the featured list.
        assert_eq!(snapshot.results.len(), 3);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_search_query_shapes_markup_and_snapshot() {
        let (app, _dir) = create_test_app();
        let (status, _headers, body) = get(app, "/?q=alien").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Alien"));

        let snapshot = extract_snapshot(&body);
        assert_eq!(snapshot.query, "alien");
        assert_eq!(snapshot.results.len(), 1);
        assert_eq!(snapshot.results[0].title, "Alien");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_legacy_search_redirects() {
        let (app, _dir) = create_test_app();
        let (status, headers, body) = get(app, "/search").await;

        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(
            headers.get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/")
        );
        assert!(body.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_movie_detail_selects_movie() {
        let (app, _dir) = create_test_app();
        let (status, _headers, body) = get(app, "/movie/3").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Heat"));

        let snapshot = extract_snapshot(&body);
        assert_eq!(snapshot.selected.map(|m| m.id), Some(3));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unknown_path_renders_not_found_page() {
        let (app, _dir) = create_test_app();
        let (status, headers, body) = get(app, "/no/such/page").await;

        // SPA behavior: unknown paths render the NotFound view as a page.
        assert_eq!(status, StatusCode::OK);
        assert!(is_html(&headers));
        assert!(body.contains("Page not found"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_static_file_served_from_public_dir() {
        let (app, dir) = create_test_app();
        std::fs::create_dir_all(dir.path().join("styles")).unwrap();
        std::fs::write(dir.path().join("styles/main.css"), "body { margin: 0; }").unwrap();

        let (status, _headers, body) = get(app, "/styles/main.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body { margin: 0; }");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_static_file_falls_through_to_renderer() {
        let (app, _dir) = create_test_app();
        let (status, headers, _body) = get(app, "/styles/missing.css").await;

        assert_eq!(status, StatusCode::OK);
        assert!(is_html(&headers));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_requests_are_isolated() {
        let (app, _dir) = create_test_app();

        let (a, b) = tokio::join!(
            get(app.clone(), "/?q=alien"),
            get(app.clone(), "/?q=heat"),
        );

        let snapshot_a = extract_snapshot(&a.2);
        let snapshot_b = extract_snapshot(&b.2);

        // Each response reflects only its own request's state.
        assert_eq!(snapshot_a.query, "alien");
        assert_eq!(snapshot_a.results[0].title, "Alien");
        assert_eq!(snapshot_b.query, "heat");
        assert_eq!(snapshot_b.results[0].title, "Heat");
    }

    #[tokio::test]
    async fn test_api_search() {
        let (app, _dir) = create_test_app();
        let (status, _headers, body) = get(app, "/api/v1/search?q=arrival").await;

        assert_eq!(status, StatusCode::OK);
        let response: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(response["total"], 1);
        assert_eq!(response["movies"][0]["title"], "Arrival");
    }

    #[tokio::test]
    async fn test_api_search_blank_query_returns_featured() {
        let (app, _dir) = create_test_app();
        let (status, _headers, body) = get(app, "/api/v1/search").await;

        assert_eq!(status, StatusCode::OK);
        let response: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(response["total"], 3);
        // Featured list is rating-ordered.
        assert_eq!(response["movies"][0]["title"], "Alien");
    }

    #[tokio::test]
    async fn test_api_get_movie() {
        let (app, _dir) = create_test_app();
        let (status, _headers, body) = get(app, "/api/v1/movies/2").await;

        assert_eq!(status, StatusCode::OK);
        let movie: Movie = serde_json::from_str(&body).unwrap();
        assert_eq!(movie.title, "Arrival");
    }

    #[tokio::test]
    async fn test_api_get_movie_missing_is_404() {
        let (app, _dir) = create_test_app();
        let (status, _headers, body) = get(app, "/api/v1/movies/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let response: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(response["error"]["code"], "NOT_FOUND");
    }
}
