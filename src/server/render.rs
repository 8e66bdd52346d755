//! Server-Side Render Pipeline
//!
//! The catch-all handler. Each request gets a fresh store and style
//! registry, the component tree renders exactly once against the request
//! URL, data-loading resources settle inside the async render, and only
//! then is the snapshot read and the document composed. A redirect
//! requested during render short-circuits to a 302 with no body.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use leptos::{provide_context, view, IntoView};
use leptos_router::{provide_server_redirect, RouterIntegrationContext, ServerIntegration};
use std::sync::{Arc, RwLock};

use crate::app::{App, StyleRegistry};
use crate::server::document;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;
use crate::store::{Snapshot, Store};

/// Outcome of rendering one request
#[derive(Debug)]
pub enum RenderedPage {
    /// Full HTML document to send with 200
    Document(String),
    /// Redirect target captured during render
    Redirect(String),
}

/// Axum handler for the catch-all route
pub async fn render_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> ServerResult<Response> {
    match render_route(&state, &uri).await? {
        RenderedPage::Redirect(target) => {
            tracing::debug!(%uri, %target, "render requested redirect");
            Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
        }
        RenderedPage::Document(doc) => Ok(Html(doc).into_response()),
    }
}

/// Render the component tree for a URL and produce either a document or a
/// captured redirect target.
pub async fn render_route(state: &AppState, uri: &Uri) -> ServerResult<RenderedPage> {
    // Per-request state: store, style collection, redirect slot. All are
    // dropped when this function returns.
    let store = Arc::new(Store::new());
    let styles = StyleRegistry::new();
    let redirect: Arc<RwLock<Option<String>>> = Arc::new(RwLock::new(None));

    // The router integration wants an absolute URL; only path and query
    // matter for route matching.
    let location = format!(
        "http://localhost{}",
        uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/")
    );

    let markup = {
        let store = Arc::clone(&store);
        let styles = styles.clone();
        let catalog = Arc::clone(&state.catalog);
        let redirect = Arc::clone(&redirect);

        // The Leptos runtime and the futures it produces are tied to one
        // thread, so the whole render runs on a blocking thread and the
        // async settle is driven there.
        tokio::task::spawn_blocking(move || {
            let handle = tokio::runtime::Handle::current();
            handle.block_on(leptos::ssr::render_to_string_async(move || {
                provide_context(store);
                provide_context(catalog);
                provide_context(styles);
                provide_context(RouterIntegrationContext::new(ServerIntegration {
                    path: location,
                }));
                provide_server_redirect(move |path: &str| {
                    let mut slot = redirect.write().expect("redirect slot poisoned");
                    *slot = Some(path.to_string());
                });

                view! { <App /> }.into_view()
            }))
        })
        .await
        .map_err(|e| ServerError::Render(format!("render task failed: {}", e)))?
    };

    // A redirect view produces no useful markup; answer with the captured
    // target before touching the store.
    let captured = redirect.read().expect("redirect slot poisoned").clone();
    if let Some(target) = captured {
        return Ok(RenderedPage::Redirect(target));
    }

    // Data loading settled inside the render; the snapshot now reflects
    // everything the markup shows.
    let snapshot: Snapshot = store.snapshot();
    let css = styles.to_css();

    let doc = document::compose(&markup, &css, &snapshot, &state.config.bundle_path)?;
    Ok(RenderedPage::Document(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Movie, MovieCatalog};
    use crate::server::state::ServerConfig;

    fn test_state() -> AppState {
        let catalog = MovieCatalog::from_movies(vec![
            Movie {
                id: 1,
                title: "Alien".to_string(),
                year: 1979,
                genres: vec!["Horror".to_string()],
                overview: "A crew encounters a deadly creature".to_string(),
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
        ]);

        AppState::new(Arc::new(catalog), ServerConfig::default())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_render_home_produces_document() {
        let state = test_state();
        let uri: Uri = "/".parse().unwrap();

        let page = render_route(&state, &uri).await.unwrap();
        match page {
            RenderedPage::Document(doc) => {
                assert!(doc.contains(r#"<div id="root">"#));
                assert!(doc.contains("Movie searcher"));
                assert!(doc.contains("window.__PRELOADED_STATE__"));
            }
            RenderedPage::Redirect(target) => panic!("unexpected redirect to {}", target),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_render_legacy_search_captures_redirect() {
        let state = test_state();
        let uri: Uri = "/search".parse().unwrap();

        let page = render_route(&state, &uri).await.unwrap();
        match page {
            RenderedPage::Redirect(target) => assert_eq!(target, "/"),
            RenderedPage::Document(_) => panic!("expected a redirect"),
        }
    }
}
