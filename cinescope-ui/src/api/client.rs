//! HTTP API Client
//!
//! Functions for communicating with the movie searcher JSON API. The API
//! is served by the same origin as the page, so no base URL configuration
//! is needed.

use gloo_net::http::Request;

use crate::state::global::Movie;

/// API base, derived from the page origin
pub fn get_api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/api/v1", origin))
        .unwrap_or_else(|| "/api/v1".to_string())
}

#[derive(Debug, serde::Deserialize)]
pub struct SearchResponse {
    pub total: usize,
    pub query: String,
    pub movies: Vec<Movie>,
}

/// Search the catalog; a blank query returns the featured list
pub async fn search(query: &str) -> Result<Vec<Movie>, String> {
    let encoded: String = js_sys::encode_uri_component(query).into();
    let url = format!("{}/search?q={}", get_api_base(), encoded);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Search request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Search failed: HTTP {}", response.status()));
    }

    let body: SearchResponse = response
        .json()
        .await
        .map_err(|e| format!("Invalid search response: {}", e))?;

    Ok(body.movies)
}

/// Fetch a single movie; `Ok(None)` when the id is unknown
pub async fn fetch_movie(id: u32) -> Result<Option<Movie>, String> {
    let url = format!("{}/movies/{}", get_api_base(), id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Movie request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("Movie fetch failed: HTTP {}", response.status()));
    }

    let movie: Movie = response
        .json()
        .await
        .map_err(|e| format!("Invalid movie response: {}", e))?;

    Ok(Some(movie))
}
