//! JSON API Routes
//!
//! Endpoints the hydrated client calls for searches after first paint.
//!
//! - GET /api/v1/search?q= - Search the catalog (featured list when blank)
//! - GET /api/v1/movies/:id - Fetch one movie

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::catalog::{Movie, DEFAULT_FEATURED_LIMIT};
use crate::server::dto::{SearchParams, SearchResponse};
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /api/v1/search
pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = params.q.trim().to_string();

    let movies = if query.is_empty() {
        state.catalog.featured(DEFAULT_FEATURED_LIMIT)
    } else {
        state.catalog.search(&query)
    };

    tracing::debug!(query = %query, hits = movies.len(), "catalog search");

    Json(SearchResponse {
        total: movies.len(),
        query,
        movies,
    })
}

/// GET /api/v1/movies/:id
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ServerResult<Json<Movie>> {
    let movie = state
        .catalog
        .get(id)
        .cloned()
        .ok_or_else(|| ServerError::NotFound(format!("Movie with id {} not found", id)))?;

    Ok(Json(movie))
}
