//! Data Transfer Objects
//!
//! Request and response types for the JSON API the hydrated client calls.

use serde::{Deserialize, Serialize};

use crate::catalog::Movie;

/// Query parameters for GET /api/v1/search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search text; blank or absent returns the featured list
    #[serde(default)]
    pub q: String,
}

/// Response for GET /api/v1/search
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub total: usize,
    pub query: String,
    pub movies: Vec<Movie>,
}
