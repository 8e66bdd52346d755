//! Movie Catalog
//!
//! Read-only movie dataset backing the search pages. The catalog is loaded
//! once at startup from a JSON file and shared across requests via `Arc`;
//! it never changes after load, so request handlers can query it without
//! locking.

pub mod error;

pub use error::{CatalogError, CatalogResult};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// How many featured movies to surface when no search is active
pub const DEFAULT_FEATURED_LIMIT: usize = 12;

/// A single movie entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Stable identifier used in detail-page URLs
    pub id: u32,
    pub title: String,
    /// Release year
    pub year: i32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub overview: String,
    /// Optional poster image URL
    #[serde(default)]
    pub poster: Option<String>,
    /// Average rating on a 0-10 scale
    pub rating: f64,
}

/// In-memory movie catalog with ranked search
#[derive(Debug)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
    by_id: HashMap<u32, usize>,
}

impl MovieCatalog {
    /// Load the catalog from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Io {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        let movies: Vec<Movie> =
            serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        Ok(Self::from_movies(movies))
    }

    /// Build a catalog from an in-memory movie list
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let by_id = movies
            .iter()
            .enumerate()
            .map(|(idx, movie)| (movie.id, idx))
            .collect();

        Self { movies, by_id }
    }

    /// Look up a movie by id
    pub fn get(&self, id: u32) -> Option<&Movie> {
        self.by_id.get(&id).map(|&idx| &self.movies[idx])
    }

    /// Search the catalog, best matches first.
    ///
    /// Ranking: title prefix match, then title substring, then overview
    /// substring. Ties are broken by rating, highest first. A blank query
    /// matches nothing; callers show the featured list instead.
    pub fn search(&self, query: &str) -> Vec<Movie> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(u8, &Movie)> = self
            .movies
            .iter()
            .filter_map(|movie| match_score(movie, &needle).map(|s| (s, movie)))
            .collect();

        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .cmp(score_a)
                .then(b.rating.total_cmp(&a.rating))
                .then_with(|| a.title.cmp(&b.title))
        });

        scored.into_iter().map(|(_, movie)| movie.clone()).collect()
    }

    /// Top-rated movies, shown when no search is active
    pub fn featured(&self, limit: usize) -> Vec<Movie> {
        let mut movies: Vec<&Movie> = self.movies.iter().collect();
        movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        movies.into_iter().take(limit).cloned().collect()
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

fn match_score(movie: &Movie, needle: &str) -> Option<u8> {
    let title = movie.title.to_lowercase();
    if title.starts_with(needle) {
        return Some(3);
    }
    if title.contains(needle) {
        return Some(2);
    }
    if movie.overview.to_lowercase().contains(needle) {
        return Some(1);
    }
    None
}
