//! Application State Store
//!
//! Redux-shaped state container for the movie searcher. On the server a
//! fresh `Store` is constructed for every incoming request, mutated only
//! through [`Store::dispatch`] while the page renders, snapshotted after
//! data loading settles, and dropped when the request handler returns.
//! The browser rebuilds its own store from the serialized [`Snapshot`]
//! embedded in the page.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::catalog::Movie;

/// Progress of the active search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

/// Serializable application state, embedded in the page for hydration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Active search text
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub status: SearchStatus,
    /// Movies matching the active query (or the featured list)
    #[serde(default)]
    pub results: Vec<Movie>,
    /// Movie shown on the detail page, if any
    #[serde(default)]
    pub selected: Option<Movie>,
}

/// State mutations, applied through [`Store::dispatch`]
#[derive(Debug, Clone)]
pub enum Action {
    /// A search began for the given query
    QueryChanged(String),
    /// A search finished with results
    ResultsLoaded { query: String, movies: Vec<Movie> },
    /// A search failed
    SearchFailed { query: String, message: String },
    /// A movie was loaded for the detail page
    MovieSelected(Movie),
    /// The detail page selection was cleared
    MovieCleared,
}

/// State container holding a [`Snapshot`] behind a lock.
///
/// `dispatch` is the only mutation path; reads go through `snapshot`.
/// Two stores never share state.
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<Snapshot>,
}

impl Store {
    /// Create a store with empty initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from a snapshot (client hydration)
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Apply an action to the current state
    pub fn dispatch(&self, action: Action) {
        let mut state = self.state.write().expect("store lock poisoned");
        reduce(&mut state, action);
    }

    /// Deep copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        self.state.read().expect("store lock poisoned").clone()
    }
}

fn reduce(state: &mut Snapshot, action: Action) {
    match action {
        Action::QueryChanged(query) => {
            state.query = query;
            state.status = SearchStatus::Loading;
        }
        Action::ResultsLoaded { query, movies } => {
            state.query = query;
            state.results = movies;
            state.status = SearchStatus::Ready;
        }
        Action::SearchFailed { query, message } => {
            state.query = query;
            state.results = Vec::new();
            state.status = SearchStatus::Failed { message };
        }
        Action::MovieSelected(movie) => {
            state.selected = Some(movie);
        }
        Action::MovieCleared => {
            state.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            year: 1999,
            genres: Vec::new(),
            overview: String::new(),
            poster: None,
            rating: 7.0,
        }
    }

    #[test]
    fn test_dispatch_search_lifecycle() {
        let store = Store::new();

        store.dispatch(Action::QueryChanged("matrix".to_string()));
        assert_eq!(store.snapshot().status, SearchStatus::Loading);

        store.dispatch(Action::ResultsLoaded {
            query: "matrix".to_string(),
            movies: vec![movie(1, "The Matrix")],
        });

        let state = store.snapshot();
        assert_eq!(state.query, "matrix");
        assert_eq!(state.status, SearchStatus::Ready);
        assert_eq!(state.results.len(), 1);
    }

    #[test]
    fn test_failed_search_clears_results() {
        let store = Store::new();
        store.dispatch(Action::ResultsLoaded {
            query: "heat".to_string(),
            movies: vec![movie(2, "Heat")],
        });

        store.dispatch(Action::SearchFailed {
            query: "heat".to_string(),
            message: "catalog unavailable".to_string(),
        });

        let state = store.snapshot();
        assert!(state.results.is_empty());
        assert!(matches!(state.status, SearchStatus::Failed { .. }));
    }

    #[test]
    fn test_selection_round_trip() {
        let store = Store::new();
        store.dispatch(Action::MovieSelected(movie(3, "Alien")));
        assert!(store.snapshot().selected.is_some());

        store.dispatch(Action::MovieCleared);
        assert!(store.snapshot().selected.is_none());
    }

    #[test]
    fn test_snapshot_is_a_deep_copy() {
        let store = Store::new();
        let before = store.snapshot();

        store.dispatch(Action::QueryChanged("dune".to_string()));

        // The earlier snapshot is unaffected by later dispatches.
        assert_eq!(before, Snapshot::default());
    }

    #[test]
    fn test_from_snapshot_resumes_where_serialized() {
        let store = Store::new();
        store.dispatch(Action::ResultsLoaded {
            query: "heat".to_string(),
            movies: vec![movie(5, "Heat")],
        });

        let rebuilt = Store::from_snapshot(store.snapshot());
        assert_eq!(rebuilt.snapshot(), store.snapshot());

        // The rebuilt store keeps evolving independently.
        rebuilt.dispatch(Action::QueryChanged("ronin".to_string()));
        assert_eq!(store.snapshot().query, "heat");
    }

    #[test]
    fn test_snapshot_serialization_round_trip() {
        let store = Store::new();
        store.dispatch(Action::ResultsLoaded {
            query: "alien".to_string(),
            movies: vec![movie(4, "Alien")],
        });

        let json = serde_json::to_string(&store.snapshot()).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store.snapshot());
    }
}
