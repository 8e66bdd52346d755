//! Global Application State
//!
//! Reactive state management using Leptos signals. The state shape mirrors
//! the server's store snapshot; `read_preloaded_state` pulls the snapshot
//! the server embedded so the first render matches the server-rendered
//! markup without refetching.

use leptos::*;
use wasm_bindgen::JsValue;

/// A movie as served by the API and the hydration snapshot
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster: Option<String>,
    pub rating: f64,
}

/// Progress of the active search
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
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

/// Server-provided state snapshot, read from `window.__PRELOADED_STATE__`
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Snapshot {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub status: SearchStatus,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub selected: Option<Movie>,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Active search text
    pub query: RwSignal<String>,
    pub status: RwSignal<SearchStatus>,
    /// Movies matching the active query (or the featured list)
    pub results: RwSignal<Vec<Movie>>,
    /// Movie shown on the detail page
    pub selected: RwSignal<Option<Movie>>,
}

/// Provide global state to the component tree, seeded from the server
/// snapshot when one was embedded in the page.
pub fn provide_global_state(initial: Option<Snapshot>) {
    let snapshot = initial.unwrap_or_default();

    let state = GlobalState {
        query: create_rw_signal(snapshot.query),
        status: create_rw_signal(snapshot.status),
        results: create_rw_signal(snapshot.results),
        selected: create_rw_signal(snapshot.selected),
    };

    provide_context(state);
}

/// Read and parse the snapshot the server embedded in the page.
///
/// Returns `None` when the global is absent (e.g. a static error page) or
/// does not parse; the app then starts from empty state and fetches.
pub fn read_preloaded_state() -> Option<Snapshot> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("__PRELOADED_STATE__")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    let json = js_sys::JSON::stringify(&value).ok()?;
    let json: String = json.into();
    serde_json::from_str(&json).ok()
}
