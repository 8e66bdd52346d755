//! Home Page
//!
//! Search box plus a grid of results. Until a query is entered the grid
//! shows the featured list. The result load runs as a resource so the
//! server can settle it before snapshotting the store.

use leptos::*;
use leptos_router::use_query_map;
use std::sync::Arc;

use crate::app::components::{MovieCard, SearchBar};
use crate::app::styles;
use crate::catalog::{Movie, MovieCatalog, DEFAULT_FEATURED_LIMIT};
use crate::store::{Action, Store};

const HOME_CSS: &str = "
.home-heading { color: #9aa3b2; font-size: 0.9rem; margin-bottom: 1rem; }
.home-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.home-empty { color: #9aa3b2; }
";

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    styles::use_style("home", HOME_CSS);

    let catalog = use_context::<Arc<MovieCatalog>>().expect("MovieCatalog not provided");
    let store = use_context::<Arc<Store>>().expect("Store not provided");

    let query_map = use_query_map();
    let query = move || query_map.with(|map| map.get("q").cloned().unwrap_or_default());

    let results = create_resource(query, move |q| {
        let catalog = Arc::clone(&catalog);
        let store = Arc::clone(&store);
        async move { load_results(&catalog, &store, q).await }
    });

    view! {
        <div class="home">
            <SearchBar initial=query() />

            <Suspense fallback=move || view! { <p class="home-empty">"Searching..."</p> }>
                {move || {
                    results
                        .get()
                        .map(|movies| view! { <ResultsGrid movies=movies query=query() /> })
                }}
            </Suspense>
        </div>
    }
}

/// Run the search and record it in the store before the suspense
/// resolves, so the hydration snapshot matches the rendered markup.
async fn load_results(catalog: &MovieCatalog, store: &Store, query: String) -> Vec<Movie> {
    store.dispatch(Action::QueryChanged(query.clone()));

    let movies = if query.trim().is_empty() {
        catalog.featured(DEFAULT_FEATURED_LIMIT)
    } else {
        catalog.search(&query)
    };

    store.dispatch(Action::ResultsLoaded {
        query,
        movies: movies.clone(),
    });

    movies
}

/// Result grid with a heading describing what is shown
#[component]
fn ResultsGrid(movies: Vec<Movie>, query: String) -> impl IntoView {
    let heading = if query.trim().is_empty() {
        "Featured movies".to_string()
    } else {
        format!("{} result(s) for \"{}\"", movies.len(), query.trim())
    };

    if movies.is_empty() {
        return view! {
            <div>
                <p class="home-heading">{heading}</p>
                <p class="home-empty">"No movies matched your search."</p>
            </div>
        }
        .into_view();
    }

    view! {
        <div>
            <p class="home-heading">{heading}</p>
            <div class="home-grid">
                {movies
                    .into_iter()
                    .map(|movie| view! { <MovieCard movie=movie /> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}
