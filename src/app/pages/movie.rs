//! Movie Detail Page

use leptos::*;
use leptos_router::{use_params_map, A};
use std::sync::Arc;

use crate::app::styles;
use crate::catalog::{Movie, MovieCatalog};
use crate::store::{Action, Store};

const MOVIE_CSS: &str = "
.movie-detail { background: #1a1d24; border: 1px solid #2c313c; border-radius: 12px; padding: 1.5rem; }
.movie-detail h1 { margin-top: 0; }
.movie-detail-meta { color: #9aa3b2; }
.movie-detail-overview { color: #c3c9d4; line-height: 1.6; }
.movie-missing { color: #9aa3b2; }
";

/// Movie detail page component
#[component]
pub fn MovieDetail() -> impl IntoView {
    styles::use_style("movie", MOVIE_CSS);

    let catalog = use_context::<Arc<MovieCatalog>>().expect("MovieCatalog not provided");
    let store = use_context::<Arc<Store>>().expect("Store not provided");

    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()));

    let movie = create_resource(id, move |id| {
        let catalog = Arc::clone(&catalog);
        let store = Arc::clone(&store);
        async move { load_movie(&catalog, &store, id).await }
    });

    view! {
        <Suspense fallback=move || view! { <p class="movie-missing">"Loading..."</p> }>
            {move || {
                movie.get().map(|found| match found {
                    Some(movie) => view! { <MovieSummary movie=movie /> }.into_view(),
                    None => view! {
                        <div>
                            <p class="movie-missing">"We couldn't find that movie."</p>
                            <A href="/">"Back to search"</A>
                        </div>
                    }
                    .into_view(),
                })
            }}
        </Suspense>
    }
}

/// Resolve the movie and record the selection in the store
async fn load_movie(catalog: &MovieCatalog, store: &Store, id: Option<u32>) -> Option<Movie> {
    let found = id.and_then(|id| catalog.get(id).cloned());

    match &found {
        Some(movie) => store.dispatch(Action::MovieSelected(movie.clone())),
        None => store.dispatch(Action::MovieCleared),
    }

    found
}

#[component]
fn MovieSummary(movie: Movie) -> impl IntoView {
    let meta = format!(
        "{} · rated {:.1} · {}",
        movie.year,
        movie.rating,
        movie.genres.join(", ")
    );

    view! {
        <article class="movie-detail">
            <h1>{movie.title}</h1>
            <p class="movie-detail-meta">{meta}</p>
            <p class="movie-detail-overview">{movie.overview}</p>
            <A href="/">"Back to search"</A>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MovieCatalog {
        MovieCatalog::from_movies(vec![Movie {
            id: 42,
            title: "Blade Runner".to_string(),
            year: 1982,
            genres: vec!["Sci-Fi".to_string()],
            overview: "A blade runner hunts replicants".to_string(),
            poster: None,
            rating: 8.1,
        }])
    }

    #[tokio::test]
    async fn test_load_movie_selects_found_movie() {
        let store = Store::new();
        let found = load_movie(&catalog(), &store, Some(42)).await;

        assert!(found.is_some());
        assert_eq!(
            store.snapshot().selected.map(|m| m.title),
            Some("Blade Runner".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_movie_clears_selection_when_missing() {
        let store = Store::new();
        store.dispatch(Action::MovieSelected(catalog().get(42).cloned().unwrap()));

        let found = load_movie(&catalog(), &store, Some(7)).await;

        assert!(found.is_none());
        assert!(store.snapshot().selected.is_none());
    }

    #[tokio::test]
    async fn test_load_movie_handles_unparsable_id() {
        let store = Store::new();
        let found = load_movie(&catalog(), &store, None).await;
        assert!(found.is_none());
    }
}
