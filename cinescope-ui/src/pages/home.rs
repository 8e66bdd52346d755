//! Home Page
//!
//! Search box plus a grid of results. The server already rendered and
//! hydrated the first view; this page only hits the API when the URL
//! query moves away from the hydrated state.

use leptos::*;
use leptos_router::use_query_map;

use crate::api;
use crate::components::{Loading, MovieCard, SearchBar};
use crate::state::global::{GlobalState, SearchStatus};
use crate::state::styles;

const HOME_CSS: &str = "
.home-heading { color: #9aa3b2; font-size: 0.9rem; margin-bottom: 1rem; }
.home-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.home-empty { color: #9aa3b2; }
";

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    styles::use_style("home", HOME_CSS);

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let query_map = use_query_map();
    let url_query = move || query_map.with(|map| map.get("q").cloned().unwrap_or_default());

    // Search when the URL query changes. The first run is skipped when the
    // hydrated state already answers it.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let q = url_query();
        let state = state_for_effect.clone();

        let hydrated = state.query.get_untracked() == q
            && state.status.get_untracked() == SearchStatus::Ready;
        if hydrated {
            return;
        }

        spawn_local(async move {
            state.query.set(q.clone());
            state.status.set(SearchStatus::Loading);

            match api::search(&q).await {
                Ok(movies) => {
                    state.results.set(movies);
                    state.status.set(SearchStatus::Ready);
                }
                Err(message) => {
                    web_sys::console::error_1(&format!("Search failed: {}", message).into());
                    state.results.set(Vec::new());
                    state.status.set(SearchStatus::Failed { message });
                }
            }
        });
    });

    let heading = {
        let state = state.clone();
        move || {
            let query = state.query.get();
            if query.trim().is_empty() {
                "Featured movies".to_string()
            } else {
                format!("{} result(s) for \"{}\"", state.results.get().len(), query.trim())
            }
        }
    };

    view! {
        <div class="home">
            <SearchBar />

            {move || match state.status.get() {
                SearchStatus::Loading => view! { <Loading /> }.into_view(),
                SearchStatus::Failed { message } => {
                    view! { <p class="home-empty">{format!("Search failed: {}", message)}</p> }
                        .into_view()
                }
                _ => {
                    let movies = state.results.get();
                    if movies.is_empty() {
                        view! {
                            <div>
                                <p class="home-heading">{heading.clone()}</p>
                                <p class="home-empty">"No movies matched your search."</p>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div>
                                <p class="home-heading">{heading.clone()}</p>
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
                }
            }}
        </div>
    }
}
