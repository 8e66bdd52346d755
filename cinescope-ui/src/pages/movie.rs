//! Movie Detail Page

use leptos::*;
use leptos_router::{use_params_map, A};

use crate::api;
use crate::components::Loading;
use crate::state::global::{GlobalState, Movie};
use crate::state::styles;

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

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()));

    // True once a lookup settled, so a missing movie is distinguishable
    // from one still loading.
    let (settled, set_settled) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let id = id();
        let state = state_for_effect.clone();

        // Hydrated selection already matches this URL.
        if id.is_some() && state.selected.get_untracked().map(|m| m.id) == id {
            set_settled.set(true);
            return;
        }

        spawn_local(async move {
            let found = match id {
                Some(id) => api::fetch_movie(id).await.unwrap_or_else(|message| {
                    web_sys::console::error_1(
                        &format!("Failed to load movie: {}", message).into(),
                    );
                    None
                }),
                None => None,
            };

            state.selected.set(found);
            set_settled.set(true);
        });
    });

    view! {
        {move || {
            match state.selected.get() {
                Some(movie) => view! { <MovieSummary movie=movie /> }.into_view(),
                None if settled.get() => view! {
                    <div>
                        <p class="movie-missing">"We couldn't find that movie."</p>
                        <A href="/">"Back to search"</A>
                    </div>
                }
                .into_view(),
                None => view! { <Loading /> }.into_view(),
            }
        }}
    }
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
