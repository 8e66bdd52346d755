//! Movie Card Component

use leptos::*;
use leptos_router::*;

use crate::state::global::Movie;
use crate::state::styles;

const MOVIE_CARD_CSS: &str = "
.movie-card { background: #1a1d24; border: 1px solid #2c313c; border-radius: 10px; padding: 1rem; }
.movie-card-title { color: #fff; font-weight: 600; text-decoration: none; }
.movie-card-meta { color: #9aa3b2; font-size: 0.85rem; margin: 0.25rem 0 0.5rem; }
.movie-card-overview { color: #c3c9d4; font-size: 0.9rem; margin: 0; }
";

/// Summary card linking to the movie detail page
#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    styles::use_style("movie-card", MOVIE_CARD_CSS);

    let detail_href = format!("/movie/{}", movie.id);
    let meta = format!("{} · {:.1} · {}", movie.year, movie.rating, movie.genres.join(", "));
    let overview = snippet(&movie.overview, 140);

    view! {
        <article class="movie-card">
            <A href=detail_href class="movie-card-title">{movie.title}</A>
            <p class="movie-card-meta">{meta}</p>
            <p class="movie-card-overview">{overview}</p>
        </article>
    }
}

/// Truncate on a char boundary, appending an ellipsis when shortened
fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
