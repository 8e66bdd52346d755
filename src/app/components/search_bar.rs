//! Search Bar Component

use leptos::*;

use crate::app::styles;

const SEARCH_BAR_CSS: &str = "
.search-bar { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.search-bar-input { flex: 1; padding: 0.6rem 0.9rem; border: 1px solid #2c313c; border-radius: 8px; background: #12141a; color: #e6e9ef; }
.search-bar-submit { padding: 0.6rem 1.2rem; border: none; border-radius: 8px; background: #3b6cf0; color: #fff; cursor: pointer; }
";

/// Search input. Submits as a plain GET so server-rendered pages work
/// without the client bundle; the hydrated app intercepts navigation.
#[component]
pub fn SearchBar(#[prop(optional)] initial: String) -> impl IntoView {
    styles::use_style("search-bar", SEARCH_BAR_CSS);

    view! {
        <form class="search-bar" method="get" action="/">
            <input
                class="search-bar-input"
                type="search"
                name="q"
                value=initial
                placeholder="Search for a movie..."
            />
            <button class="search-bar-submit" type="submit">"Search"</button>
        </form>
    }
}
