//! Search Bar Component

use leptos::*;
use leptos_router::use_navigate;

use crate::state::global::GlobalState;
use crate::state::styles;

const SEARCH_BAR_CSS: &str = "
.search-bar { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.search-bar-input { flex: 1; padding: 0.6rem 0.9rem; border: 1px solid #2c313c; border-radius: 8px; background: #12141a; color: #e6e9ef; }
.search-bar-submit { padding: 0.6rem 1.2rem; border: none; border-radius: 8px; background: #3b6cf0; color: #fff; cursor: pointer; }
";

/// Search input. Submitting navigates to `/?q=`, which the home page
/// watches to trigger the API search.
#[component]
pub fn SearchBar() -> impl IntoView {
    styles::use_style("search-bar", SEARCH_BAR_CSS);

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (value, set_value) = create_signal(state.query.get_untracked());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let q = value.get();
        let target = if q.trim().is_empty() {
            "/".to_string()
        } else {
            let encoded: String = js_sys::encode_uri_component(q.trim()).into();
            format!("/?q={}", encoded)
        };

        navigate(&target, Default::default());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                class="search-bar-input"
                type="search"
                prop:value=value
                on:input=move |ev| set_value.set(event_target_value(&ev))
                placeholder="Search for a movie..."
            />
            <button class="search-bar-submit" type="submit">"Search"</button>
        </form>
    }
}
