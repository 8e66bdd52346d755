//! Loading Indicator

use leptos::*;

use crate::state::styles;

const LOADING_CSS: &str = "
.loading { color: #9aa3b2; padding: 2rem 0; }
";

/// Inline loading indicator
#[component]
pub fn Loading() -> impl IntoView {
    styles::use_style("loading", LOADING_CSS);

    view! { <p class="loading">"Loading..."</p> }
}
