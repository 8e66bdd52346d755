//! About Page

use leptos::*;

use crate::state::styles;

const ABOUT_CSS: &str = "
.about { color: #c3c9d4; line-height: 1.7; max-width: 600px; }
";

/// About page component
#[component]
pub fn About() -> impl IntoView {
    styles::use_style("about", ABOUT_CSS);

    view! {
        <div class="about">
            <h1>"About"</h1>
            <p>
                "Movie searcher renders every page on the server and hands the "
                "finished state to your browser, so results show up before any "
                "script runs."
            </p>
            <p>"Search by title or by words from the plot."</p>
        </div>
    }
}
