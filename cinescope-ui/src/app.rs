//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{About, Home, MovieDetail};
use crate::state::global::{provide_global_state, Snapshot};
use crate::state::styles::{self, provide_style_injector};

const APP_CSS: &str = "
.app { min-height: 100vh; display: flex; flex-direction: column; }
.app-main { flex: 1; max-width: 960px; width: 100%; margin: 0 auto; padding: 2rem 1rem; }
";

/// Root application component
#[component]
pub fn App(#[prop(optional)] initial: Option<Snapshot>) -> impl IntoView {
    // Providers: state store, scoped style injection. Routing is
    // history-based via <Router>.
    provide_global_state(initial);
    provide_style_injector();

    styles::use_style("app", APP_CSS);

    view! {
        <Router>
            <div class="app">
                <Nav />

                <main class="app-main">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/movie/:id" view=MovieDetail />
                        <Route path="/about" view=About />
                        <Route path="/search" view=LegacySearch />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Pre-rewrite bookmarks point at /search; the search box lives on the
/// home page now.
#[component]
fn LegacySearch() -> impl IntoView {
    view! { <Redirect path="/" /> }
}

/// Catch-all view for unknown paths
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Back to search"</A>
        </div>
    }
}
