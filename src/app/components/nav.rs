//! Navigation Component
//!
//! Header navigation bar with brand and links.

use leptos::*;
use leptos_router::*;

use crate::app::styles;

const NAV_CSS: &str = "
.nav { background: #1a1d24; border-bottom: 1px solid #2c313c; }
.nav-inner { max-width: 960px; margin: 0 auto; padding: 0 1rem; height: 56px; display: flex; align-items: center; justify-content: space-between; }
.nav-brand { color: #fff; font-weight: 700; font-size: 1.1rem; text-decoration: none; }
.nav-links a { color: #9aa3b2; text-decoration: none; padding: 0.5rem 0.75rem; border-radius: 6px; }
.nav-links a:hover { color: #fff; background: #2c313c; }
";

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    styles::use_style("nav", NAV_CSS);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <A href="/" class="nav-brand">"Movie searcher"</A>

                <div class="nav-links">
                    <A href="/">"Search"</A>
                    <A href="/about">"About"</A>
                </div>
            </div>
        </nav>
    }
}
