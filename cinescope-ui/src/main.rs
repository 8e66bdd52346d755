//! Movie Searcher Frontend
//!
//! Client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The server renders every page first; this crate mounts the
//! same tree under the `#root` anchor and hydrates its store from the
//! `window.__PRELOADED_STATE__` snapshot the page carries, so the first
//! view needs no API calls. Later navigation talks to the JSON API.

use leptos::*;
use wasm_bindgen::JsCast;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Snapshot embedded by the server, if any
    let initial = state::global::read_preloaded_state();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("no document available");
    let root = document
        .get_element_by_id("root")
        .expect("missing #root mount point");
    let root: web_sys::HtmlElement = root.dyn_into().expect("#root is not an HTML element");

    mount_to(root, move || view! { <app::App initial=initial /> });
}
