//! Style Collection
//!
//! Components register their scoped CSS here while the tree renders. The
//! server collects the registered text after rendering and inlines it as
//! the page's critical CSS, so the first paint needs no extra round trip.

use leptos::use_context;
use std::sync::{Arc, Mutex};

/// Per-request registry of component stylesheets.
///
/// Cloning shares the underlying rule list; a registry is created for each
/// render and provided to the tree via context.
#[derive(Clone, Default)]
pub struct StyleRegistry {
    rules: Arc<Mutex<Vec<(&'static str, &'static str)>>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named stylesheet. Repeated registrations of the same
    /// name (one per component instance) are collapsed to one rule block.
    pub fn register(&self, name: &'static str, css: &'static str) {
        let mut rules = self.rules.lock().expect("style registry lock poisoned");
        if !rules.iter().any(|(existing, _)| *existing == name) {
            rules.push((name, css));
        }
    }

    /// All registered CSS in registration order
    pub fn to_css(&self) -> String {
        let rules = self.rules.lock().expect("style registry lock poisoned");
        rules
            .iter()
            .map(|(_, css)| css.trim())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.rules.lock().expect("style registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Register a component stylesheet with the ambient registry, if one was
/// provided for this render.
pub fn use_style(name: &'static str, css: &'static str) {
    if let Some(registry) = use_context::<StyleRegistry>() {
        registry.register(name, css);
    }
}
