//! Scoped Style Injection
//!
//! Client-side counterpart of the server's style collection. Components
//! register their CSS on mount and a `<style>` element is appended to the
//! document head, one per stylesheet name. Every insertion records a
//! cleanup handle that removes its element; the handles only run if the
//! injector is disposed when the mount point is torn down.

use leptos::{provide_context, use_context};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Injects component stylesheets into the document head
#[derive(Clone, Default)]
pub struct StyleInjector {
    inner: Rc<RefCell<InjectorInner>>,
}

#[derive(Default)]
struct InjectorInner {
    names: HashSet<&'static str>,
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl StyleInjector {
    /// Insert a named stylesheet once; later calls with the same name are
    /// no-ops (one component type, one style element).
    pub fn insert(&self, name: &'static str, css: &'static str) {
        let mut inner = self.inner.borrow_mut();
        if !inner.names.insert(name) {
            return;
        }

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(head) = document.head() else {
            return;
        };
        let Ok(element) = document.create_element("style") else {
            return;
        };

        let _ = element.set_attribute("data-style", name);
        element.set_text_content(Some(css));

        if head.append_child(&element).is_ok() {
            inner.cleanups.push(Box::new(move || element.remove()));
        }
    }

    /// Remove every injected style element
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.names.clear();
        for cleanup in inner.cleanups.drain(..) {
            cleanup();
        }
    }
}

/// Provide a style injector to the component tree
pub fn provide_style_injector() {
    provide_context(StyleInjector::default());
}

/// Register a component stylesheet with the ambient injector
pub fn use_style(name: &'static str, css: &'static str) {
    if let Some(injector) = use_context::<StyleInjector>() {
        injector.insert(name, css);
    }
}
