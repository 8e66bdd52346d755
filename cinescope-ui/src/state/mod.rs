//! State Management
//!
//! Global application state and scoped style injection.

pub mod global;
pub mod styles;

pub use global::{provide_global_state, GlobalState, Movie, SearchStatus, Snapshot};
pub use styles::{provide_style_injector, StyleInjector};
