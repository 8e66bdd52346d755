//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod loading;
pub mod movie_card;
pub mod nav;
pub mod search_bar;

pub use loading::Loading;
pub use movie_card::MovieCard;
pub use nav::Nav;
pub use search_bar::SearchBar;
