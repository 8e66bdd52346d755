//! API Access
//!
//! HTTP client for the server's JSON API.

pub mod client;

pub use client::{fetch_movie, get_api_base, search};
