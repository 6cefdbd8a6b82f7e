//! HTTP handlers
//!
//! Axum request handlers for the page and its feed fragments.

pub mod fragments;
pub mod pages;

pub use fragments::{get_post, get_posts, get_projects};
pub use pages::{feeds_script, health, index};
