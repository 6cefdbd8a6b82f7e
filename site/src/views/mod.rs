//! View models
//!
//! Askama templates for the page shell and the feed fragments. The view
//! models hold display-ready strings; every field is HTML-escaped by the
//! template except converted markdown.

mod page;
mod posts;
mod projects;

pub use page::{LoadingView, PageView};
pub use posts::{PostListView, PostModalView};
pub use projects::ProjectListView;

/// Topics and tags shown per card
pub const MAX_CARD_TAGS: usize = 3;

/// Stagger between card entrance animations
pub fn animation_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}
