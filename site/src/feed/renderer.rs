//! Feed renderer
//!
//! Renders entry lists to HTML fragments. Output depends only on the
//! arguments, so rendering the same list twice yields identical markup.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::domain::entities::{PostEntry, RepositoryEntry};
use crate::markdown::MarkdownConverter;
use crate::views::{LoadingView, PageView, PostListView, PostModalView, ProjectListView};

/// Render project cards; `now` anchors the "Updated ..." labels
pub fn render_projects(
    projects: &[RepositoryEntry],
    now: DateTime<Utc>,
) -> Result<String, askama::Error> {
    ProjectListView::new(projects, now).render()
}

/// Render summaries for the first `limit` posts
pub fn render_posts(posts: &[PostEntry], limit: usize) -> Result<String, askama::Error> {
    PostListView::new(posts, limit).render()
}

/// Render the modal overlay for one post
pub fn render_post_modal(
    post: &PostEntry,
    converter: &MarkdownConverter,
) -> Result<String, askama::Error> {
    PostModalView::new(post, converter).render()
}

pub fn render_projects_loading() -> Result<String, askama::Error> {
    LoadingView::projects().render()
}

pub fn render_posts_loading() -> Result<String, askama::Error> {
    LoadingView::posts().render()
}

/// Render the page shell with both containers in their loading state
pub fn render_page() -> Result<String, askama::Error> {
    PageView::new(render_projects_loading()?, render_posts_loading()?).render()
}
