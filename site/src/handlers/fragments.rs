//! Feed fragment handlers
//!
//! Each request reloads its feed and renders it for insertion into the page.
//! Supports content negotiation: Accept: application/json returns the entries
//! themselves, otherwise an HTML fragment.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::error::AppError;
use crate::feed::{render_post_modal, render_posts, render_projects};
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// GET /fragments/projects
pub async fn get_projects(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let projects = state.projects_service.load_projects().await;

    if wants_json(&headers) {
        Ok(Json(projects).into_response())
    } else {
        Ok(Html(render_projects(&projects, Utc::now())?).into_response())
    }
}

#[derive(Debug, Deserialize)]
pub struct PostsParams {
    pub limit: Option<usize>,
}

/// GET /fragments/posts?limit=N
pub async fn get_posts(
    State(state): State<AppState>,
    Query(params): Query<PostsParams>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let posts = state.blog_service.load_posts().await;
    let limit = params.limit.unwrap_or(state.config.blog_post_limit);

    if wants_json(&headers) {
        let shown: Vec<_> = posts.into_iter().take(limit).collect();
        Ok(Json(shown).into_response())
    } else {
        Ok(Html(render_posts(&posts, limit)?).into_response())
    }
}

/// GET /fragments/posts/:slug
///
/// Modal markup for a post from the most recent load. A cold server loads
/// the feed first so a direct link still resolves.
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    if state.blog_service.posts().await.is_empty() {
        state.blog_service.load_posts().await;
    }

    let post = state
        .blog_service
        .find_post(&slug)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", slug)))?;

    let converter = state.blog_service.parser().converter();
    Ok(Html(render_post_modal(&post, converter)?))
}
