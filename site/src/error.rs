//! Unified error types for the portfolio site
//!
//! This module defines error types for each layer:
//! - `GitHubError`: GitHub REST client errors
//! - `ContentError`: markdown file fetch errors
//! - `AppError`: Application layer errors (rendered as HTTP responses)
//!
//! Loader errors never reach `AppError`: the services swallow them and
//! degrade to fallback data.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Markdown file fetch errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to load {path}: HTTP {status}")]
    Api { status: u16, path: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::Render(e) => {
                tracing::error!("Template rendering failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("post missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn github_api_error_message() {
        let err = GitHubError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - boom");
    }

    #[test]
    fn content_error_names_path() {
        let err = ContentError::Api {
            status: 404,
            path: "2024-12-01-post.md".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load 2024-12-01-post.md: HTTP 404"
        );
    }
}
