//! Page handlers
//!
//! The page shell, its behavior script and the health check.

use axum::{
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;

use crate::error::AppError;
use crate::feed::{behavior_script, render_page};

/// GET /
pub async fn index() -> Result<Html<String>, AppError> {
    Ok(Html(render_page()?))
}

/// GET /assets/feeds.js
pub async fn feeds_script() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        behavior_script(),
    )
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
