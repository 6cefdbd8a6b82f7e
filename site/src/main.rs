//! Portfolio site server
//!
//! Serves a page with two independent feeds: public GitHub repositories
//! rendered as project cards, and markdown blog posts rendered as summaries
//! with a modal reader. Uses a ports & adapters layout so the loaders can be
//! exercised without the network.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;
mod markdown;
mod views;

#[cfg(test)]
mod test_utils;


use adapters::{GitHubClientImpl, HttpPostSource};
use app::{BlogService, PostParser, ProjectsService};
use config::Config;
use domain::ports::{PostSource, RepositorySource};
use feed::behavior::{BEHAVIOR_SCRIPT_PATH, POSTS_FRAGMENT_PATH, PROJECTS_FRAGMENT_PATH};
use markdown::MarkdownConverter;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub projects_service: Arc<ProjectsService<dyn RepositorySource>>,
    pub blog_service: Arc<BlogService<dyn PostSource>>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        repositories: Arc<dyn RepositorySource>,
        posts: Arc<dyn PostSource>,
        config: Config,
    ) -> Self {
        let parser = PostParser::new(
            MarkdownConverter::new(),
            config.blog_default_author.clone(),
        );

        Self {
            projects_service: Arc::new(ProjectsService::new(
                repositories,
                config.github_username.clone(),
            )),
            blog_service: Arc::new(BlogService::new(posts, config.blog_files.clone(), parser)),
            config,
        }
    }
}

/// Build the router: page, behavior script, fragments, and the markdown
/// directory under `/blog`
pub fn router(state: AppState) -> Router {
    let blog_files = ServeDir::new(&state.config.blog_dir);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route(BEHAVIOR_SCRIPT_PATH, get(handlers::feeds_script))
        .route(PROJECTS_FRAGMENT_PATH, get(handlers::get_projects))
        .route(POSTS_FRAGMENT_PATH, get(handlers::get_posts))
        .route(
            &format!("{}/:slug", POSTS_FRAGMENT_PATH),
            get(handlers::get_post),
        )
        .nest_service("/blog", blog_files)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio site...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        username = %config.github_username,
        posts = config.blog_files.len(),
        blog_dir = %config.blog_dir,
        "Configuration loaded"
    );

    // Create adapters
    let github: Arc<dyn RepositorySource> =
        Arc::new(GitHubClientImpl::new(config.github_api_url.clone()));
    let posts: Arc<dyn PostSource> = Arc::new(HttpPostSource::new(config.blog_base_url.clone()));

    let state = AppState::new(github, posts, config.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
