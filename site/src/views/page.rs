//! Page shell and loading placeholders

use askama::Template;

use crate::feed::behavior::{BEHAVIOR_SCRIPT_PATH, POSTS_CONTAINER_ID, PROJECTS_CONTAINER_ID};

/// Spinner shown in a container until its fragment arrives
#[derive(Template)]
#[template(path = "partials/loading.html")]
pub struct LoadingView {
    pub class_name: &'static str,
    pub message: &'static str,
}

impl LoadingView {
    pub fn projects() -> Self {
        Self {
            class_name: "loading-projects",
            message: "ACCESSING GITHUB REPOSITORIES...",
        }
    }

    pub fn posts() -> Self {
        Self {
            class_name: "loading-blog",
            message: "LOADING NEURAL BLOG ENTRIES...",
        }
    }
}

/// The page holding both feed containers
#[derive(Template)]
#[template(path = "index.html")]
pub struct PageView {
    pub projects_container_id: &'static str,
    pub posts_container_id: &'static str,
    pub script_path: &'static str,
    pub projects_loading: String,
    pub posts_loading: String,
}

impl PageView {
    pub fn new(projects_loading: String, posts_loading: String) -> Self {
        Self {
            projects_container_id: PROJECTS_CONTAINER_ID,
            posts_container_id: POSTS_CONTAINER_ID,
            script_path: BEHAVIOR_SCRIPT_PATH,
            projects_loading,
            posts_loading,
        }
    }
}
