//! Projects service
//!
//! Loads the repository feed for one GitHub account.
//! A single best-effort request per load; any failure yields the fallback list.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::app::fallback::fallback_projects;
use crate::domain::entities::RepositoryEntry;
use crate::domain::ports::{GitHubRepo, RepoSort, RepositorySource};

/// Page size requested from the listing endpoint
pub const REPOS_PER_PAGE: u32 = 50;

/// Keep original public repositories, newest update first
pub fn select_projects(repos: Vec<GitHubRepo>) -> Vec<RepositoryEntry> {
    let mut projects: Vec<RepositoryEntry> = repos
        .into_iter()
        .filter(|repo| !repo.fork && !repo.private)
        .map(RepositoryEntry::from)
        .collect();

    projects.sort_by(|a, b| b.updated.cmp(&a.updated));
    projects
}

/// Service for loading the repository feed
pub struct ProjectsService<S>
where
    S: RepositorySource + ?Sized,
{
    source: Arc<S>,
    username: String,
    projects: RwLock<Vec<RepositoryEntry>>,
}

impl<S> ProjectsService<S>
where
    S: RepositorySource + ?Sized,
{
    pub fn new(source: Arc<S>, username: String) -> Self {
        Self {
            source,
            username,
            projects: RwLock::new(Vec::new()),
        }
    }

    /// Fetch and replace the project list
    pub async fn load_projects(&self) -> Vec<RepositoryEntry> {
        let projects = match self
            .source
            .list_user_repos(&self.username, RepoSort::Updated, REPOS_PER_PAGE)
            .await
        {
            Ok(repos) => {
                let total = repos.len();
                let projects = select_projects(repos);
                tracing::debug!(
                    username = %self.username,
                    total,
                    kept = projects.len(),
                    "Loaded repositories"
                );
                projects
            }
            Err(e) => {
                tracing::error!("Error loading GitHub projects: {}", e);
                fallback_projects(Utc::now())
            }
        };

        *self.projects.write().await = projects.clone();
        projects
    }

    /// The list from the most recent load
    pub async fn projects(&self) -> Vec<RepositoryEntry> {
        self.projects.read().await.clone()
    }
}
