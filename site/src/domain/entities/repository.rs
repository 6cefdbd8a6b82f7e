//! Repository domain entity
//!
//! One project card on the page, derived from a GitHub repository.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::ports::GitHubRepo;

pub const NO_DESCRIPTION: &str = "No description available";

/// A public, non-forked repository shown in the project feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryEntry {
    pub name: String,
    pub description: String,
    pub url: String,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub updated: DateTime<Utc>,
    pub topics: Vec<String>,
    /// Size in kilobytes as reported by GitHub
    pub size: u64,
}

impl From<GitHubRepo> for RepositoryEntry {
    fn from(repo: GitHubRepo) -> Self {
        RepositoryEntry {
            name: repo.name,
            description: repo
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            url: repo.html_url,
            language: repo.language,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated: repo.updated_at,
            topics: repo.topics,
            size: repo.size,
        }
    }
}
