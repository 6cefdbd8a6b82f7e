//! GitHub client port trait
//!
//! Defines the interface for listing an account's repositories.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::GitHubError;

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// GitHub repository as returned by `GET /users/{user}/repos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub private: bool,
}

/// Sort order accepted by the repository listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoSort {
    Created,
    Updated,
    Pushed,
    FullName,
}

impl std::fmt::Display for RepoSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoSort::Created => write!(f, "created"),
            RepoSort::Updated => write!(f, "updated"),
            RepoSort::Pushed => write!(f, "pushed"),
            RepoSort::FullName => write!(f, "full_name"),
        }
    }
}

/// Source of repository listings
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// List the public repositories of a user
    async fn list_user_repos(
        &self,
        username: &str,
        sort: RepoSort,
        per_page: u32,
    ) -> Result<Vec<GitHubRepo>, GitHubError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_null_topics_as_empty() {
        let json = serde_json::json!({
            "name": "demo",
            "description": null,
            "html_url": "https://github.com/u/demo",
            "language": null,
            "stargazers_count": 1,
            "forks_count": 0,
            "updated_at": "2024-12-01T10:00:00Z",
            "topics": null,
            "size": 10,
            "fork": false,
            "private": false
        });

        let repo: GitHubRepo = serde_json::from_value(json).unwrap();

        assert!(repo.topics.is_empty());
        assert!(repo.description.is_none());
        assert_eq!(repo.updated_at.to_rfc3339(), "2024-12-01T10:00:00+00:00");
    }

    #[test]
    fn missing_flags_default_to_false() {
        let json = serde_json::json!({
            "name": "demo",
            "description": "d",
            "html_url": "https://github.com/u/demo",
            "language": "Rust",
            "updated_at": "2024-12-01T10:00:00Z"
        });

        let repo: GitHubRepo = serde_json::from_value(json).unwrap();

        assert!(!repo.fork);
        assert!(!repo.private);
        assert_eq!(repo.stargazers_count, 0);
    }

    #[test]
    fn repo_sort_display() {
        assert_eq!(RepoSort::Updated.to_string(), "updated");
        assert_eq!(RepoSort::FullName.to_string(), "full_name");
    }
}
