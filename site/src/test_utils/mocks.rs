//! Mock implementations of port traits
//!
//! In-memory sources that can be configured per test and record the calls
//! made against them.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{GitHubRepo, PostSource, RepoSort, RepositorySource};
use crate::error::{ContentError, GitHubError};

// ============================================================================
// Mock Repository Source
// ============================================================================

#[derive(Default)]
pub struct MockRepositorySource {
    repos: Arc<RwLock<Vec<GitHubRepo>>>,
    fail: bool,
    calls: Arc<RwLock<Vec<(String, RepoSort, u32)>>>,
}

impl MockRepositorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every request fails like an unreachable API
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_repos(self, repos: Vec<GitHubRepo>) -> Self {
        self.set_repos(repos);
        self
    }

    pub fn set_repos(&self, repos: Vec<GitHubRepo>) {
        *self.repos.write().unwrap() = repos;
    }

    pub fn calls(&self) -> Vec<(String, RepoSort, u32)> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl RepositorySource for MockRepositorySource {
    async fn list_user_repos(
        &self,
        username: &str,
        sort: RepoSort,
        per_page: u32,
    ) -> Result<Vec<GitHubRepo>, GitHubError> {
        self.calls
            .write()
            .unwrap()
            .push((username.to_string(), sort, per_page));

        if self.fail {
            return Err(GitHubError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }

        Ok(self.repos.read().unwrap().clone())
    }
}

// ============================================================================
// In-Memory Post Source
// ============================================================================

/// Serves the posts it holds; any other filename is a 404
#[derive(Default)]
pub struct InMemoryPostSource {
    posts: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPostSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_post(self, filename: &str, content: &str) -> Self {
        self.posts
            .write()
            .unwrap()
            .insert(filename.to_string(), content.to_string());
        self
    }
}

#[async_trait]
impl PostSource for InMemoryPostSource {
    async fn fetch_post(&self, filename: &str) -> Result<String, ContentError> {
        self.posts
            .read()
            .unwrap()
            .get(filename)
            .cloned()
            .ok_or_else(|| ContentError::Api {
                status: 404,
                path: filename.to_string(),
            })
    }
}
