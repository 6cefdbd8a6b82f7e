//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::ports::{GitHubRepo, RepoSort, RepositorySource};
use crate::error::GitHubError;

/// Implementation of the GitHub API client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
}

impl GitHubClientImpl {
    pub fn new(base_url: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("portfolio-site/", env!("CARGO_PKG_VERSION"))),
        );

        // Builder only fails on TLS backend init; a bare client is still usable.
        let http = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 403 || status.as_u16() == 429 {
            Err(GitHubError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl RepositorySource for GitHubClientImpl {
    async fn list_user_repos(
        &self,
        username: &str,
        sort: RepoSort,
        per_page: u32,
    ) -> Result<Vec<GitHubRepo>, GitHubError> {
        let url = self.api_url(&format!("/users/{}/repos", encode(username)));
        tracing::debug!(%url, %sort, per_page, "Listing repositories");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("sort", sort.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
