//! HTTP post source

use async_trait::async_trait;
use reqwest::Client;
use urlencoding::encode;

use crate::domain::ports::PostSource;
use crate::error::ContentError;

/// Fetches `{base_url}/blog/{filename}` as raw text
pub struct HttpPostSource {
    http: Client,
    base_url: String,
}

impl HttpPostSource {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn post_url(&self, filename: &str) -> String {
        format!("{}/blog/{}", self.base_url, encode(filename))
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_post(&self, filename: &str) -> Result<String, ContentError> {
        let url = self.post_url(filename);
        tracing::debug!(%url, "Fetching post");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ContentError::Api {
                status: status.as_u16(),
                path: filename.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
