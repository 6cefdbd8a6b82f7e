//! Post content port trait

use async_trait::async_trait;

use crate::error::ContentError;

/// Source of raw markdown posts, addressed by filename
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_post(&self, filename: &str) -> Result<String, ContentError>;
}
