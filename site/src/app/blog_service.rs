//! Blog service
//!
//! Loads the post feed: every configured file is fetched concurrently and a
//! failed file is simply left out. Only when nothing could be loaded does
//! the service fall back to the fixed post list.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use tokio::sync::RwLock;

use crate::app::fallback::fallback_posts;
use crate::app::post_parser::PostParser;
use crate::domain::entities::PostEntry;
use crate::domain::ports::PostSource;

/// Newest first; posts sharing a date keep their file-list order
pub fn sort_posts(posts: &mut [PostEntry]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Service for loading the post feed
pub struct BlogService<S>
where
    S: PostSource + ?Sized,
{
    source: Arc<S>,
    files: Vec<String>,
    parser: PostParser,
    posts: RwLock<Vec<PostEntry>>,
}

impl<S> BlogService<S>
where
    S: PostSource + ?Sized,
{
    pub fn new(source: Arc<S>, files: Vec<String>, parser: PostParser) -> Self {
        Self {
            source,
            files,
            parser,
            posts: RwLock::new(Vec::new()),
        }
    }

    pub fn parser(&self) -> &PostParser {
        &self.parser
    }

    /// Fetch, parse and replace the post list
    pub async fn load_posts(&self) -> Vec<PostEntry> {
        self.load_posts_at(Utc::now().date_naive()).await
    }

    /// Same as [`load_posts`](Self::load_posts) with an explicit "today" for
    /// files whose name carries no date
    pub async fn load_posts_at(&self, today: NaiveDate) -> Vec<PostEntry> {
        let fetches = self.files.iter().map(|filename| async move {
            match self.source.fetch_post(filename).await {
                Ok(content) => Some(self.parser.parse(&content, filename, today)),
                Err(e) => {
                    tracing::warn!("Could not load blog post: {}: {}", filename, e);
                    None
                }
            }
        });

        let mut posts: Vec<PostEntry> = join_all(fetches).await.into_iter().flatten().collect();

        if posts.is_empty() && !self.files.is_empty() {
            tracing::error!(
                files = self.files.len(),
                "Error loading blog posts: every file failed, using fallback posts"
            );
            posts = fallback_posts();
        }

        sort_posts(&mut posts);
        tracing::debug!(loaded = posts.len(), "Loaded blog posts");

        *self.posts.write().await = posts.clone();
        posts
    }

    /// The list from the most recent load
    pub async fn posts(&self) -> Vec<PostEntry> {
        self.posts.read().await.clone()
    }

    /// Look a post up by slug in the most recent load
    pub async fn find_post(&self, slug: &str) -> Option<PostEntry> {
        self.posts
            .read()
            .await
            .iter()
            .find(|post| post.slug == slug)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::MarkdownConverter;
    use crate::test_utils::{test_post_markdown, InMemoryPostSource};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn create_service(source: InMemoryPostSource, files: &[&str]) -> BlogService<InMemoryPostSource> {
        BlogService::new(
            Arc::new(source),
            files.iter().map(|f| f.to_string()).collect(),
            PostParser::new(MarkdownConverter::new(), "Test Author".to_string()),
        )
    }

    #[tokio::test]
    async fn load_posts_sorted_newest_first() {
        let source = InMemoryPostSource::new()
            .with_post("2024-10-20-oldest.md", &test_post_markdown("Oldest"))
            .with_post("2024-12-01-newest.md", &test_post_markdown("Newest"))
            .with_post("2024-11-15-middle.md", &test_post_markdown("Middle"));
        let service = create_service(
            source,
            &["2024-10-20-oldest.md", "2024-12-01-newest.md", "2024-11-15-middle.md"],
        );

        let posts = service.load_posts_at(today()).await;

        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn load_posts_omits_failed_file() {
        let source = InMemoryPostSource::new()
            .with_post("2024-12-01-a.md", &test_post_markdown("A"))
            .with_post("2024-10-01-c.md", &test_post_markdown("C"));
        let service = create_service(
            source,
            &["2024-12-01-a.md", "2024-11-01-missing.md", "2024-10-01-c.md"],
        );

        let posts = service.load_posts_at(today()).await;

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "a");
        assert_eq!(posts[1].slug, "c");
    }

    #[tokio::test]
    async fn load_posts_total_failure_uses_fallback() {
        let service = create_service(InMemoryPostSource::new(), &["2024-12-01-a.md", "2024-11-01-b.md"]);

        let posts = service.load_posts_at(today()).await;

        assert_eq!(posts, fallback_posts());
    }

    #[tokio::test]
    async fn load_posts_no_files_is_empty() {
        let service = create_service(InMemoryPostSource::new(), &[]);

        let posts = service.load_posts_at(today()).await;

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn load_posts_undated_file_gets_today() {
        let source = InMemoryPostSource::new()
            .with_post("about.md", &test_post_markdown("About"))
            .with_post("2024-12-01-a.md", &test_post_markdown("A"));
        let service = create_service(source, &["2024-12-01-a.md", "about.md"]);

        let posts = service.load_posts_at(today()).await;

        assert_eq!(posts[0].slug, "about");
        assert_eq!(posts[0].date, today());
    }

    #[tokio::test]
    async fn find_post_uses_last_load() {
        let source = InMemoryPostSource::new().with_post("2024-12-01-a.md", &test_post_markdown("A"));
        let service = create_service(source, &["2024-12-01-a.md"]);

        assert!(service.find_post("a").await.is_none());

        service.load_posts_at(today()).await;

        let post = service.find_post("a").await.unwrap();
        assert_eq!(post.title, "A");
        assert!(service.find_post("unknown").await.is_none());
    }

    #[test]
    fn sort_posts_is_stable_for_equal_dates() {
        let mut posts = crate::app::fallback::fallback_posts();
        for post in posts.iter_mut() {
            post.date = today();
        }
        let before: Vec<String> = posts.iter().map(|p| p.slug.clone()).collect();

        sort_posts(&mut posts);

        let after: Vec<String> = posts.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(before, after);
    }
}
