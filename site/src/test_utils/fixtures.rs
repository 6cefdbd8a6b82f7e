//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::entities::{PostEntry, RepositoryEntry};
use crate::domain::ports::GitHubRepo;

/// Create a public, non-forked GitHub repo
pub fn test_github_repo(name: &str) -> GitHubRepo {
    test_github_repo_updated(name, Utc.with_ymd_and_hms(2024, 11, 1, 12, 0, 0).unwrap())
}

/// Create a GitHub repo with a specific update time
pub fn test_github_repo_updated(name: &str, updated_at: DateTime<Utc>) -> GitHubRepo {
    GitHubRepo {
        name: name.to_string(),
        description: Some(format!("The {} project", name)),
        html_url: format!("https://github.com/someone/{}", name),
        language: Some("Rust".to_string()),
        stargazers_count: 7,
        forks_count: 2,
        updated_at,
        topics: vec!["rust".to_string(), "cli".to_string()],
        size: 512,
        fork: false,
        private: false,
    }
}

/// Create a repository entry with default values
pub fn test_repository_entry(name: &str) -> RepositoryEntry {
    RepositoryEntry::from(test_github_repo(name))
}

/// Create a fully loaded post
pub fn test_post(slug: &str) -> PostEntry {
    PostEntry {
        title: format!("Post {}", slug),
        slug: slug.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        author: "Test Author".to_string(),
        tags: vec!["AI".to_string(), "Rust".to_string()],
        excerpt: "A short excerpt.".to_string(),
        content: Some("# Post\n\nBody text.".to_string()),
        html: Some("<h1>Post</h1>\n<p>Body text.</p>\n".to_string()),
        read_time: "1 min read".to_string(),
    }
}

/// Markdown following the blog's metadata conventions
pub fn test_post_markdown(title: &str) -> String {
    format!(
        "# {}\n*Author: Test Author*\n*Tags: AI, Testing*\n\n---\n\nOpening paragraph for {}.\n",
        title, title
    )
}

/// Configuration pointing at the markdown shipped with the crate
pub fn test_config() -> crate::config::Config {
    crate::config::Config {
        port: 0,
        github_username: "someone".to_string(),
        github_api_url: "http://127.0.0.1:9".to_string(),
        blog_base_url: "http://127.0.0.1:9".to_string(),
        blog_dir: crate::config::DEFAULT_BLOG_DIR.to_string(),
        blog_files: crate::config::default_blog_files(),
        blog_post_limit: 3,
        blog_default_author: "Test Author".to_string(),
    }
}
