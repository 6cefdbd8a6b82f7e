use std::env;

/// Posts published on the site, named `YYYY-MM-DD-slug.md`.
pub const DEFAULT_BLOG_FILES: [&str; 3] = [
    "2024-12-01-ai-revolution-in-industry.md",
    "2024-11-15-graph-neural-networks-breakthrough.md",
    "2024-10-20-mlops-enterprise-deployment.md",
];

pub const DEFAULT_AUTHOR: &str = "Alexander Krauck";

/// Markdown shipped with the crate
pub const DEFAULT_BLOG_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/blog");

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Account whose public repositories make up the project feed
    pub github_username: String,
    pub github_api_url: String,
    /// Origin the markdown files are fetched from (`{base}/blog/{file}`)
    pub blog_base_url: String,
    /// Local directory served under `/blog`
    pub blog_dir: String,
    pub blog_files: Vec<String>,
    /// Number of summaries shown when a request does not ask for a limit
    pub blog_post_limit: usize,
    pub blog_default_author: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Self {
            port,
            github_username: env::var("GITHUB_USERNAME")
                .unwrap_or_else(|_| "alexanderkrauck".to_string()),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            blog_base_url: env::var("BLOG_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}", port)),
            blog_dir: env::var("BLOG_DIR").unwrap_or_else(|_| DEFAULT_BLOG_DIR.to_string()),
            blog_files: env::var("BLOG_FILES")
                .ok()
                .map(|files| parse_file_list(&files))
                .filter(|files| !files.is_empty())
                .unwrap_or_else(default_blog_files),
            blog_post_limit: env::var("BLOG_POST_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(3),
            blog_default_author: env::var("BLOG_DEFAULT_AUTHOR")
                .unwrap_or_else(|_| DEFAULT_AUTHOR.to_string()),
        }
    }
}

pub fn default_blog_files() -> Vec<String> {
    DEFAULT_BLOG_FILES.iter().map(|f| f.to_string()).collect()
}

fn parse_file_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(String::from)
        .collect()
}
