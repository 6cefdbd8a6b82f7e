//! Fallback entries
//!
//! Shown when the live sources can't be reached so the page never renders
//! an empty feed.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::config::DEFAULT_AUTHOR;
use crate::domain::entities::{PostEntry, RepositoryEntry};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Two placeholder projects, the second updated a day before `now`
pub fn fallback_projects(now: DateTime<Utc>) -> Vec<RepositoryEntry> {
    vec![
        RepositoryEntry {
            name: "InfiniLead".to_string(),
            description: "Cyberpunk AI Portfolio Website with Interactive Games".to_string(),
            url: "#".to_string(),
            language: Some("JavaScript".to_string()),
            stars: 0,
            forks: 0,
            updated: now,
            topics: strings(&["cyberpunk", "portfolio", "games", "ai"]),
            size: 1024,
        },
        RepositoryEntry {
            name: "AI-Research-Framework".to_string(),
            description: "Graph Neural Networks and Uncertainty Quantification Research"
                .to_string(),
            url: "#".to_string(),
            language: Some("Python".to_string()),
            stars: 0,
            forks: 0,
            updated: now - Duration::days(1),
            topics: strings(&["ai", "research", "gnn", "machine-learning"]),
            size: 2048,
        },
    ]
}

fn fallback_post(
    title: &str,
    slug: &str,
    (year, month, day): (i32, u32, u32),
    tags: &[&str],
    excerpt: &str,
    read_time: &str,
) -> Option<PostEntry> {
    Some(PostEntry {
        title: title.to_string(),
        slug: slug.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day)?,
        author: DEFAULT_AUTHOR.to_string(),
        tags: strings(tags),
        excerpt: excerpt.to_string(),
        content: None,
        html: None,
        read_time: read_time.to_string(),
    })
}

/// Three summary-only posts, newest first
pub fn fallback_posts() -> Vec<PostEntry> {
    [
        fallback_post(
            "The AI Revolution in Industrial Applications",
            "ai-revolution-in-industry",
            (2024, 12, 1),
            &["AI", "Industry", "MLOps", "Innovation"],
            "The industrial landscape is undergoing a seismic shift. As Head of the AI \
             Competence Center at Fabasoft, I've witnessed firsthand how artificial \
             intelligence is transforming traditional manufacturing processes.",
            "5 min read",
        ),
        fallback_post(
            "Graph Neural Networks: The Next Frontier in AI",
            "graph-neural-networks-breakthrough",
            (2024, 11, 15),
            &["GNN", "Research", "Deep Learning", "Graph Theory"],
            "During my research at Johannes Kepler University, I delved deep into Graph \
             Neural Networks (GNNs) and their transformative potential.",
            "7 min read",
        ),
        fallback_post(
            "MLOps at Scale: Enterprise Deployment Strategies",
            "mlops-enterprise-deployment",
            (2024, 10, 20),
            &["MLOps", "Enterprise", "Deployment", "DevOps", "AI"],
            "Deploying machine learning models in enterprise environments presents unique \
             challenges that go far beyond the typical data science workflow.",
            "8 min read",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
