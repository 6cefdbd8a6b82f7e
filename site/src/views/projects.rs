//! Project card view model

use askama::Template;
use chrono::{DateTime, Utc};

use super::{animation_delay, MAX_CARD_TAGS};
use crate::domain::entities::RepositoryEntry;
use crate::feed::format::{language_color, relative_time};

/// One repository card
#[derive(Debug, Clone)]
pub struct ProjectCard {
    pub name: String,
    pub url: String,
    pub description: String,
    pub stars: u64,
    pub forks: u64,
    /// Language name, or "Unknown" for the data attribute
    pub language_label: String,
    pub has_language: bool,
    pub language_color: &'static str,
    pub updated: String,
    pub topics: Vec<String>,
    pub animation_delay: String,
}

impl ProjectCard {
    pub fn new(index: usize, entry: &RepositoryEntry, now: DateTime<Utc>) -> Self {
        let language = entry.language.as_deref();

        Self {
            name: entry.name.clone(),
            url: entry.url.clone(),
            description: entry.description.clone(),
            stars: entry.stars,
            forks: entry.forks,
            language_label: language.unwrap_or("Unknown").to_string(),
            has_language: language.is_some(),
            language_color: language.map(language_color).unwrap_or_default(),
            updated: relative_time(now, entry.updated),
            topics: entry.topics.iter().take(MAX_CARD_TAGS).cloned().collect(),
            animation_delay: animation_delay(index),
        }
    }
}

/// Project card list
#[derive(Template)]
#[template(path = "partials/projects.html")]
pub struct ProjectListView {
    pub cards: Vec<ProjectCard>,
}

impl ProjectListView {
    pub fn new(entries: &[RepositoryEntry], now: DateTime<Utc>) -> Self {
        Self {
            cards: entries
                .iter()
                .enumerate()
                .map(|(i, entry)| ProjectCard::new(i, entry, now))
                .collect(),
        }
    }
}
