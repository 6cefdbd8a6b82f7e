//! Post domain entity

use chrono::NaiveDate;
use serde::Serialize;

/// A blog post shown in the post feed and the modal reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostEntry {
    pub title: String,
    /// Derived from the filename, used to open the modal
    pub slug: String,
    pub date: NaiveDate,
    pub author: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    /// Raw markdown; `None` for fallback posts
    pub content: Option<String>,
    /// Converted markdown; `None` for fallback posts
    pub html: Option<String>,
    /// e.g. "5 min read"
    pub read_time: String,
}
