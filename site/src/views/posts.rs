//! Post summary and modal view models

use askama::Template;

use super::{animation_delay, MAX_CARD_TAGS};
use crate::domain::entities::PostEntry;
use crate::feed::format::long_date;
use crate::markdown::MarkdownConverter;

/// One post summary card
#[derive(Debug, Clone)]
pub struct PostCard {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub read_time: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub animation_delay: String,
}

impl PostCard {
    pub fn new(index: usize, post: &PostEntry) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            date: long_date(post.date),
            read_time: post.read_time.clone(),
            excerpt: post.excerpt.clone(),
            tags: post.tags.iter().take(MAX_CARD_TAGS).cloned().collect(),
            animation_delay: animation_delay(index),
        }
    }
}

/// Post summary list
#[derive(Template)]
#[template(path = "partials/posts.html")]
pub struct PostListView {
    pub cards: Vec<PostCard>,
}

impl PostListView {
    /// Summaries for the first `limit` posts
    pub fn new(posts: &[PostEntry], limit: usize) -> Self {
        Self {
            cards: posts
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, post)| PostCard::new(i, post))
                .collect(),
        }
    }
}

/// Full post overlay
#[derive(Template)]
#[template(path = "partials/post_modal.html")]
pub struct PostModalView {
    pub title: String,
    pub date: String,
    pub author: String,
    pub read_time: String,
    /// Already-converted markdown, emitted unescaped
    pub body_html: String,
}

impl PostModalView {
    pub fn new(post: &PostEntry, converter: &MarkdownConverter) -> Self {
        let body_html = match (&post.html, &post.content) {
            (Some(html), _) => html.clone(),
            (None, Some(content)) => converter.to_html(content),
            (None, None) => converter.to_html(&post.excerpt),
        };

        Self {
            title: post.title.clone(),
            date: long_date(post.date),
            author: post.author.clone(),
            read_time: post.read_time.clone(),
            body_html,
        }
    }
}
