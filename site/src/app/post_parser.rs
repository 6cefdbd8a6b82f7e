//! Post parser
//!
//! Derives post metadata from the `YYYY-MM-DD-slug.md` filename convention
//! and from lightweight markers in the markdown itself:
//!
//! ```text
//! # Title
//! *Author: Jane Doe*
//! *Tags: AI, Research*
//!
//! ---
//!
//! First paragraph becomes the excerpt.
//! ```
//!
//! Every heuristic degrades to a default instead of failing.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::entities::PostEntry;
use crate::markdown::MarkdownConverter;

pub const DEFAULT_EXCERPT: &str = "Click to read more...";

const WORDS_PER_MINUTE: usize = 200;

/// Author and tag markers are only looked for in this many leading lines
const METADATA_SCAN_LINES: usize = 10;

const AUTHOR_MARKER: &str = "*Author:";
const TAGS_MARKER: &str = "*Tags:";

fn dated_filename_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})-(.+)\.md$").ok())
        .as_ref()
}

/// Split a post filename into its publish date and slug.
///
/// Names that don't follow the dated pattern (or carry an impossible date)
/// get `today` and the filename minus its `.md` extension.
pub fn parse_filename(filename: &str, today: NaiveDate) -> (NaiveDate, String) {
    let dated = dated_filename_regex()
        .and_then(|re| re.captures(filename))
        .and_then(|caps| {
            let date = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()?;
            Some((date, caps[2].to_string()))
        });

    match dated {
        Some(parsed) => parsed,
        None => (today, filename.replacen(".md", "", 1)),
    }
}

/// Text following the last `marker` on the line, up to the next `*`
fn marker_value<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let (_, rest) = line.rsplit_once(marker)?;
    let rest = rest.trim_start();
    Some(match rest.find('*') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Estimated reading time, e.g. "3 min read"
pub fn read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

/// First paragraph line after the `---` separator that is neither a
/// heading nor a metadata/emphasis line
pub fn extract_excerpt(lines: &[&str]) -> Option<String> {
    let separator = lines.iter().position(|line| line.trim() == "---")?;

    lines[separator + 1..]
        .iter()
        .find(|line| !line.trim().is_empty() && !line.starts_with('#') && !line.starts_with('*'))
        .map(|line| line.trim().to_string())
}

/// Turns raw markdown files into post entries
#[derive(Debug, Clone)]
pub struct PostParser {
    converter: MarkdownConverter,
    default_author: String,
}

impl PostParser {
    pub fn new(converter: MarkdownConverter, default_author: String) -> Self {
        Self {
            converter,
            default_author,
        }
    }

    pub fn converter(&self) -> &MarkdownConverter {
        &self.converter
    }

    /// Parse one markdown file into a post entry
    pub fn parse(&self, content: &str, filename: &str, today: NaiveDate) -> PostEntry {
        let (date, slug) = parse_filename(filename, today);

        let lines: Vec<&str> = content.lines().collect();
        let title = lines
            .first()
            .map(|line| line.trim_start_matches('#').trim().to_string())
            .unwrap_or_default();

        let mut author = self.default_author.clone();
        let mut tags = Vec::new();

        for line in lines.iter().take(METADATA_SCAN_LINES).skip(1) {
            if let Some(value) = marker_value(line, AUTHOR_MARKER) {
                author = value.to_string();
            }
            if let Some(value) = marker_value(line, TAGS_MARKER) {
                tags = value
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(String::from)
                    .collect();
            }
        }

        let excerpt = extract_excerpt(&lines).unwrap_or_else(|| DEFAULT_EXCERPT.to_string());

        PostEntry {
            title,
            slug,
            date,
            author,
            tags,
            excerpt,
            content: Some(content.to_string()),
            html: Some(self.converter.to_html(content)),
            read_time: read_time(content),
        }
    }
}
