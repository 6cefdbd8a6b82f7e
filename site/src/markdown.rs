//! Markdown to HTML conversion
//!
//! CommonMark with the GitHub-style extensions the blog uses (tables,
//! strikethrough, task lists, fenced code). Single newlines inside a
//! paragraph are kept as line breaks.

use pulldown_cmark::{html, Event, Options, Parser};

#[derive(Debug, Clone, Copy)]
pub struct MarkdownConverter {
    options: Options,
    simple_line_breaks: bool,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        Self {
            options,
            simple_line_breaks: true,
        }
    }

    /// Convert markdown to an HTML fragment
    pub fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let simple_line_breaks = self.simple_line_breaks;
        let events = parser.map(move |event| match event {
            Event::SoftBreak if simple_line_breaks => Event::HardBreak,
            other => other,
        });

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, events);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_headings_and_paragraphs() {
        let html = MarkdownConverter::new().to_html("# Title\n\nHello *world*");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Hello <em>world</em></p>"));
    }

    #[test]
    fn single_newline_becomes_line_break() {
        let html = MarkdownConverter::new().to_html("line one\nline two");
        assert!(html.contains("line one<br />"));
        assert!(html.contains("line two"));
    }

    #[test]
    fn tables_and_strikethrough_enabled() {
        let html = MarkdownConverter::new().to_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn task_lists_enabled() {
        let html = MarkdownConverter::new().to_html("- [x] done\n- [ ] todo");
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn fenced_code_blocks() {
        let html = MarkdownConverter::new().to_html("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre><code class=\"language-rust\">"));
    }
}
