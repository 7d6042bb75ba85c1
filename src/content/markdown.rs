//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

/// CommonMark renderer used for post bodies
///
/// Runs with pulldown-cmark's default options: no tables, footnotes or
/// other extensions, and no sanitizing pass. Raw HTML in a post body is
/// passed through as the renderer emits it.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self {
            options: Options::empty(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
