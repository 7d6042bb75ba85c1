//! Front-matter parsing and emission

use serde::{Deserialize, Serialize};

/// Line that opens and closes a YAML header
const DELIMITER: &str = "---";

/// YAML document end marker, also accepted as a closing line
const DOCUMENT_END: &str = "...";

/// Front-matter data from a post
///
/// Only `title` is recognised. Any other keys in the header are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl FrontMatter {
    /// Front-matter carrying just a title
    pub fn with_title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
        }
    }

    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    ///
    /// Content without a complete `---` block yields default front-matter
    /// and the whole content as body. A single blank line following the
    /// closing delimiter is not part of the body.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some(rest) = strip_opening(content) else {
            return Ok((FrontMatter::default(), content));
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            let marker = line.trim_end();
            if marker == DELIMITER || marker == DOCUMENT_END {
                let yaml = &rest[..offset];
                let body = skip_line_break(&rest[offset + line.len()..]);

                if yaml.trim().is_empty() {
                    return Ok((FrontMatter::default(), body));
                }

                let fm = serde_yaml::from_str::<FrontMatter>(yaml)?;
                return Ok((fm, body));
            }
            offset += line.len();
        }

        // No closing ---, treat as no front-matter
        Ok((FrontMatter::default(), content))
    }

    /// Render the header block, both delimiters included
    pub fn render(&self) -> Result<String, serde_yaml::Error> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n"))
    }
}

/// Strip the opening `---` line, which must be the first line
fn strip_opening(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

fn skip_line_break(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = "---\ntitle: Hello World\n---\n\n# Hi\n\nThis is the content.\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(body, "# Hi\n\nThis is the content.\n");
    }

    #[test]
    fn test_body_without_blank_line() {
        let (fm, body) = FrontMatter::parse("---\ntitle: Tight\n---\n# Hi").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Tight"));
        assert_eq!(body, "# Hi");
    }

    #[test]
    fn test_only_one_blank_line_dropped() {
        let (_, body) = FrontMatter::parse("---\ntitle: t\n---\n\n\n  indented\n").unwrap();
        assert_eq!(body, "\n  indented\n");
    }

    #[test]
    fn test_crlf_frontmatter() {
        let content = "---\r\ntitle: Windows\r\n---\r\n\r\nBody\r\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Windows"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_document_end_marker_closes_header() {
        let (fm, body) = FrontMatter::parse("---\ntitle: Dots\n...\nBody").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Dots"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let content = "---\ntitle: Extra\ndate: 2024-01-15\ntags:\n  - rust\n---\n\nBody";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Extra"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n\n---\n\nwith a rule";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let content = "---\ntitle: Never closed\n\nBody";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_header() {
        let (fm, body) = FrontMatter::parse("---\n---\nBody").unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_empty_title_value() {
        let (fm, _) = FrontMatter::parse("---\ntitle:\n---\nBody").unwrap();
        assert_eq!(fm.title, None);
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        assert!(FrontMatter::parse("---\ntitle: [unclosed\n---\nBody").is_err());
    }

    #[test]
    fn test_render_header() {
        let header = FrontMatter::with_title("Hello World").render().unwrap();
        assert_eq!(header, "---\ntitle: Hello World\n---\n");
    }

    #[test]
    fn test_render_quotes_yaml_significant_title() {
        for title in ["Rust: a love story", "# not a comment", "---", "'quoted'", "yes"] {
            let header = FrontMatter::with_title(title).render().unwrap();
            let (fm, body) = FrontMatter::parse(&header).unwrap();
            assert_eq!(fm.title.as_deref(), Some(title), "header was {header:?}");
            assert_eq!(body, "");
        }
    }
}
