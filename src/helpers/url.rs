//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment
///
/// Includes `&` and `'` so an encoded URL can go into a quoted HTML attribute
/// unescaped.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encode a value for use as one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Public URL of a post
///
/// # Examples
/// ```ignore
/// post_url("hello world") // -> "/posts/hello%20world"
/// ```
pub fn post_url(slug: &str) -> String {
    format!("/posts/{}", encode_segment(slug))
}

/// Admin URL for editing a post
pub fn edit_url(slug: &str) -> String {
    format!("/admin/edit/{}", encode_segment(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_url() {
        assert_eq!(post_url("hello-world"), "/posts/hello-world");
        assert_eq!(post_url("hello world"), "/posts/hello%20world");
        assert_eq!(post_url("what?#"), "/posts/what%3F%23");
    }

    #[test]
    fn test_edit_url() {
        assert_eq!(edit_url("a%b"), "/admin/edit/a%25b");
    }

    #[test]
    fn test_attribute_characters_are_encoded() {
        assert_eq!(encode_segment(r#"a&b'c"d<e>"#), "a%26b%27c%22d%3Ce%3E");
    }

    #[test]
    fn test_non_ascii_is_encoded() {
        assert_eq!(encode_segment("é"), "%C3%A9");
    }
}
