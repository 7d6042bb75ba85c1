//! Post models

use serde::Serialize;

/// A post as it appears in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    /// Slug (file name without extension)
    pub slug: String,

    /// Post title from the front-matter
    pub title: String,
}

/// A post with its unrendered markdown body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawPost {
    pub slug: String,
    pub title: String,

    /// Markdown body, front-matter excluded
    pub markdown: String,
}

/// A post with its body rendered to HTML
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPost {
    pub slug: String,
    pub title: String,
    pub html: String,
}

/// Request to store a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub markdown: String,
}

/// Request to replace an existing post, possibly under a new slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPost {
    pub old_slug: String,
    pub new_title: String,
    pub new_slug: String,
    pub new_markdown: String,
}

impl EditPost {
    /// The post that takes the place of the old one
    pub fn replacement(&self) -> NewPost {
        NewPost {
            title: self.new_title.clone(),
            slug: self.new_slug.clone(),
            markdown: self.new_markdown.clone(),
        }
    }
}
