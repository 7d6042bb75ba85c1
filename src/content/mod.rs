//! Content module - post models, front-matter, rendering and storage

mod frontmatter;
mod markdown;
mod post;
mod repository;
pub mod slug;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{EditPost, NewPost, PostSummary, RawPost, RenderedPost};
pub use repository::{PostRepository, POST_EXTENSION};
