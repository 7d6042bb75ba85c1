//! Edit an existing post

use anyhow::Result;
use std::path::Path;

use super::read_markdown;
use crate::content::EditPost;
use crate::Blog;

/// Replace a post; fields left as `None` keep their current value
pub async fn edit_post(
    blog: &Blog,
    old_slug: &str,
    title: Option<String>,
    slug: Option<String>,
    markdown: Option<String>,
) -> Result<EditPost> {
    let repo = blog.repository();
    let current = repo.get_raw_post(old_slug).await?;

    let edit = EditPost {
        old_slug: old_slug.to_string(),
        new_title: title.unwrap_or(current.title),
        new_slug: slug.unwrap_or(current.slug),
        new_markdown: markdown.unwrap_or(current.markdown),
    };
    repo.edit_post(&edit).await?;

    Ok(edit)
}

/// Run the edit command
pub async fn run(
    blog: &Blog,
    old_slug: &str,
    title: Option<String>,
    slug: Option<String>,
    file: Option<&Path>,
) -> Result<()> {
    let markdown = file.map(|path| read_markdown(Some(path))).transpose()?;
    let edit = edit_post(blog, old_slug, title, slug, markdown).await?;

    if edit.old_slug == edit.new_slug {
        println!("Updated: {}", edit.new_slug);
    } else {
        println!("Updated: {} -> {}", edit.old_slug, edit.new_slug);
    }
    Ok(())
}
