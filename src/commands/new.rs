//! Create a new post

use anyhow::Result;
use std::path::Path;

use super::read_markdown;
use crate::content::slug::suggest;
use crate::content::{NewPost, RenderedPost};
use crate::Blog;

/// Create a post, suggesting a slug from the title when none is given
///
/// Refuses to replace an existing post unless `force` is set.
pub async fn create_post(
    blog: &Blog,
    title: &str,
    slug: Option<&str>,
    markdown: String,
    force: bool,
) -> Result<RenderedPost> {
    let slug = match slug {
        Some(s) => s.to_string(),
        None => suggest(title),
    };

    let repo = blog.repository();
    match repo.get_raw_post(&slug).await {
        Ok(_) if !force => anyhow::bail!("Post already exists: {}", slug),
        Ok(_) => tracing::warn!("Overwriting post {}", slug),
        Err(e) if e.is_not_found() => {}
        Err(e) => tracing::warn!("Replacing unreadable post {}: {}", slug, e),
    }

    tokio::fs::create_dir_all(&blog.posts_dir).await?;
    let post = repo
        .create_post(&NewPost {
            title: title.to_string(),
            slug,
            markdown,
        })
        .await?;

    Ok(post)
}

/// Run the new command
pub async fn run(
    blog: &Blog,
    title: &str,
    slug: Option<&str>,
    file: Option<&Path>,
    force: bool,
) -> Result<()> {
    let markdown = read_markdown(file)?;
    let post = create_post(blog, title, slug, markdown, force).await?;
    println!("Created: {}", post.slug);
    Ok(())
}
