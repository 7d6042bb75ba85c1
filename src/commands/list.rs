//! List posts

use anyhow::Result;

use crate::Blog;

/// List every post's slug and title
pub async fn run(blog: &Blog, json: bool) -> Result<()> {
    let posts = blog.repository().list_posts().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!("  {} [{}]", post.title, post.slug);
    }

    Ok(())
}
