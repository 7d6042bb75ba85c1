//! Print a single post

use anyhow::Result;

use crate::Blog;

/// Print a post as rendered HTML, or as raw markdown with `raw`
pub async fn run(blog: &Blog, slug: &str, raw: bool, json: bool) -> Result<()> {
    let repo = blog.repository();

    if raw {
        let post = repo.get_raw_post(slug).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&post)?);
        } else {
            print!("{}", post.markdown);
        }
    } else {
        let post = repo.get_post(slug).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&post)?);
        } else {
            print!("{}", post.html);
        }
    }

    Ok(())
}
