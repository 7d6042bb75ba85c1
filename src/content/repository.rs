//! Post repository - the only code that touches the posts directory
//!
//! Every stored post is one `<slug>.md` file: a front-matter header with a
//! `title`, a blank line, then the markdown body. Nothing is cached; every
//! call goes back to disk.
//!
//! Operations take no locks. Two callers working on the same slug at once
//! can observe a half-written file or lose an update, and an edit whose
//! recreate step fails after the old file was removed leaves no post at all.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use super::{slug, FrontMatter, MarkdownRenderer};
use super::{EditPost, NewPost, PostSummary, RawPost, RenderedPost};
use crate::error::{PostError, Result};

/// File extension of stored posts
pub const POST_EXTENSION: &str = "md";

/// File-backed post storage rooted at one directory
#[derive(Debug, Clone)]
pub struct PostRepository {
    root: PathBuf,
    renderer: MarkdownRenderer,
}

impl PostRepository {
    /// Create a repository over the given posts directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// The posts directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that stores `slug`
    fn path_for(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{}.{}", slug, POST_EXTENSION))
    }

    /// List every post in the directory, in directory order
    ///
    /// Only `<slug>.md` files whose slug passes [`slug::validate`] are posts;
    /// subdirectories, other files and hidden files are skipped, so every
    /// listed slug can be read back. A single post with bad metadata fails
    /// the whole listing.
    pub async fn list_posts(&self) -> Result<Vec<PostSummary>> {
        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| PostError::io(&self.root, e))?;

        let mut posts = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| PostError::io(&self.root, e))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| PostError::io(&path, e))?;
            if file_type.is_dir() {
                tracing::debug!("Skipping directory {:?}", path);
                continue;
            }

            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            let Some(slug) = slug_for_file(&file_name) else {
                tracing::debug!("Skipping non-post file {:?}", path);
                continue;
            };
            let slug = slug.to_string();

            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| PostError::io(&path, e))?;
            let (title, _) = parse_post(&path, &content)?;

            posts.push(PostSummary { slug, title });
        }

        tracing::debug!("Listed {} posts in {:?}", posts.len(), self.root);
        Ok(posts)
    }

    /// Read a post without rendering its body
    pub async fn get_raw_post(&self, slug: &str) -> Result<RawPost> {
        slug::validate(slug)?;
        let path = self.path_for(slug);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PostError::NotFound {
                    slug: slug.to_string(),
                })
            }
            Err(e) => return Err(PostError::io(&path, e)),
        };

        let (title, body) = parse_post(&path, &content)?;
        tracing::debug!("Read post {:?}", path);

        Ok(RawPost {
            slug: slug.to_string(),
            title,
            markdown: body.to_string(),
        })
    }

    /// Read a post and render its body to HTML
    pub async fn get_post(&self, slug: &str) -> Result<RenderedPost> {
        let raw = self.get_raw_post(slug).await?;
        let html = self.renderer.render(&raw.markdown);

        Ok(RenderedPost {
            slug: raw.slug,
            title: raw.title,
            html,
        })
    }

    /// Write a post, replacing any post stored under the same slug
    ///
    /// The result is read back from disk, so a post that cannot be read
    /// after writing fails here too.
    pub async fn create_post(&self, post: &NewPost) -> Result<RenderedPost> {
        check_new_post(post)?;
        let path = self.path_for(&post.slug);

        let header = FrontMatter::with_title(&post.title)
            .render()
            .map_err(|e| PostError::metadata(&path, e.to_string()))?;
        let content = format!("{}\n{}", header, post.markdown);

        fs::write(&path, content)
            .await
            .map_err(|e| PostError::io(&path, e))?;
        tracing::info!("Wrote post {:?}", path);

        self.get_post(&post.slug).await
    }

    /// Replace a post: remove the old file, then create the new post
    ///
    /// Both slugs and the new title are checked before anything is removed.
    /// The two steps are not atomic.
    pub async fn edit_post(&self, edit: &EditPost) -> Result<()> {
        slug::validate(&edit.old_slug)?;
        let replacement = edit.replacement();
        check_new_post(&replacement)?;

        let old_path = self.path_for(&edit.old_slug);
        match fs::remove_file(&old_path).await {
            Ok(()) => tracing::debug!("Removed post {:?}", old_path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PostError::NotFound {
                    slug: edit.old_slug.clone(),
                })
            }
            Err(e) => return Err(PostError::io(&old_path, e)),
        }

        if let Err(e) = self.create_post(&replacement).await {
            tracing::error!(
                "Post {:?} was removed but {:?} could not be written: {}",
                edit.old_slug,
                edit.new_slug,
                e
            );
            return Err(e);
        }

        tracing::info!("Edited post {:?} -> {:?}", edit.old_slug, edit.new_slug);
        Ok(())
    }
}

/// Slug of a stored file: its name with the post extension stripped
///
/// `None` when the name is not `<slug>.md` for a usable slug.
fn slug_for_file(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(POST_EXTENSION)
        .and_then(|stem| stem.strip_suffix('.'))
        .filter(|slug| slug::validate(slug).is_ok())
}

/// Checks that must pass before a post is written
fn check_new_post(post: &NewPost) -> Result<()> {
    slug::validate(&post.slug)?;
    if post.title.is_empty() {
        return Err(PostError::InvalidMetadata {
            path: PathBuf::from(format!("{}.{}", post.slug, POST_EXTENSION)),
            reason: "title is empty".to_string(),
        });
    }
    Ok(())
}

/// Split a stored file into its validated title and body
fn parse_post<'a>(path: &Path, content: &'a str) -> Result<(String, &'a str)> {
    let (fm, body) =
        FrontMatter::parse(content).map_err(|e| PostError::metadata(path, e.to_string()))?;

    match fm.title {
        Some(title) if !title.is_empty() => Ok((title, body)),
        Some(_) => Err(PostError::metadata(path, "title is empty")),
        None => Err(PostError::metadata(path, "title is missing")),
    }
}
