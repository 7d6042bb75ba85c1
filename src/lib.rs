//! postdir: a minimal file-backed markdown blog
//!
//! Posts live as one markdown file each in a single directory, with a
//! front-matter header carrying the title. The crate provides the post
//! repository, a small admin web UI over it, and a CLI.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{EditPost, NewPost, PostRepository, PostSummary, RawPost, RenderedPost};
pub use error::PostError;

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Create a new blog instance from a directory
    ///
    /// Reads `_config.yml` from the directory when present.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Repository over this blog's posts directory
    pub fn repository(&self) -> PostRepository {
        PostRepository::new(&self.posts_dir)
    }
}
