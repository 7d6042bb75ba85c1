//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# postdir configuration

# Shown in page headers
title: Blog

# Posts directory, relative to this file
posts_dir: posts

# Defaults for `postdir server`
server:
  ip: localhost
  port: 4000
"#;

const HELLO_POST: &str = "---\ntitle: Hello World\n---\n\n# Hi\n\nEdit this post from the admin page.\n";

/// Initialize a new blog in the given directory
///
/// Existing files are left untouched.
pub fn init_blog(target_dir: &Path) -> Result<()> {
    let posts_dir = target_dir.join("posts");
    fs::create_dir_all(&posts_dir)?;

    let config_path = target_dir.join("_config.yml");
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)?;
        tracing::debug!("Created {:?}", config_path);
    }

    let hello_path = posts_dir.join("hello.md");
    if !hello_path.exists() {
        fs::write(&hello_path, HELLO_POST)?;
        tracing::debug!("Created {:?}", hello_path);
    }

    Ok(())
}
