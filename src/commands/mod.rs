//! CLI commands

pub mod edit;
pub mod init;
pub mod list;
pub mod new;
pub mod show;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read markdown from a file, or from stdin when no file is given
pub fn read_markdown(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown from {:?}", path)),
        None => {
            let mut markdown = String::new();
            std::io::stdin()
                .read_to_string(&mut markdown)
                .context("Failed to read markdown from stdin")?;
            Ok(markdown)
        }
    }
}
