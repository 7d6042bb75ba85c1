//! Slug rules
//!
//! A slug doubles as a file name inside the posts directory, so anything
//! that could escape the directory or hide the file is rejected outright.
//! Names Windows cannot create (device names, trailing dot or space) are
//! rejected on every platform so a posts directory stays portable.

use crate::error::{PostError, Result};

/// Longest slug accepted, in bytes
pub const MAX_SLUG_LEN: usize = 200;

/// Windows device names, reserved with or without an extension
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

fn is_reserved_name(slug: &str) -> bool {
    let stem = slug.split('.').next().unwrap_or(slug).trim_end_matches(' ');
    RESERVED_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(stem))
}

/// Check that a slug can safely address a file in the posts directory
pub fn validate(slug: &str) -> Result<()> {
    let reason = if slug.is_empty() {
        "slug is empty"
    } else if slug.len() > MAX_SLUG_LEN {
        "slug is too long"
    } else if slug.contains(['/', '\\']) {
        "slug contains a path separator"
    } else if slug.starts_with('.') {
        "slug starts with a dot"
    } else if slug.chars().any(char::is_control) {
        "slug contains control characters"
    } else if slug.ends_with(['.', ' ']) {
        "slug ends with a dot or space"
    } else if is_reserved_name(slug) {
        "slug is a reserved device name"
    } else {
        return Ok(());
    };

    Err(PostError::InvalidSlug {
        slug: slug.to_string(),
        reason,
    })
}

/// Suggest a slug for a title
pub fn suggest(title: &str) -> String {
    slug::slugify(title)
}
