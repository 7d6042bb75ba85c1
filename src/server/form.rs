//! Admin form submissions and their field-level validation
//!
//! Validation failures are values, not errors: the handler re-displays the
//! form with the flagged fields and the repository is never called.

use serde::{Deserialize, Serialize};

use crate::content::{EditPost, NewPost, RawPost};

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Fields posted by the edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditPostForm {
    /// Hidden field carrying the slug the form was loaded for
    pub old_slug: String,
    pub title: String,
    pub slug: String,
    pub markdown: String,
}

impl From<RawPost> for EditPostForm {
    /// Pre-fill the form from a stored post
    fn from(post: RawPost) -> Self {
        Self {
            old_slug: post.slug.clone(),
            title: post.title,
            slug: post.slug,
            markdown: post.markdown,
        }
    }
}

/// Which edit form fields are missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditErrors {
    #[serde(skip_serializing_if = "is_false")]
    pub new_title: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub new_slug: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub new_markdown: bool,
}

impl EditErrors {
    pub fn is_empty(&self) -> bool {
        !(self.new_title || self.new_slug || self.new_markdown)
    }
}

impl EditPostForm {
    /// Turn the submission into an edit request, or report missing fields
    pub fn validate(self) -> Result<EditPost, EditErrors> {
        let errors = EditErrors {
            new_title: self.title.is_empty(),
            new_slug: self.slug.is_empty(),
            new_markdown: self.markdown.is_empty(),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EditPost {
            old_slug: self.old_slug,
            new_title: self.title,
            new_slug: self.slug,
            new_markdown: self.markdown,
        })
    }
}

/// Fields posted by the new-post form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPostForm {
    pub title: String,
    pub slug: String,
    pub markdown: String,
}

/// Which new-post form fields are missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewPostErrors {
    #[serde(skip_serializing_if = "is_false")]
    pub title: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub slug: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub markdown: bool,
}

impl NewPostErrors {
    pub fn is_empty(&self) -> bool {
        !(self.title || self.slug || self.markdown)
    }
}

impl NewPostForm {
    /// Turn the submission into a create request, or report missing fields
    pub fn validate(self) -> Result<NewPost, NewPostErrors> {
        let errors = NewPostErrors {
            title: self.title.is_empty(),
            slug: self.slug.is_empty(),
            markdown: self.markdown.is_empty(),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewPost {
            title: self.title,
            slug: self.slug,
            markdown: self.markdown,
        })
    }
}
