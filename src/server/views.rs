//! Page contexts for the public pages and the admin forms

use anyhow::Result;
use serde::Serialize;
use tera::Context;

use super::form::{EditErrors, EditPostForm, NewPostErrors, NewPostForm};
use crate::content::{PostSummary, RenderedPost};
use crate::templates::TemplateRenderer;

/// Form fields flagged as missing, in the names the form template uses
#[derive(Debug, Clone, Copy, Default, Serialize)]
struct MissingFields {
    title: bool,
    slug: bool,
    markdown: bool,
}

impl From<&NewPostErrors> for MissingFields {
    fn from(errors: &NewPostErrors) -> Self {
        Self {
            title: errors.title,
            slug: errors.slug,
            markdown: errors.markdown,
        }
    }
}

impl From<&EditErrors> for MissingFields {
    fn from(errors: &EditErrors) -> Self {
        Self {
            title: errors.new_title,
            slug: errors.new_slug,
            markdown: errors.new_markdown,
        }
    }
}

/// Page renderer bound to one site title
pub struct Views<'a> {
    templates: &'a TemplateRenderer,
    site_title: &'a str,
}

impl<'a> Views<'a> {
    pub fn new(templates: &'a TemplateRenderer, site_title: &'a str) -> Self {
        Self {
            templates,
            site_title,
        }
    }

    fn context(&self, page_title: &str) -> Context {
        let mut context = Context::new();
        context.insert("site_title", self.site_title);
        context.insert("page_title", page_title);
        context.insert("version", env!("CARGO_PKG_VERSION"));
        context
    }

    /// Public post index
    pub fn post_list(&self, posts: &[PostSummary]) -> Result<String> {
        let mut context = self.context("Posts");
        context.insert("posts", posts);
        self.templates.render("posts.html", &context)
    }

    /// A single rendered post
    pub fn post_page(&self, post: &RenderedPost) -> Result<String> {
        let mut context = self.context(&post.title);
        context.insert("post", post);
        self.templates.render("post.html", &context)
    }

    /// Admin index: every post with an edit link
    pub fn admin_list(&self, posts: &[PostSummary]) -> Result<String> {
        let mut context = self.context("Admin");
        context.insert("posts", posts);
        self.templates.render("admin.html", &context)
    }

    /// New-post form, with missing fields flagged
    pub fn new_post_form(&self, form: &NewPostForm, errors: &NewPostErrors) -> Result<String> {
        let mut context = self.context("New Post");
        context.insert("form", form);
        context.insert("missing", &MissingFields::from(errors));
        context.insert("button", "Create Post");
        self.templates.render("post_form.html", &context)
    }

    /// Edit form, with missing fields flagged
    pub fn edit_post_form(&self, form: &EditPostForm, errors: &EditErrors) -> Result<String> {
        let mut context = self.context("Edit Post");
        context.insert("form", form);
        context.insert("old_slug", &form.old_slug);
        context.insert("missing", &MissingFields::from(errors));
        context.insert("button", "Update Post");
        self.templates.render("post_form.html", &context)
    }

    /// Generic failure page
    pub fn error_page(&self, heading: &str, message: &str) -> Result<String> {
        let mut context = self.context(heading);
        context.insert("message", message);
        self.templates.render("error.html", &context)
    }
}
