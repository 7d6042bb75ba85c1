//! Built-in page templates using the Tera template engine
//!
//! The templates are embedded in the binary. Autoescaping stays on for every
//! `.html` template; only the rendered post body and the percent-encoded URLs
//! produced by the `post_url`/`edit_url` filters are marked `safe`.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::{edit_url, post_url};

/// Template renderer with the embedded blog templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all blog templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("posts.html", include_str!("blog/posts.html")),
            ("post.html", include_str!("blog/post.html")),
            ("admin.html", include_str!("blog/admin.html")),
            ("post_form.html", include_str!("blog/post_form.html")),
            ("error.html", include_str!("blog/error.html")),
        ])?;

        tera.register_filter("post_url", post_url_filter);
        tera.register_filter("edit_url", edit_url_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer").finish_non_exhaustive()
    }
}

/// Tera filter: public URL of a post slug
fn post_url_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let slug = tera::try_get_value!("post_url", "value", String, value);
    Ok(tera::Value::String(post_url(&slug)))
}

/// Tera filter: admin edit URL of a post slug
fn edit_url_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let slug = tera::try_get_value!("edit_url", "value", String, value);
    Ok(tera::Value::String(edit_url(&slug)))
}
