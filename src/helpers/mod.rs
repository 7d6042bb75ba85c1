//! Helper functions for views
//!
//! URL generation shared by the server handlers and the template filters.

mod url;

pub use url::*;
