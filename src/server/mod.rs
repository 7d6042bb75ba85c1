//! Web server: public post pages and the admin forms

pub mod form;
pub mod views;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::PostRepository;
use crate::error::PostError;
use crate::helpers::post_url;
use crate::templates::TemplateRenderer;
use crate::Blog;
use form::{EditErrors, EditPostForm, NewPostErrors, NewPostForm};
use views::Views;

/// Server state
pub struct AppState {
    pub repo: PostRepository,
    pub site_title: String,
    pub templates: TemplateRenderer,
}

impl AppState {
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            repo: blog.repository(),
            site_title: blog.config.title.clone(),
            templates: TemplateRenderer::new()?,
        })
    }

    fn views(&self) -> Views<'_> {
        Views::new(&self.templates, &self.site_title)
    }
}

type SharedState = Arc<AppState>;

/// Failure surfaced from a handler, already rendered as an error page
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    page: Option<String>,
}

impl AppError {
    fn new(state: &AppState, error: PostError) -> Self {
        match &error {
            PostError::NotFound { slug } => Self::page(
                state,
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("There is no post called {:?}.", slug),
            ),
            PostError::InvalidSlug { reason, .. } => Self::page(
                state,
                StatusCode::BAD_REQUEST,
                "Bad Request",
                format!("That slug cannot be used: {}.", reason),
            ),
            _ => {
                tracing::error!("Request failed: {}", error);
                Self::internal(state)
            }
        }
    }

    fn render(state: &AppState, error: anyhow::Error) -> Self {
        tracing::error!("Failed to render page: {:#}", error);
        Self::internal(state)
    }

    fn internal(state: &AppState) -> Self {
        Self::page(
            state,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong",
            "The request could not be completed.".to_string(),
        )
    }

    fn page(state: &AppState, status: StatusCode, heading: &str, message: String) -> Self {
        let page = match state.views().error_page(heading, &message) {
            Ok(page) => Some(page),
            Err(e) => {
                tracing::error!("Failed to render error page: {:#}", e);
                None
            }
        };
        Self {
            status,
            message,
            page,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.page {
            Some(page) => (self.status, Html(page)).into_response(),
            None => (self.status, self.message).into_response(),
        }
    }
}

/// Build the application router
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/posts") }))
        .route("/posts", get(list_posts))
        .route("/posts/:slug", get(show_post))
        .route("/admin", get(admin_index))
        .route("/admin/new", get(new_post_page).post(create_post))
        .route("/admin/edit/:slug", get(edit_post_page).post(update_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    tokio::fs::create_dir_all(&blog.posts_dir).await?;
    let state = Arc::new(AppState::new(blog)?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    tracing::info!("Serving posts from {:?}", blog.posts_dir);
    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_posts(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let posts = state
        .repo
        .list_posts()
        .await
        .map_err(|e| AppError::new(&state, e))?;
    let page = state
        .views()
        .post_list(&posts)
        .map_err(|e| AppError::render(&state, e))?;
    Ok(Html(page))
}

async fn show_post(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let post = state
        .repo
        .get_post(&slug)
        .await
        .map_err(|e| AppError::new(&state, e))?;
    let page = state
        .views()
        .post_page(&post)
        .map_err(|e| AppError::render(&state, e))?;
    Ok(Html(page))
}

async fn admin_index(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let posts = state
        .repo
        .list_posts()
        .await
        .map_err(|e| AppError::new(&state, e))?;
    let page = state
        .views()
        .admin_list(&posts)
        .map_err(|e| AppError::render(&state, e))?;
    Ok(Html(page))
}

async fn new_post_page(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let page = state
        .views()
        .new_post_form(&NewPostForm::default(), &NewPostErrors::default())
        .map_err(|e| AppError::render(&state, e))?;
    Ok(Html(page))
}

async fn create_post(
    State(state): State<SharedState>,
    Form(form): Form<NewPostForm>,
) -> Result<Response, AppError> {
    let post = match form.clone().validate() {
        Ok(post) => post,
        Err(errors) => {
            tracing::debug!("Rejected new post form: {:?}", errors);
            let page = state
                .views()
                .new_post_form(&form, &errors)
                .map_err(|e| AppError::render(&state, e))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let created = state
        .repo
        .create_post(&post)
        .await
        .map_err(|e| AppError::new(&state, e))?;
    Ok(Redirect::to(&post_url(&created.slug)).into_response())
}

async fn edit_post_page(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let post = state
        .repo
        .get_raw_post(&slug)
        .await
        .map_err(|e| AppError::new(&state, e))?;
    let page = state
        .views()
        .edit_post_form(&EditPostForm::from(post), &EditErrors::default())
        .map_err(|e| AppError::render(&state, e))?;
    Ok(Html(page))
}

async fn update_post(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
    Form(mut form): Form<EditPostForm>,
) -> Result<Response, AppError> {
    if form.old_slug.is_empty() {
        form.old_slug = slug;
    }

    let edit = match form.clone().validate() {
        Ok(edit) => edit,
        Err(errors) => {
            tracing::debug!("Rejected edit form for {:?}: {:?}", form.old_slug, errors);
            let page = state
                .views()
                .edit_post_form(&form, &errors)
                .map_err(|e| AppError::render(&state, e))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    state
        .repo
        .edit_post(&edit)
        .await
        .map_err(|e| AppError::new(&state, e))?;
    Ok(Redirect::to("/admin").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NewPost;
    use axum::http::header;
    use tempfile::TempDir;

    fn setup() -> (TempDir, SharedState) {
        let dir = TempDir::new().unwrap();
        let state = Arc::new(AppState {
            repo: PostRepository::new(dir.path()),
            site_title: "Test Blog".to_string(),
            templates: TemplateRenderer::new().unwrap(),
        });
        (dir, state)
    }

    async fn seed(state: &AppState, slug: &str, title: &str, markdown: &str) {
        state
            .repo
            .create_post(&NewPost {
                title: title.to_string(),
                slug: slug.to_string(),
                markdown: markdown.to_string(),
            })
            .await
            .unwrap();
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    fn edit_form(old_slug: &str, title: &str, slug: &str, markdown: &str) -> EditPostForm {
        EditPostForm {
            old_slug: old_slug.to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
            markdown: markdown.to_string(),
        }
    }

    #[tokio::test]
    async fn test_show_post() {
        let (_dir, state) = setup();
        seed(&state, "hello", "Hello World", "# Hi").await;

        let Html(page) = show_post(State(state), Path("hello".to_string()))
            .await
            .unwrap();
        assert!(page.contains("<h1>Hi</h1>"));
        assert!(page.contains("Hello World"));
    }

    #[tokio::test]
    async fn test_show_missing_post_is_404() {
        let (_dir, state) = setup();
        let err = show_post(State(state), Path("ghost".to_string()))
            .await
            .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("<title>Not Found | Test Blog</title>"));
        assert!(page.contains("There is no post called &quot;ghost&quot;."));
    }

    #[tokio::test]
    async fn test_bad_metadata_is_500() {
        let (dir, state) = setup();
        std::fs::write(dir.path().join("bad.md"), "no header").unwrap();

        let err = list_posts(State(state)).await.unwrap_err();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_admin_index_lists_posts() {
        let (_dir, state) = setup();
        seed(&state, "one", "One", "1").await;
        seed(&state, "two", "Two", "2").await;

        let Html(page) = admin_index(State(state)).await.unwrap();
        assert!(page.contains("/admin/edit/one"));
        assert!(page.contains("/admin/edit/two"));
    }

    #[tokio::test]
    async fn test_edit_page_prefills_form() {
        let (_dir, state) = setup();
        seed(&state, "hello", "Hello", "body text").await;

        let Html(page) = edit_post_page(State(state), Path("hello".to_string()))
            .await
            .unwrap();
        assert!(page.contains(r#"name="oldSlug" value="hello""#));
        assert!(page.contains(r#"name="title" value="Hello""#));
        assert!(page.contains("body text</textarea>"));
    }

    #[tokio::test]
    async fn test_update_redirects_to_admin() {
        let (_dir, state) = setup();
        seed(&state, "x", "Old", "old").await;

        let response = update_post(
            State(state.clone()),
            Path("x".to_string()),
            Form(edit_form("x", "T", "y", "M")),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/admin");

        let raw = state.repo.get_raw_post("y").await.unwrap();
        assert_eq!((raw.title.as_str(), raw.markdown.as_str()), ("T", "M"));
        assert!(state.repo.get_raw_post("x").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_with_empty_markdown_leaves_post_alone() {
        let (_dir, state) = setup();
        seed(&state, "x", "Old", "old").await;

        let response = update_post(
            State(state.clone()),
            Path("x".to_string()),
            Form(edit_form("x", "T", "y", "")),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("Markdown is required"));

        let raw = state.repo.get_raw_post("x").await.unwrap();
        assert_eq!((raw.title.as_str(), raw.markdown.as_str()), ("Old", "old"));
        assert!(state.repo.get_raw_post("y").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_falls_back_to_path_slug() {
        let (_dir, state) = setup();
        seed(&state, "x", "Old", "old").await;

        let response = update_post(
            State(state.clone()),
            Path("x".to_string()),
            Form(edit_form("", "New", "x", "new")),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.repo.get_raw_post("x").await.unwrap().title, "New");
    }

    #[tokio::test]
    async fn test_update_missing_post_is_404() {
        let (_dir, state) = setup();
        let err = update_post(
            State(state),
            Path("ghost".to_string()),
            Form(edit_form("ghost", "T", "y", "M")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_redirects_to_post() {
        let (_dir, state) = setup();
        let form = NewPostForm {
            title: "Hello World".to_string(),
            slug: "hello world".to_string(),
            markdown: "# Hi".to_string(),
        };

        let response = create_post(State(state.clone()), Form(form)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/posts/hello%20world");
        assert_eq!(
            state.repo.get_post("hello world").await.unwrap().html,
            "<h1>Hi</h1>\n"
        );
    }

    #[tokio::test]
    async fn test_create_with_unsafe_slug_is_400() {
        let (_dir, state) = setup();
        let form = NewPostForm {
            title: "Escape".to_string(),
            slug: "../escape".to_string(),
            markdown: "body".to_string(),
        };

        let err = create_post(State(state), Form(form)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_missing_title_is_422() {
        let (_dir, state) = setup();
        let form = NewPostForm {
            title: String::new(),
            slug: "s".to_string(),
            markdown: "body".to_string(),
        };

        let response = create_post(State(state.clone()), Form(form)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(state.repo.list_posts().await.unwrap().is_empty());
    }
}
