//! Static content page handlers.
//!
//! These pages are authored as markdown files under `content/pages/` and
//! rendered to HTML once at startup. Each route maps to a slug in the
//! content store.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use chrono::NaiveDate;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Rendered markdown page.
#[derive(Template, WebTemplate)]
#[template(path = "pages/show.html")]
pub struct ContentPageTemplate {
    pub title: String,
    pub description: Option<String>,
    pub updated_at: Option<NaiveDate>,
    pub content_html: String,
}

/// Look up a page by slug and wrap it for rendering.
fn serve_content_page(state: &AppState, slug: &str) -> Result<ContentPageTemplate> {
    let page = state
        .content()
        .get_page(slug)
        .ok_or_else(|| AppError::NotFound(format!("page '{slug}'")))?;
    Ok(ContentPageTemplate {
        title: page.meta.title.clone(),
        description: page.meta.description.clone(),
        updated_at: page.meta.updated_at,
        content_html: page.content_html.clone(),
    })
}

/// Display the brand story page.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] when the page file was absent at startup.
#[instrument(skip(state))]
pub async fn story(State(state): State<AppState>) -> Result<ContentPageTemplate> {
    serve_content_page(&state, "story")
}

/// Display the quality and certifications page.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] when the page file was absent at startup.
#[instrument(skip(state))]
pub async fn trust(State(state): State<AppState>) -> Result<ContentPageTemplate> {
    serve_content_page(&state, "trust")
}

/// Display the recipes page.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] when the page file was absent at startup.
#[instrument(skip(state))]
pub async fn recipes(State(state): State<AppState>) -> Result<ContentPageTemplate> {
    serve_content_page(&state, "recipes")
}

/// Routes for the static content pages.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/story", get(story))
        .route("/trust", get(trust))
        .route("/recipes", get(recipes))
}
