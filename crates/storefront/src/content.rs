//! Markdown-backed editorial pages.
//!
//! The brand story, trust, and recipes pages are written as markdown files
//! under `content/pages/`, each with a YAML frontmatter block. They are
//! parsed once at startup into an in-memory store, so a copy edit is a file
//! change and a redeploy, never a code change.

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Frontmatter fields accepted at the top of a page file.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// A page after frontmatter extraction and markdown rendering.
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub meta: PageMeta,
    pub content_html: String,
}

/// All editorial pages, keyed by slug.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pages: Arc<HashMap<String, Page>>,
}

impl ContentStore {
    /// Read every `*.md` under `<content_dir>/pages`.
    ///
    /// A file that fails to parse is logged and skipped, so one bad page
    /// cannot keep the site from starting.
    ///
    /// # Errors
    ///
    /// Returns an error if the pages directory exists but cannot be listed.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let dir = content_dir.join("pages");
        let mut pages = HashMap::new();

        if !dir.exists() {
            tracing::warn!(dir = %dir.display(), "pages directory missing, serving none");
            return Ok(Self {
                pages: Arc::new(pages),
            });
        }

        let entries = std::fs::read_dir(&dir).map_err(|err| ContentError::Io(err.to_string()))?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }
            match load_page(&path) {
                Ok(page) => {
                    tracing::info!(slug = %page.slug, "loaded page");
                    pages.insert(page.slug.clone(), page);
                }
                Err(err) => {
                    tracing::error!(path = %path.display(), %err, "skipping unparseable page");
                }
            }
        }

        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    /// Page for a slug, if one was loaded.
    #[must_use]
    pub fn get_page(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }

    /// Number of pages loaded at startup.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

fn load_page(path: &Path) -> Result<Page, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|err| ContentError::Io(err.to_string()))?;

    let slug = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| ContentError::Parse(format!("unusable filename: {}", path.display())))?
        .to_string();

    let matter = Matter::<YAML>::new();
    let parsed: ParsedEntity<PageMeta> = matter
        .parse(&raw)
        .map_err(|err| ContentError::Parse(format!("frontmatter: {err}")))?;
    let meta = parsed
        .data
        .ok_or_else(|| ContentError::Parse("missing frontmatter block".to_string()))?;

    Ok(Page {
        slug,
        meta,
        content_html: render_markdown(&parsed.content),
    })
}

/// Markdown to HTML with the GFM extensions the pages rely on.
fn render_markdown(source: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    // Pages may embed raw HTML.
    options.render.r#unsafe = true;

    markdown_to_html(source, &options)
}

/// Errors raised while loading page files.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_gfm_tables_render() {
        let html = render_markdown("| Spice | Heat |\n|---|---|\n| Chili | High |");

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Chili</td>"));
    }

    #[test]
    fn test_headings_get_anchor_ids() {
        let html = render_markdown("## Roasting Notes");

        assert!(html.contains(r##"id="roasting-notes""##));
    }

    #[test]
    fn test_frontmatter_parses_into_meta() {
        let doc = "---\ntitle: Our Story\nupdated_at: \"2025-11-02\"\n---\nBody text.";
        let parsed: ParsedEntity<PageMeta> = Matter::<YAML>::new().parse(doc).unwrap();
        let meta = parsed.data.unwrap();

        assert_eq!(meta.title, "Our Story");
        assert_eq!(meta.description, None);
        assert_eq!(
            meta.updated_at,
            Some(NaiveDate::from_ymd_opt(2025, 11, 2).unwrap())
        );
        assert!(parsed.content.contains("Body text."));
    }
}
