//! Askama filters available to every template.
//!
//! Modules that define templates pull these in with `use crate::filters;`.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Current year, for the footer copyright line.
///
/// `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Content hash baked into the stylesheet filename, for cache busting.
///
/// `build.rs` hashes the CSS and exports the value; the base layout links
/// `/static/css/derived/main.{{ ""|css_hash }}.css`.
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}
