//! State shared by every handler: config, page content, cart cookie key.

use std::path::Path;
use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use secrecy::ExposeSecret;

use crate::config::{MIN_COOKIE_SECRET_LENGTH, StorefrontConfig};
use crate::content::{ContentError, ContentStore};

/// Failures while assembling the state at boot.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("content error: {0}")]
    Content(#[from] ContentError),
    #[error(
        "cookie secret must be at least {min} bytes (got {0})",
        min = MIN_COOKIE_SECRET_LENGTH
    )]
    CookieSecretTooShort(usize),
}

/// Handler-shared state. Cloning is an `Arc` bump, so every handler takes
/// `State<AppState>` by value.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    content: ContentStore,
    cookie_key: Key,
}

impl AppState {
    /// Load the content store and derive the cookie key from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if content loading fails or the cookie secret is
    /// too short to derive a signing key from.
    pub fn new(config: StorefrontConfig, content_dir: &Path) -> Result<Self, StateError> {
        let content = ContentStore::load(content_dir)?;
        let cookie_key = derive_cookie_key(&config)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                cookie_key,
            }),
        })
    }

    /// Parsed storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Editorial pages loaded at boot.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Key that signs and verifies the cart cookie.
    #[must_use]
    pub fn cookie_key(&self) -> &Key {
        &self.inner.cookie_key
    }
}

/// `SignedCookieJar` extracts its key via `FromRef`.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.inner.cookie_key.clone()
    }
}

/// Derive the cart cookie signing key from the configured secret.
fn derive_cookie_key(config: &StorefrontConfig) -> Result<Key, StateError> {
    let secret = config.cookie_secret.expose_secret();
    // Key::derive_from panics on input shorter than 32 bytes
    if secret.len() < MIN_COOKIE_SECRET_LENGTH {
        return Err(StateError::CookieSecretTooShort(secret.len()));
    }
    Ok(Key::derive_from(secret.as_bytes()))
}
