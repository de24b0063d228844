//! Integration test harness for the Prayan Masale storefront.
//!
//! Tests spawn the real application on an ephemeral port and drive it over
//! HTTP with a cookie-aware client, so the signed cart cookie behaves
//! exactly as it does in production.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p prayan-integration-tests
//! ```
//!
//! No external services are required; the storefront has no database and
//! its catalog is compiled in.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use prayan_storefront::config::StorefrontConfig;
use prayan_storefront::state::AppState;
use reqwest::{Client, Response};
use secrecy::SecretString;

/// A running storefront bound to an ephemeral port.
pub struct TestApp {
    addr: SocketAddr,
    client: Client,
}

impl TestApp {
    /// Spawn the full application and return a handle for driving it.
    ///
    /// # Panics
    ///
    /// Panics when the server cannot start; no test can proceed without it.
    pub async fn spawn() -> Self {
        let state = AppState::new(test_config(), prayan_storefront::content_dir())
            .expect("Failed to build application state");
        let app = prayan_storefront::build_app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read listener address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server error");
        });

        // Each TestApp gets its own cookie jar, so carts never leak
        // between tests.
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { addr, client }
    }

    /// Absolute URL for a path on this instance.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// GET a path, panicking on transport errors.
    ///
    /// # Panics
    ///
    /// Panics when the request cannot be sent.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// POST a urlencoded form to a path, panicking on transport errors.
    ///
    /// # Panics
    ///
    /// Panics when the request cannot be sent.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// The underlying client, for requests that need manual control.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Configuration for tests: loopback on an OS-assigned port, a fixed cookie
/// secret, and Sentry disabled.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://127.0.0.1".to_string(),
        cookie_secret: SecretString::from("kT9#mW2$vQ7!xR4@nZ8%bJ5^cL1&gF6*pD3"),
        whatsapp_phone: "919876543210".to_string(),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}
