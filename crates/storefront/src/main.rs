//! Binary entry point for the PRAYAN Masale storefront.
//!
//! Boot order matters here: configuration first (Sentry needs the DSN), the
//! Sentry guard second (it must outlive `main`), the tracing subscriber
//! third (its Sentry layer feeds the guard), then state and the server.
//!
//! The process is self-contained. The catalog is compiled in, editorial
//! pages are rendered from markdown at startup, and the only per-visitor
//! state is the signed cart cookie, so there is no database and no session
//! store to stand up.

#![cfg_attr(not(test), forbid(unsafe_code))]

use prayan_storefront::config::StorefrontConfig;
use prayan_storefront::state::AppState;
use prayan_storefront::{build_app, content_dir};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    let state =
        AppState::new(config.clone(), content_dir()).expect("Failed to build application state");
    tracing::info!(pages = state.content().page_count(), "Content loaded");

    let app = build_app(state)
        // Sentry layers sit outermost so they see every request
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "storefront up");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Start Sentry if a DSN is configured.
///
/// The returned guard flushes queued events on drop, so it has to live
/// until `main` returns.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref()?;

    let options = sentry::ClientOptions {
        release: sentry::release_name!(),
        environment: config
            .sentry_environment
            .clone()
            .map(std::borrow::Cow::Owned),
        sample_rate: config.sentry_sample_rate,
        traces_sample_rate: config.sentry_traces_sample_rate,
        attach_stacktrace: true,
        ..Default::default()
    };

    let guard = sentry::init((dsn, options));
    tracing::info!("Sentry error reporting enabled");
    Some(guard)
}

/// Tracing subscriber with env filter, fmt output, and the Sentry bridge.
///
/// Without `RUST_LOG`, our crate logs at info and tower-http at debug.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prayan_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

/// Errors and warnings become Sentry events; info and debug ride along as
/// breadcrumbs on whatever event fires next.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    use tracing::Level;
    match *metadata.level() {
        Level::ERROR | Level::WARN => sentry_tracing::EventFilter::Event,
        Level::INFO | Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
