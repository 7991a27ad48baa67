//! Axum web form in front of [`CommandRunner`].
//!
//! Holds no logic of its own: every route hands a string to
//! [`CommandRunner::run`] and displays the string it gets back.

mod handlers;
mod page;

pub use page::FormPage;

use handlers::{handle_health, handle_index, handle_run, handle_submit};

use crate::config::Config;
use crate::runner::CommandRunner;
use anyhow::{Context, Result};
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Extra time a request may take beyond the command timeout.
pub const REQUEST_TIMEOUT_MARGIN_SECS: u64 = 5;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub runner: CommandRunner,
    pub page: Arc<FormPage>,
}

/// Form and JSON request body
#[derive(Debug, serde::Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub command: String,
}

/// Returns true when the bind address is not a loopback address.
fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Run the web form on `host:port`.
pub async fn run_gateway(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    // ── Security: refuse public bind without explicit opt-in ──
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host} — the command runner would be exposed to the network.\n\
             Fix: use --host 127.0.0.1 (default), or set\n\
             [gateway] allow_public_bind = true in config.toml (NOT recommended)."
        );
    }

    let listener = bind_gateway(host, port).await?;
    run_gateway_with_listener(listener, config).await
}

/// Bind `host:port`, resolving names such as `localhost`.
///
/// IPv6 literals may be given with or without brackets.
async fn bind_gateway(host: &str, port: u16) -> Result<tokio::net::TcpListener> {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("bind gateway socket on {host}:{port}"))
}

/// Run the web form from a pre-bound listener.
pub async fn run_gateway_with_listener(
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let runner = CommandRunner::from_config(&config.runner);
    let addr = listener.local_addr().context("read gateway local address")?;

    println!("◆ Local Command Runner listening on http://{addr}");
    println!("  GET  /         → form");
    println!("  POST /api/run  → {{\"command\": \"...\"}}");
    println!("  GET  /health   → liveness");
    println!("  allowed: {}", runner.allow_list().describe());
    println!("  Press Ctrl+C to stop.\n");
    tracing::info!(%addr, timeout_secs = runner.timeout().as_secs(), "gateway.start");

    let app = router(runner)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("gateway.shutdown");
        })
        .await
        .context("serve gateway")?;

    Ok(())
}

/// Build the router around `runner`.
pub fn router(runner: CommandRunner) -> Result<Router> {
    let request_timeout = runner.timeout() + Duration::from_secs(REQUEST_TIMEOUT_MARGIN_SECS);
    let page = Arc::new(FormPage::new(runner.allow_list().describe())?);
    let state = AppState { runner, page };

    Ok(Router::new()
        .route("/", get(handle_index).post(handle_submit))
        .route("/api/run", post(handle_run))
        .route("/health", get(handle_health))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        )))
}
