//! Game result relay
//!
//! A small HTTP service that accepts a finished game's result and forwards it
//! to an external webhook. Delivery is best effort: a webhook that answers
//! with an error status is logged, while a webhook that cannot be reached at
//! all turns into a 500 for the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod forwarder;
mod handlers;
pub mod report;

pub use client::ResultReporter;
pub use config::RelayConfig;
pub use error::{RelayError, Result};
pub use forwarder::{Delivery, Forwarder};
pub use report::{GameReport, WebhookPayload};

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Paths that accept game results
pub const RESULT_PATHS: [&str; 2] = ["/api/webhook", "/api/result"];

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

impl AppState {
    #[must_use]
    pub fn new(forwarder: Forwarder) -> Self {
        Self {
            forwarder: Arc::new(forwarder),
        }
    }
}

/// Build the relay router
pub fn router(state: AppState) -> Router {
    let result_route = post(handlers::receive_result).fallback(handlers::method_not_allowed);

    let mut router: Router<AppState> = Router::new().route("/health", get(handlers::health));
    for path in RESULT_PATHS {
        router = router.route(path, result_route.clone());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Bind and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the listener cannot bind.
pub async fn serve(config: RelayConfig) -> Result<()> {
    let forwarder = Forwarder::from_config(&config)?;
    match forwarder.webhook_url() {
        Some(url) => info!(webhook = %url, "forwarding results"),
        None => info!("no webhook configured, results are only logged"),
    }

    let app = router(AppState::new(forwarder));
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutting down relay");
        })
        .await?;

    Ok(())
}
