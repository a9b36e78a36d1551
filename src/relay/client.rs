//! Client side of the relay: report finished games

use super::error::{RelayError, Result};
use super::report::GameReport;
use crate::game::GameResult;
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{info, warn};

/// Posts finished games to a relay endpoint
///
/// Uses a blocking client: the game loops are synchronous.
#[derive(Debug, Clone)]
pub struct ResultReporter {
    client: Client,
    endpoint: Url,
    telegram_id: Option<String>,
}

impl ResultReporter {
    /// Create a reporter for `endpoint`
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Config` if the URL does not parse or the client
    /// cannot be built.
    pub fn new(endpoint: &str, telegram_id: Option<String>) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| RelayError::config(format!("invalid report URL {endpoint}: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .user_agent(concat!("slovo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            telegram_id,
        })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one result
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Forward` if the request fails or the relay answers
    /// with an error status.
    pub fn send(&self, result: &GameResult) -> Result<()> {
        let report = GameReport::from_result(result, self.telegram_id.as_deref());

        self.client
            .post(self.endpoint.clone())
            .json(&report)
            .send()?
            .error_for_status()?;

        info!(endpoint = %self.endpoint, result = %report.result, "result reported");
        Ok(())
    }

    /// Send one result, logging instead of failing
    pub fn send_best_effort(&self, result: &GameResult) -> bool {
        match self.send(result) {
            Ok(()) => true,
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "could not report result");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;
    use std::sync::mpsc;

    #[test]
    fn invalid_endpoint_is_config_error() {
        assert!(matches!(
            ResultReporter::new("::nope::", None),
            Err(RelayError::Config(_))
        ));
    }

    #[test]
    fn sends_report_to_endpoint() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (tx, rx) = mpsc::channel::<Value>();

        let app = Router::new().route(
            "/api/webhook",
            post(move |Json(body): Json<Value>| {
                let tx = tx.clone();
                async move {
                    tx.send(body).ok();
                    "ok"
                }
            }),
        );
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .unwrap();
        let addr = listener.local_addr().unwrap();
        runtime.spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let reporter =
            ResultReporter::new(&format!("http://{addr}/api/webhook"), Some("42".into())).unwrap();
        let result = GameResult::new(Outcome::Win, "СЛОВО", 3, Duration::from_secs(30));
        reporter.send(&result).unwrap();

        let body = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(body["result"], "win");
        assert_eq!(body["word"], "СЛОВО");
        assert_eq!(body["attempts"], 3);
        assert_eq!(body["telegram_id"], 42);
        assert_eq!(body["duration"], 30);
    }

    #[test]
    fn unreachable_endpoint_is_not_fatal() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let reporter = ResultReporter::new(&format!("http://{addr}/api/webhook"), None).unwrap();
        let result = GameResult::new(Outcome::Lose, "СЛОВО", 6, Duration::ZERO);
        assert!(!reporter.send_best_effort(&result));
    }
}
