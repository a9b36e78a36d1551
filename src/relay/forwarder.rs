//! Outgoing webhook delivery

use super::config::RelayConfig;
use super::error::{RelayError, Result};
use super::report::WebhookPayload;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info, warn};

/// What happened to a forwarded payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// No webhook configured
    Skipped,
    /// Webhook answered with a success status
    Delivered(StatusCode),
    /// Webhook answered, but not with success; logged only
    Refused(StatusCode),
}

/// Sends payloads to the configured webhook
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: Client,
    webhook_url: Option<Url>,
}

impl Forwarder {
    /// Build a forwarder from relay configuration
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Config` if the webhook URL does not parse or the
    /// HTTP client cannot be built.
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let webhook_url = config
            .webhook_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw)
                    .map_err(|e| RelayError::config(format!("invalid webhook URL {raw}: {e}")))
            })
            .transpose()?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("slovo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    #[must_use]
    pub const fn webhook_url(&self) -> Option<&Url> {
        self.webhook_url.as_ref()
    }

    /// Deliver a payload
    ///
    /// A non-success answer from the webhook is logged and reported as
    /// [`Delivery::Refused`]; it is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Forward` if the request cannot be sent or times out.
    pub async fn forward(&self, payload: &WebhookPayload) -> Result<Delivery> {
        let Some(url) = &self.webhook_url else {
            debug!("no webhook configured, result not forwarded");
            return Ok(Delivery::Skipped);
        };

        let response = self.client.post(url.clone()).json(payload).send().await?;
        let status = response.status();

        if status.is_success() {
            info!(%status, "result delivered to webhook");
            Ok(Delivery::Delivered(status))
        } else {
            warn!(
                %status,
                reason = status.canonical_reason().unwrap_or("unknown"),
                "webhook delivery failed"
            );
            Ok(Delivery::Refused(status))
        }
    }
}
