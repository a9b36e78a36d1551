//! Run the result relay

use crate::relay::{self, RelayConfig};
use anyhow::{Context, Result};

/// Build the relay configuration from command-line values
///
/// # Errors
///
/// Returns an error if `bind` is not a socket address.
pub fn relay_config(bind: &str, webhook_url: Option<String>) -> Result<RelayConfig> {
    Ok(RelayConfig::new()
        .with_bind_addr_str(bind)?
        .with_webhook_url(webhook_url))
}

/// Start a runtime and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the runtime cannot start or the relay fails.
pub fn run_serve(config: RelayConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(relay::serve(config))?;
    Ok(())
}
