//! Tracing subscriber setup

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for line-based commands and the relay
    Stderr,
    /// Nothing on the terminal; used while the full-screen UI owns it
    Silent,
}

/// Default filter for a verbosity count (`-v`, `-vv`)
#[must_use]
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "slovo=info,tower_http=info,warn",
        1 => "slovo=debug,tower_http=debug,info",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the verbosity-derived filter. When `log_file` is
/// given, logs are also written there without ANSI colors.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(verbosity: u8, target: LogTarget, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let stderr_layer = (target == LogTarget::Stderr).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let file_layer = log_file
        .map(|path| {
            File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))
                .map(|file| fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        })
        .transpose()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
