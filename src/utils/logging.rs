//! Structured logging and credential-masking utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing utilities to keep
//! caller-supplied API keys out of logs and surfaced error text.

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Sanitizes credential material from a string.
///
/// Scans for Fireworks-style API keys (`fw_` prefix) and bearer tokens in
/// echoed auth headers, replacing each with a placeholder. Applied to log
/// lines and to upstream error text before it is surfaced to the caller.
///
/// # Arguments
///
/// * `input` - The raw string that may contain credential material.
///
/// # Returns
///
/// A new string where all detected secrets have been replaced.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();

    // Pattern 1: Fireworks API keys
    // These carry an "fw_" prefix
    if let Some(pos) = result.find("fw_") {
        let start = pos;
        // Search for the end of the key (delimiter or end of string)
        let end = result[start..]
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'')
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, "[REDACTED_API_KEY]");
    }

    // Pattern 2: bearer tokens echoed back in auth headers
    if let Some(pos) = result.find("Bearer ") {
        let start = pos + "Bearer ".len();
        let end = result[start..]
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'')
            .map(|i| start + i)
            .unwrap_or(result.len());
        if start < end {
            result.replace_range(start..end, "[REDACTED_TOKEN]");
        }
    }

    result
}
