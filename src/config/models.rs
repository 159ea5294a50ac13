//! Configuration data structures for the reply relay.
//!
//! This module defines the schema for the application settings, including
//! server parameters, upstream Fireworks API specifics, and logging.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, workers).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream Fireworks completion API settings.
    #[serde(default)]
    pub fireworks: FireworksConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `0.0.0.0` (the relay fronts a browser extension, not localhost tooling)
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads for the Axum server.
    /// Default: Number of logical CPU cores.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Settings for the upstream Fireworks completion API.
///
/// The API key is deliberately absent: it arrives with every request and a
/// fresh client is built from it, so no credential ever lives in config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireworksConfig {
    /// Base URL for the OpenAI-compatible Fireworks inference API.
    /// Default: `https://api.fireworks.ai/inference/v1`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// The model used for reply generation.
    /// Default: the Dobby Llama 3.3 70B deployment.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature. Replies are kept deterministic.
    /// Default: `0.0`
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// System prompt sent ahead of every reply prompt.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Connection and request timeout in seconds.
    /// Default: `60`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of times to retry a transient upstream failure.
    /// Default: `1`
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to mask API keys in logs and surfaced error text.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub sanitize_credentials: bool,
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            system_prompt: default_system_prompt(),
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            sanitize_credentials: true,
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_api_base_url() -> String {
    "https://api.fireworks.ai/inference/v1".to_string()
}

fn default_model() -> String {
    "accounts/sentientfoundation/models/dobby-unhinged-llama-3-3-70b-new".to_string()
}

fn default_temperature() -> f32 {
    0.0
}

fn default_system_prompt() -> String {
    "You are a helpful assistant that can answer questions and provide information.".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    60
}

fn default_max_retries() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
