//! HTTP payload type definitions for the relay's own API surface.
//!
//! These types deserialize requests coming from the browser extension and
//! serialize the responses it expects. Field names follow the extension's
//! wire format, hence the camelCase rename on the credential field.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound reply-generation request.
///
/// Every field except `tweet` and `fireworksApiKey` is optional; missing
/// fields deserialize to their empty defaults and are validated afterwards
/// so each failure produces its own specific message.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyRequest {
    /// Text of the tweet to reply to.
    #[serde(default)]
    pub tweet: String,

    /// Handle or display name of the tweet's author.
    #[serde(default)]
    pub author: String,

    /// Surrounding thread snippets, in display order.
    #[serde(default)]
    pub context: Vec<ContextItem>,

    /// Caller-supplied template overriding the default reply prompt.
    #[serde(default)]
    pub prompt: String,

    /// Fireworks API key supplied by the extension. Never persisted or logged.
    #[serde(default, rename = "fireworksApiKey")]
    pub fireworks_api_key: String,
}

/// One item of thread context.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextItem {
    #[serde(default)]
    pub text: String,
}

/// Successful reply payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplyResponse {
    pub success: bool,
    pub reply: String,
    /// Character count of `reply`.
    pub length: usize,
    pub tweet_analyzed: String,
    pub author: String,
}

/// Health check payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub mode: String,
    pub requires_extension_api_key: bool,
}

/// Index/documentation payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub name: String,
    pub version: String,
    pub mode: String,
    pub endpoints: HashMap<String, String>,
    pub status: String,
    pub requires_extension_api_key: bool,
}
