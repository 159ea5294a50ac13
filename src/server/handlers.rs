// HTTP request handlers

use super::routes::AppState;
use crate::error::RelayError;
use crate::fireworks::FireworksClient;
use crate::models::api::{HealthResponse, IndexResponse, ReplyRequest, ReplyResponse};
use crate::translation::{build_completion_request, clean_reply};
use axum::{extract::State, Json};
use std::collections::HashMap;
use tracing::{error, info};

/// Maximum accepted tweet length, in characters.
pub const MAX_TWEET_CHARS: usize = 10_000;

/// Maximum accepted author length, in characters.
pub const MAX_AUTHOR_CHARS: usize = 100;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "AI service is running".to_string(),
        mode: "production".to_string(),
        requires_extension_api_key: true,
    })
}

pub async fn index_handler() -> Json<IndexResponse> {
    let mut endpoints = HashMap::new();
    endpoints.insert("/health".to_string(), "GET - Health check".to_string());
    endpoints.insert(
        "/api/generate-reply".to_string(),
        "POST - Generate single reply".to_string(),
    );

    Json(IndexResponse {
        name: "Twitter AI Reply Assistant API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        mode: "production".to_string(),
        endpoints,
        status: "running".to_string(),
        requires_extension_api_key: true,
    })
}

/// Handler for the /api/generate-reply endpoint
pub async fn generate_reply_handler(
    State(state): State<AppState>,
    body: String, // Raw body: a malformed payload must map to the exact client message
) -> Result<Json<ReplyResponse>, RelayError> {
    let req: ReplyRequest = serde_json::from_str(&body)
        .map_err(|_| RelayError::InvalidRequest("No JSON data provided".to_string()))?;

    // Fail-fast validation; each failure carries its own message
    if req.fireworks_api_key.is_empty() {
        return Err(RelayError::InvalidRequest(
            "Fireworks API key is required. Please configure it in the extension settings."
                .to_string(),
        ));
    }
    if req.tweet.is_empty() {
        return Err(RelayError::InvalidRequest(
            "Tweet text is required".to_string(),
        ));
    }
    if req.tweet.chars().count() > MAX_TWEET_CHARS {
        return Err(RelayError::InvalidRequest(
            "Tweet text is too long".to_string(),
        ));
    }
    if req.author.chars().count() > MAX_AUTHOR_CHARS {
        return Err(RelayError::InvalidRequest(
            "Author name is too long".to_string(),
        ));
    }

    info!(
        "Generating reply for tweet: {}...",
        truncate_for_log(&req.tweet)
    );

    // Fresh client per request, built from the caller's credential
    let client = FireworksClient::new(&state.config.fireworks, req.fireworks_api_key.clone())?;
    let completion_req = build_completion_request(&state.config.fireworks, &req);

    let raw_reply = match client.chat_completion(&completion_req).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Error generating reply: {}", e);
            let e = if state.config.logging.sanitize_credentials {
                e.sanitized()
            } else {
                e
            };
            return Err(e);
        }
    };

    let reply = clean_reply(&raw_reply);
    info!("Generated reply: {}...", truncate_for_log(&reply));

    Ok(Json(ReplyResponse {
        success: true,
        length: reply.chars().count(),
        reply,
        tweet_analyzed: req.tweet,
        author: req.author,
    }))
}

/// First 50 characters, for log lines
fn truncate_for_log(text: &str) -> String {
    text.chars().take(50).collect()
}
