// Fireworks chat-completion client

use crate::config::FireworksConfig;
use crate::error::{RelayError, Result};
use crate::models::openai::{ChatCompletionRequest, ChatCompletionResponse};
use crate::utils::logging::sanitize;
use crate::utils::retry::with_retry;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Fireworks OpenAI-compatible inference API.
///
/// Built fresh per inbound request from the caller-supplied key; nothing is
/// cached or pooled across requests. The HTTP client carries bounded
/// connect and request timeouts so a stuck upstream cannot pin a request
/// thread indefinitely.
pub struct FireworksClient {
    http_client: Client,
    config: FireworksConfig,
    api_key: String,
}

impl FireworksClient {
    pub fn new(config: &FireworksConfig, api_key: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .use_rustls_tls()
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config: config.clone(),
            api_key: api_key.into(),
        })
    }

    /// Call the `chat/completions` endpoint and return the first choice's text.
    ///
    /// Transient failures (429/5xx, transport errors) are retried once per
    /// `FireworksConfig::max_retries`; everything else returns immediately.
    pub async fn chat_completion(&self, request: &ChatCompletionRequest) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_base_url.trim_end_matches('/')
        );
        debug!("Calling chat completion API for model: {}", request.model);

        let http_client = &self.http_client;
        let api_key = &self.api_key;
        let endpoint = url.as_str();

        let response_text = with_retry("Chat Completion", self.config.max_retries, || async move {
            let response = http_client
                .post(endpoint)
                .bearer_auth(api_key)
                .header("Content-Type", "application/json")
                .json(request)
                .send()
                .await
                .map_err(|e| {
                    // Timeouts get their own status so the boundary can map them
                    let status = if e.is_timeout() { 504 } else { 500 };
                    (status, format!("HTTP error: {}", e))
                })?;

            let status = response.status();
            let response_text = response
                .text()
                .await
                .map_err(|e| (500u16, format!("Failed to read response body: {}", e)))?;

            if !status.is_success() {
                // Try to extract error message from JSON response
                let error_msg = Self::extract_error_message(&response_text)
                    .unwrap_or_else(|| response_text.clone());
                return Err((status.as_u16(), error_msg));
            }

            Ok(response_text)
        })
        .await
        .map_err(|(status, body)| {
            error!(
                "Fireworks API error: HTTP {} - Response body: {}",
                status,
                sanitize(&body)
            );
            match status {
                504 => RelayError::UpstreamTimeout(body),
                _ => RelayError::UpstreamApi(format!("HTTP {}: {}", status, body)),
            }
        })?;

        let completion: ChatCompletionResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("Failed to parse Fireworks response: {}", e);
                RelayError::UpstreamApi(format!("Response parsing error: {}", e))
            })?;

        let content = completion.first_content().ok_or_else(|| {
            RelayError::UpstreamApi("Response contained no completion choices".to_string())
        })?;

        debug!("Received completion ({} chars)", content.chars().count());
        Ok(content.to_string())
    }

    /// Extract error message from an OpenAI-style error envelope
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorPayload>,
        }

        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum ErrorPayload {
            Detail {
                message: Option<String>,
                #[serde(rename = "type")]
                kind: Option<String>,
            },
            Text(String),
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            if let Some(error) = error_resp.error {
                return match error {
                    ErrorPayload::Detail { message, kind } => message.or(kind),
                    ErrorPayload::Text(text) => Some(text),
                };
            }
        }
        None
    }
}
