//! OpenAI-compatible chat-completion wire types.
//!
//! Fireworks serves an OpenAI-compatible inference API, so the upstream
//! request and response shapes follow that contract. Only the fields the
//! relay actually sends or reads are modeled; unknown response fields are
//! ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Chat-completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,

    /// Left unset: reply length is enforced by post-processing, not the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first completion choice.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_omits_unset_max_tokens() {
        let req = ChatCompletionRequest {
            model: "test-model".to_string(),
            messages: vec![ChatMessage::user("hello")],
            temperature: 0.0,
            max_tokens: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_first_content() {
        let json = r#"{
            "id": "cmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "a reply"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 3}
        }"#;
        let resp: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_content(), Some("a reply"));
    }

    #[test]
    fn test_response_without_choices() {
        let resp: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.first_content(), None);
    }
}
