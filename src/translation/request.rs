// Request translation (reply request → Fireworks chat completion)

use crate::config::FireworksConfig;
use crate::models::api::{ContextItem, ReplyRequest};
use crate::models::capability::{system_role_support, SystemRoleSupport};
use crate::models::openai::{ChatCompletionRequest, ChatMessage};
use tracing::debug;

/// Build the thread-context block for the prompt.
///
/// Item texts are joined with single spaces behind a `Context: ` prefix and
/// newline-terminated. No items yields an empty string so templates can
/// splice the block in unconditionally.
pub fn build_context_block(context: &[ContextItem]) -> String {
    if context.is_empty() {
        return String::new();
    }

    let joined = context
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    format!("Context: {}\n", joined)
}

/// Assemble the prompt sent to the completion API.
///
/// A caller-supplied template takes precedence; otherwise the default
/// engagement-oriented template is used, ending with the `Reply:` cue the
/// model completes from.
pub fn build_prompt(req: &ReplyRequest) -> String {
    let context_block = build_context_block(&req.context);

    if !req.prompt.is_empty() {
        format!(
            "{}\n\nTweet: {}\nAuthor: {}\n{}",
            req.prompt, req.tweet, req.author, context_block
        )
    } else {
        format!(
            "Generate a helpful, engaging reply to this tweet. Keep it under 280 characters and make it sound natural and conversational.\n\nTweet: {}\nAuthor: {}\n{}\n\nReply:",
            req.tweet, req.author, context_block
        )
    }
}

/// Shape the chat message list according to the model's capability.
///
/// Models without system-role support get the system prompt folded into a
/// single user message; everything else gets the standard system + user pair.
pub fn shape_messages(config: &FireworksConfig, prompt: &str) -> Vec<ChatMessage> {
    match system_role_support(&config.model) {
        SystemRoleSupport::Unsupported => vec![ChatMessage::user(format!(
            "System Instruction: {} \n Instruction:{}",
            config.system_prompt, prompt
        ))],
        SystemRoleSupport::Supported => vec![
            ChatMessage::system(config.system_prompt.clone()),
            ChatMessage::user(prompt),
        ],
    }
}

/// Translate a validated ReplyRequest into the upstream completion request.
pub fn build_completion_request(
    config: &FireworksConfig,
    req: &ReplyRequest,
) -> ChatCompletionRequest {
    let prompt = build_prompt(req);
    debug!("Built prompt ({} chars)", prompt.chars().count());

    ChatCompletionRequest {
        model: config.model.clone(),
        messages: shape_messages(config, &prompt),
        temperature: config.temperature,
        // Length is enforced by post-processing, not a token cap
        max_tokens: None,
    }
}
