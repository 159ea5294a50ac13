// Response post-processing (raw completion → final reply text)

/// Hard ceiling on reply length, in characters.
pub const MAX_REPLY_CHARS: usize = 280;

const ELLIPSIS: &str = "...";

/// Clean up a raw completion into the final reply.
///
/// Trims surrounding whitespace, strips one matched pair of wrapping double
/// quotes, and caps the result at 280 characters (277 + `...`). All lengths
/// are counted in characters, not bytes.
pub fn clean_reply(raw: &str) -> String {
    let mut reply = raw.trim().to_string();

    // Models frequently quote the whole reply; unwrap a matched pair only.
    if reply.len() >= 2 && reply.starts_with('"') && reply.ends_with('"') {
        reply = reply[1..reply.len() - 1].to_string();
    }

    if reply.chars().count() > MAX_REPLY_CHARS {
        let truncated: String = reply.chars().take(MAX_REPLY_CHARS - ELLIPSIS.len()).collect();
        reply = truncated + ELLIPSIS;
    }

    reply
}
