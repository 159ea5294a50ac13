// Model capability table (system-role support)

use std::collections::HashMap;
use std::sync::OnceLock;

/// Whether a model accepts a dedicated system-role message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemRoleSupport {
    /// Standard chat models: system prompt travels as its own message.
    Supported,
    /// Reasoning-only models that reject the system role; the system prompt
    /// is folded into the user message instead.
    Unsupported,
}

/// Lazily initialized capability map using OnceLock (zero-cost, panic-free)
static CAPABILITY_MAP: OnceLock<HashMap<&'static str, SystemRoleSupport>> = OnceLock::new();

/// Get or initialize the capability mapping
fn get_capability_map() -> &'static HashMap<&'static str, SystemRoleSupport> {
    CAPABILITY_MAP.get_or_init(|| {
        let mut m = HashMap::new();

        // OpenAI o1-generation reasoning models
        m.insert("o1-preview", SystemRoleSupport::Unsupported);
        m.insert("o1-mini", SystemRoleSupport::Unsupported);

        m
    })
}

/// Look up system-role support for a model identifier.
///
/// Unknown models default to `Supported`; the table only needs entries for
/// the exceptions.
pub fn system_role_support(model: &str) -> SystemRoleSupport {
    get_capability_map()
        .get(model)
        .copied()
        .unwrap_or(SystemRoleSupport::Supported)
}
