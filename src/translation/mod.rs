// Translation between the extension's reply API and the Fireworks chat API

mod request;
mod response;

pub use request::{build_completion_request, build_context_block, build_prompt, shape_messages};
pub use response::{clean_reply, MAX_REPLY_CHARS};
