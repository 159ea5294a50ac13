//! Upstream Fireworks completion API integration.
//!
//! The relay never holds its own credential: every inbound request carries a
//! Fireworks API key, and a fresh [`FireworksClient`] is built from it for
//! the lifetime of that request only.

mod client;

pub use client::FireworksClient;
