//! Axum-based HTTP server implementation for the reply relay.
//!
//! This module is responsible for setting up the HTTP server, configuring
//! routes, and handling requests from the browser extension. Process-wide
//! response policy (security headers, CORS) is applied once as router
//! layers rather than inside individual handlers.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual API endpoints (generate-reply, health, index).
//! - `middleware`: Request ID, security header, and CORS layer constructors.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
