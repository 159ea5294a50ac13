// HTTP routes configuration

use super::handlers::{generate_reply_handler, health_handler, index_handler};
use super::middleware::{cors_layer, request_id_layers, security_header_layers};
use crate::config::AppConfig;
use crate::error::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

pub fn create_router(config: AppConfig) -> Result<Router> {
    let state = AppState { config };

    let (set_request_id, propagate_request_id) = request_id_layers();
    let [nosniff, frame_options, xss_protection, transport_security] = security_header_layers();

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/generate-reply", post(generate_reply_handler))
        // Tweets plus thread context stay small; cap request bodies accordingly
        .layer(tower_http::limit::RequestBodyLimitLayer::new(64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(nosniff)
        .layer(frame_options)
        .layer(xss_protection)
        .layer(transport_security)
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
