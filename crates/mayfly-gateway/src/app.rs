use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

/// Maximum accepted request body size.
const BODY_LIMIT_BYTES: usize = 16 * 1024;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api/v1/url",
                Router::new()
                    .route("/short", post(shorten_handler))
                    .route("/{code}", get(redirect_handler)),
            )
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
