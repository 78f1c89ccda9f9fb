pub mod health;

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::generation::handlers;
use crate::render::handlers::handle_download;
use crate::state::AppState;

/// Any OPTIONS request that is not a CORS preflight still gets an empty 200.
async fn answer_options(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/generate", post(handlers::handle_generate))
        .route("/generate-resume", post(handlers::handle_generate_resume))
        .route("/generate-both", post(handlers::handle_generate_both))
        // Export
        .route("/download/:format", post(handle_download))
        .layer(middleware::from_fn(answer_options))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
