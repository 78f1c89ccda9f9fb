use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports the configured provider and whether any credential is present.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "ai_provider": state.config.ai_provider.to_string(),
        "ai_configured": state.config.ai_configured(),
    }))
}
