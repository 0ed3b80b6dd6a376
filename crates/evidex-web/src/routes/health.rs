//! Liveness probe.

use axum::Json;
use serde_json::{json, Value};

/// GET /health - Report that the server is up.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "evidex-web",
    }))
}
