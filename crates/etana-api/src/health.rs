//! Handler for `GET /health`.

use axum::Json;
use serde_json::{Value, json};

/// Fixed liveness payload for operators and load balancers. No side effects,
/// no failure modes.
pub async fn handler() -> Json<Value> {
  Json(json!({ "status": "healthy", "service": "Etana Interiors API" }))
}
