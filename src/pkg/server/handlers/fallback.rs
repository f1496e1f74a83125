use axum::{Json, http::StatusCode, http::Uri};
use serde_json::{Value, json};

/// Answers every request the route table does not list.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    tracing::debug!(path = %uri.path(), "no route");
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found", "path": uri.path() })),
    )
}
