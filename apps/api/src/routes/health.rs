use axum::{response::Html, Json};
use serde_json::{json, Value};

/// GET /
/// Plain greeting, no side effects.
pub async fn home_handler() -> Html<&'static str> {
    Html("<p>Hello to my App</p>")
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-ranker"
    }))
}
