use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body returned by `GET /ping`.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

// Always answers 200 with {"message": "pong"}.
pub async fn ping_handler() -> (StatusCode, Json<PingResponse>) {
    (StatusCode::OK, Json(PingResponse { message: "pong" }))
}
