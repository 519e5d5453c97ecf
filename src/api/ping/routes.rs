// Liveness route registration

use axum::{http::StatusCode, routing::get, Router};

use super::handler::ping_handler;

/// Registers `GET /ping`. Any other method on the path, HEAD included, gets a 405.
pub fn ping_routes() -> Router {
    Router::new()
        .route("/ping", get(ping_handler).head(reject_head))
}

// axum answers HEAD through the GET handler unless HEAD is routed explicitly.
async fn reject_head() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
