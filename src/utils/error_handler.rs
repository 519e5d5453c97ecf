// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;

/// Maps errors raised by the middleware stack to HTTP statuses
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    error!("Unhandled middleware error: {err}");

    // Otherwise, 500
    StatusCode::INTERNAL_SERVER_ERROR
}
