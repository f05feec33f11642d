//! Health check endpoint.
//!
//! Used by load balancers and monitoring to verify the service is running.
//! It does not check the database.

use axum::http::StatusCode;

/// `GET /health` - returns 200 OK while the process is alive.
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
