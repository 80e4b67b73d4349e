use axum::{response::Response, routing, Router};

use super::ok;

pub fn router() -> Router<()> {
    Router::new().route("/health", routing::get(health))
}

/// Liveness only. The mail transport must not gate this endpoint.
async fn health() -> Response {
    ok()
}
