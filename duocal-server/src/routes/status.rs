//! Liveness endpoint

use axum::{Router, routing::get};

pub const GREETING: &str = "Backend is running!";

pub fn router() -> Router {
    Router::new().route("/", get(root))
}

/// GET / - plain-text greeting
async fn root() -> &'static str {
    GREETING
}
