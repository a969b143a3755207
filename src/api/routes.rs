//! HTTP route definitions for the status server.

use axum::{routing::any, Router};

use super::handlers::{health, hello, not_found};

/// Create the router.
///
/// Exact-path dispatch only, no middleware. Routes accept any method, and
/// unmatched paths get an explicit empty-body 404.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", any(health))
        .route("/api", any(hello))
        .fallback(not_found)
}
