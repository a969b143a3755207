//! HTTP handlers for the status server.
//!
//! All handlers are stateless and unconditional writes; none of them read
//! the request body.

use axum::http::StatusCode;

/// Health-check handler; always answers `200` with `ok\n`.
pub async fn health() -> &'static str {
    "ok\n"
}

/// Greeting handler; always answers `200` with `Hello World!`.
pub async fn hello() -> &'static str {
    "Hello World!"
}

/// Fallback for unmatched paths; `404` with an empty body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn health_body_is_byte_exact() {
        let response = health().await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok\n");
    }

    #[tokio::test]
    async fn hello_body_has_no_trailing_newline() {
        let response = hello().await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Hello World!");
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let response = not_found().await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }
}
