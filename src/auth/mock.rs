//! Mock auth client for unit testing.
//!
//! This module provides a mock client that can be used in tests
//! without making real network requests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use reqwest::StatusCode;

use crate::error::FetchError;

use super::client::classify_response;

/// Canned response served by the mock.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// Status code to answer with.
    pub status: u16,
    /// Body bytes to answer with.
    pub body: Vec<u8>,
}

/// Mock auth client recording how many requests were issued.
#[derive(Debug, Clone)]
pub struct MockAuthClient {
    /// Canned response.
    response: MockResponse,
    /// Number of fetch calls made against this mock.
    calls: Arc<AtomicU64>,
}

impl MockAuthClient {
    /// Create a mock answering `200` with an empty body.
    pub fn new() -> Self {
        Self::with_response(200, Vec::new())
    }

    /// Create a mock answering with the given status and body.
    pub fn with_response(status: u16, body: Vec<u8>) -> Self {
        Self {
            response: MockResponse { status, body },
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Answer with the canned response, classified exactly like the real
    /// client classifies a live one.
    pub async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let status = StatusCode::from_u16(self.response.status).expect("mock status in range");
        classify_response(status, self.response.body.clone())
    }

    /// Number of fetch calls made so far.
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn mock_counts_invocations() {
        let mock = MockAuthClient::with_response(200, b"hello".to_vec());
        assert_eq!(mock.call_count(), 0);

        let body = mock.fetch().await.unwrap();

        assert_eq!(body, b"hello".to_vec());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_surfaces_error_statuses() {
        let mock = MockAuthClient::with_response(503, b"overloaded".to_vec());

        let err = mock.fetch().await.unwrap_err();

        assert!(matches!(err, FetchError::ErrorStatus { .. }));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_token_aborts_before_any_request() {
        let mock = MockAuthClient::new();
        let config = FetchConfig {
            tol_token: String::new(),
        };

        // Validation fails first, so the probe is never issued.
        assert!(config.validate().is_err());
        assert_eq!(mock.call_count(), 0);
    }
}
