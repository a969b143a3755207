//! Authenticated probe against the SBRC auth endpoint.
//!
//! This module handles:
//! - The one-shot authenticated GET client
//! - Response classification
//! - Mock client for testing

pub mod client;
pub mod mock;

pub use client::{AuthClient, AUTH_URL};
pub use mock::{MockAuthClient, MockResponse};
