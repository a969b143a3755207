//! Unified error types for the SBRC utilities.

use thiserror::Error;

/// Unified error type for the SBRC utilities.
#[derive(Error, Debug)]
pub enum SbrcError {
    /// Configuration loading or validation error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Auth-endpoint probe error.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Status server error.
    #[error("server error: {0}")]
    Server(#[from] ServerError),
}

/// Configuration errors, fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment deserialization failed (missing or malformed variable).
    #[error("failed to read configuration from environment: {0}")]
    Load(#[from] envy::Error),

    /// The bearer token variable is set but empty.
    #[error("TOL_TOKEN must not be empty")]
    EmptyToken,
}

/// Probe errors, one variant per phase of the single fetch attempt.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP client construction failed.
    #[error("failed to construct HTTP client: {0}")]
    BuildClient(#[source] reqwest::Error),

    /// Request construction failed.
    #[error("failed to build auth request: {0}")]
    BuildRequest(#[source] reqwest::Error),

    /// The request could not be sent.
    #[error("auth request failed: {0}")]
    Send(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("failed to read auth response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The endpoint answered with a client or server error status.
    #[error("auth endpoint returned {status}: {body}")]
    ErrorStatus {
        /// Status line of the response.
        status: reqwest::StatusCode,
        /// Raw response body, for operator diagnosis.
        body: String,
    },
}

/// Status server errors, fatal at startup.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The configured listen address could not be parsed.
    #[error("invalid listen address {addr:?}: {source}")]
    InvalidAddr {
        /// The configured address value.
        addr: String,
        /// Underlying parse failure.
        source: std::net::AddrParseError,
    },

    /// Binding the listener failed.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The resolved socket address.
        addr: std::net::SocketAddr,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// The listener failed while serving.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, SbrcError>;
