//! One-shot client for the authenticated auth-endpoint probe.

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::config::FetchConfig;
use crate::error::FetchError;

/// SBRC auth endpoint probed by `fetch`.
pub const AUTH_URL: &str = "https://rc.trionline.com.au/api/auth/";

/// Client for the single authenticated GET against the auth endpoint.
#[derive(Debug, Clone)]
pub struct AuthClient {
    /// HTTP client with redirect following disabled.
    http: reqwest::Client,
    /// Bearer token sent with the request.
    token: String,
    /// Target URL.
    url: String,
}

impl AuthClient {
    /// Create a client from config.
    ///
    /// Redirect responses are returned as-is rather than followed. No
    /// timeout is set; the single attempt runs until the transport
    /// completes or fails.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(FetchError::BuildClient)?;

        Ok(Self {
            http,
            token: config.tol_token.clone(),
            url: AUTH_URL.to_string(),
        })
    }

    /// Build the GET request carrying the bearer token.
    pub fn request(&self) -> Result<reqwest::Request, FetchError> {
        self.http
            .get(&self.url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .build()
            .map_err(FetchError::BuildRequest)
    }

    /// Send the request and buffer the whole response body.
    ///
    /// Statuses in [400, 599] surface as [`FetchError::ErrorStatus`] with
    /// the status line and body; everything else is a success.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let request = self.request()?;

        let response = self.http.execute(request).await.map_err(FetchError::Send)?;
        let status = response.status();
        debug!(%status, "auth endpoint responded");

        let body = response.bytes().await.map_err(FetchError::ReadBody)?;

        classify_response(status, body.to_vec())
    }

    /// Get the target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// True for statuses the probe treats as failures.
pub fn is_error_status(status: StatusCode) -> bool {
    (400..600).contains(&status.as_u16())
}

/// Map a buffered response to the probe outcome.
pub fn classify_response(status: StatusCode, body: Vec<u8>) -> Result<Vec<u8>, FetchError> {
    if is_error_status(status) {
        return Err(FetchError::ErrorStatus {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(body)
}
