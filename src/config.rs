//! Application configuration loaded from environment variables.

use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::{ConfigError, ServerError};

/// Probe configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Bearer token for the SBRC auth endpoint. Required, no default.
    pub tol_token: String,
}

impl FetchConfig {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check that a usable token is present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tol_token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(())
    }
}

/// Status server configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind, e.g. `:8080` or `127.0.0.1:8080`.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    ":8080".to_string()
}

impl ServerConfig {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Resolve the configured value to a socket address.
    ///
    /// An empty value falls back to the default. A bare `:PORT` value binds
    /// all interfaces.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = if self.listen_addr.is_empty() {
            default_listen_addr()
        } else {
            self.listen_addr.clone()
        };

        let normalized = match addr.strip_prefix(':') {
            Some(port) => format!("0.0.0.0:{port}"),
            None => addr.clone(),
        };

        normalized
            .parse()
            .map_err(|source| ServerError::InvalidAddr { addr, source })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_listen_addr(), ":8080");
    }

    #[test]
    fn validate_rejects_empty_token() {
        let config = FetchConfig {
            tol_token: "".to_string(),
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_non_empty_token() {
        let config = FetchConfig {
            tol_token: "abc123".to_string(),
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_listen_addr_binds_all_interfaces_on_8080() {
        let config = ServerConfig::default();
        let addr = config.socket_addr().unwrap();

        assert_eq!(addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn empty_listen_addr_falls_back_to_default() {
        let config = ServerConfig {
            listen_addr: "".to_string(),
        };

        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn bare_port_listen_addr_is_normalized() {
        let config = ServerConfig {
            listen_addr: ":9090".to_string(),
        };
        let addr = config.socket_addr().unwrap();

        assert_eq!(addr.port(), 9090);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn full_listen_addr_is_used_verbatim() {
        let config = ServerConfig {
            listen_addr: "127.0.0.1:3000".to_string(),
        };

        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn invalid_listen_addr_is_rejected() {
        let config = ServerConfig {
            listen_addr: "not-an-address".to_string(),
        };

        assert!(config.socket_addr().is_err());
    }
}
