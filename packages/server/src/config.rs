//! Server configuration, populated from environment variables.

use std::net::{AddrParseError, SocketAddr};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MITRA_BIND must be a socket address such as 0.0.0.0:8080, got {value:?}: {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Runtime configuration for the stub server.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `MITRA_BIND` | `0.0.0.0:8080` | TCP socket address to listen on |
/// | `PING_MESSAGE` | `ping` | Message returned by `GET /api/ping` |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub ping_message: String,
}

impl ServerConfig {
    pub const DEFAULT_BIND: &'static str = "0.0.0.0:8080";
    pub const DEFAULT_PING_MESSAGE: &'static str = "ping";

    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = std::env::var("MITRA_BIND").unwrap_or_else(|_| Self::DEFAULT_BIND.into());
        let bind_addr = parse_bind(&bind)?;

        let ping_message = std::env::var("PING_MESSAGE")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PING_MESSAGE.into());

        Ok(Self {
            bind_addr,
            ping_message,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            ping_message: Self::DEFAULT_PING_MESSAGE.into(),
        }
    }
}

fn parse_bind(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse().map_err(|source| ConfigError::InvalidBind {
        value: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_bind() {
        assert_eq!(
            ServerConfig::default().bind_addr,
            parse_bind(ServerConfig::DEFAULT_BIND).unwrap()
        );
    }

    #[test]
    fn bad_bind_is_rejected() {
        let err = parse_bind("localhost").unwrap_err();
        assert!(err.to_string().contains("MITRA_BIND"));
    }
}
