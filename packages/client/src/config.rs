//! Client configuration, populated from environment variables.

use std::time::Duration;

use url::Url;

/// Errors raised while reading configuration or building the client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("MITRA_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Runtime configuration for an [`ApiClient`](crate::ApiClient).
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `MITRA_API_URL` | `http://127.0.0.1:8080` | Server origin; `/api` is appended per request |
/// | `MITRA_TIMEOUT_SECS` | (absent) | Per-request timeout. Absent means the transport default (none) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the API server, e.g. `http://127.0.0.1:8080`.
    pub base_url: String,

    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8080";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("MITRA_API_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.into());

        let timeout = match std::env::var("MITRA_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        let config = Self { base_url, timeout };
        config.origin()?;
        Ok(config)
    }

    /// The validated base URL with any trailing slash removed.
    pub(crate) fn origin(&self) -> Result<String, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(self.base_url.trim_end_matches('/').to_string()),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8080/");
        assert_eq!(config.origin().unwrap(), "http://localhost:8080");
    }

    #[test]
    fn origin_rejects_garbage_and_other_schemes() {
        assert!(matches!(
            ClientConfig::new("not a url").origin(),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.com").origin(),
            Err(ConfigError::UnsupportedScheme(s)) if s == "ftp"
        ));
    }

    #[test]
    fn timeout_parsing() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert!(matches!(parse_timeout("soon"), Err(ConfigError::InvalidTimeout(_))));
    }
}
