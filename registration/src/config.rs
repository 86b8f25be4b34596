//! Endpoint configuration.
//!
//! The registration API is owned by someone else; its URL is configuration,
//! not logic. The default points at the production backend.

use url::Url;

/// Production endpoint of the student registration backend.
pub const DEFAULT_ENDPOINT: &str = "https://student-form-backend.vercel.app/api/students/";

/// Where registrations are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    /// Full URL the record is `POST`ed to.
    pub endpoint: Url,
}

impl RegistrationConfig {
    /// Parse and check an endpoint URL.
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(endpoint)
            .map_err(|e| ConfigError::InvalidUrl(endpoint.to_string(), e.to_string()))?;
        Self::from_url(url)
    }

    /// Use an already parsed URL. Only `http` and `https` are accepted.
    pub fn from_url(endpoint: Url) -> Result<Self, ConfigError> {
        match endpoint.scheme() {
            "http" | "https" => Ok(Self { endpoint }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Configuration for the production backend.
    pub fn production() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid endpoint URL {0}: {1}")]
    InvalidUrl(String, String),
    #[error("unsupported endpoint scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
}
