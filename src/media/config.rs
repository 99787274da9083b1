use url::Url;

use crate::utils::error::{HubError, Result};

/// Hosted media API for the filmHub cloud. Override with `MEDIA_HOST_URL`
/// (tests point this at a local mock server).
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1/filmhub";

/// Connection settings for the remote media host.
///
/// Credentials are deployment secrets supplied through the environment; they
/// are never compiled into the binary.
#[derive(Debug, Clone)]
pub struct MediaHostConfig {
    api_base: String,
    api_key: String,
    api_secret: String,
}

impl MediaHostConfig {
    pub fn new(
        api_base: &str,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self> {
        // Parse up front so a bad base URL fails at configuration time, not
        // on the first upload.
        Url::parse(api_base)?;

        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.trim().is_empty() || api_secret.trim().is_empty() {
            return Err(HubError::ConfigError {
                message: "media host credentials must not be empty".to_string(),
            });
        }

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            api_secret,
        })
    }

    pub fn from_env() -> Result<Self> {
        let api_base =
            std::env::var("MEDIA_HOST_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_key = std::env::var("MEDIA_API_KEY").map_err(|_| HubError::ConfigError {
            message: "MEDIA_API_KEY environment variable is not set".to_string(),
        })?;
        let api_secret = std::env::var("MEDIA_API_SECRET").map_err(|_| HubError::ConfigError {
            message: "MEDIA_API_SECRET environment variable is not set".to_string(),
        })?;

        Self::new(&api_base, api_key, api_secret)
    }

    pub(crate) fn endpoint_url(&self, action: &str) -> String {
        format!("{}/{}", self.api_base, action)
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_ignores_trailing_slash() {
        let config = MediaHostConfig::new("http://localhost:9000/media/", "key", "secret").unwrap();
        assert_eq!(config.endpoint_url("upload"), "http://localhost:9000/media/upload");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = MediaHostConfig::new("not a url", "key", "secret");
        assert!(matches!(result, Err(HubError::UrlError(_))));
    }

    #[test]
    fn blank_credentials_are_rejected() {
        let result = MediaHostConfig::new("http://localhost:9000", "", "secret");
        assert!(matches!(result, Err(HubError::ConfigError { .. })));
    }
}
