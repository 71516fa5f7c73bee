//! Provider configuration
//!
//! Connection settings for the CI server. Validation runs before any client
//! is constructed, so a misconfigured provider never issues a remote call.

use crate::error::{ProviderError, Result};

/// Provider connection settings
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub url: String,

    /// Account used for authentication
    pub username: String,

    /// API token paired with the account (sensitive; never the password)
    pub api_token: String,
}

impl ProviderConfig {
    /// Creates a new configuration
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            api_token: api_token.into(),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(ProviderError::Validation(
                "server url cannot be empty".to_string(),
            ));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ProviderError::Validation(
                "server url must start with http:// or https://".to_string(),
            ));
        }

        if self.username.is_empty() {
            return Err(ProviderError::Validation(
                "username cannot be empty".to_string(),
            ));
        }

        if self.api_token.is_empty() {
            return Err(ProviderError::Validation(
                "api token cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = ProviderConfig::new("http://localhost:8080", "admin", "token");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ProviderConfig::new("http://localhost:8080", "admin", "token");
        assert!(config.validate().is_ok());

        // Invalid URL should fail
        config.url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.url = "https://ci.example.com".to_string();
        assert!(config.validate().is_ok());

        // Empty credentials should fail
        config.username = String::new();
        assert!(config.validate().is_err());

        config.username = "admin".to_string();
        config.api_token = String::new();
        assert!(config.validate().is_err());
    }
}
