//! Provider surface for the managing host
//!
//! Exposes metadata, schema declarations, and configuration binding. The
//! host calls [`JenkinsProvider::configure`] once per provider configuration;
//! the returned client handle is the only shared dependency and is handed
//! read-only to every resource and data source.

use std::sync::Arc;

use tracing::info;

use capstan_client::JenkinsClient;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::schema::{self, AttributeSchema};

/// Provider identity reported to the host
#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    /// Type name resources and data sources hang off of
    pub type_name: &'static str,
    pub version: &'static str,
}

/// The pipeline-job provider
#[derive(Debug, Default)]
pub struct JenkinsProvider;

impl JenkinsProvider {
    pub fn new() -> Self {
        Self
    }

    /// Provider identity
    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: "jenkins",
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Provider configuration attributes
    pub fn schema(&self) -> Vec<AttributeSchema> {
        schema::provider_attributes()
    }

    /// Validate the configuration, build the client, verify connectivity
    ///
    /// The connectivity check catches bad URLs and credentials at configure
    /// time instead of on the first lifecycle operation.
    pub async fn configure(&self, config: &ProviderConfig) -> Result<Arc<JenkinsClient>> {
        config.validate()?;

        let client = JenkinsClient::new(&config.url, &config.username, &config.api_token);
        client.ping().await?;

        info!("Provider configured for {}", config.url);

        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn test_metadata() {
        let provider = JenkinsProvider::new();
        let metadata = provider.metadata();
        assert_eq!(metadata.type_name, "jenkins");
        assert!(!metadata.version.is_empty());
    }

    #[test]
    fn test_provider_schema_declares_connection_attributes() {
        let provider = JenkinsProvider::new();
        let names: Vec<&str> = provider.schema().iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["url", "username", "api_token"]);
    }

    #[tokio::test]
    async fn test_configure_rejects_invalid_config_before_any_remote_call() {
        let provider = JenkinsProvider::new();
        let config = ProviderConfig::new("not-a-url", "admin", "token");

        let result = provider.configure(&config).await;
        assert!(matches!(result, Err(ProviderError::Validation(_))));
    }
}
