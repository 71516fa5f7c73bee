//! Configuration module
//!
//! Holds the CLI's connection settings for the CI server.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the CI server
    pub url: String,
    /// Account used for authentication
    pub username: String,
    /// API token paired with the account
    pub api_token: String,
}
