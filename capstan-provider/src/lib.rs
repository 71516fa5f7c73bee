//! Capstan Provider
//!
//! Reconciliation core for managed pipeline jobs on a Jenkins-compatible CI
//! server:
//! - Resource lifecycle: create/read/update/delete/import over a managed job
//! - Data source: read-only lookup by name or id, with last-build details
//! - Provider surface: metadata, schema declarations, configuration binding
//!
//! Reconciliation logic takes and returns plain domain values plus a
//! diagnostics list; marshalling into host-specific request/response
//! containers is an adapter concern outside this crate.

pub mod config;
pub mod data_source;
pub mod error;
pub mod provider;
pub mod resource;
pub mod schema;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::ProviderConfig;
pub use data_source::{PipelineDataSource, PipelineFacts, PipelineQuery};
pub use error::{ProviderError, Result};
pub use provider::{JenkinsProvider, ProviderMetadata};
pub use resource::{PipelineResource, ReadOutcome};
