//! Read-only pipeline lookup
//!
//! Counterpart to the managed resource for lookups that are not tied to a
//! resource lifecycle. Absence of the remote job is a hard error here: there
//! is no local state to reconcile away. On success the lookup additionally
//! surfaces the last completed build's status and duration.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use capstan_client::JobClient;
use capstan_core::codec;
use capstan_core::diagnostics::Diagnostics;
use capstan_core::domain::job::RemoteJobState;

use crate::error::{ProviderError, Result};

/// Lookup request: exactly one of `id` or `name` must be supplied
#[derive(Debug, Clone, Default)]
pub struct PipelineQuery {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Facts about an existing pipeline job
///
/// `last_build_status` and `last_build_duration_ms` stay at their zero
/// values when the job has no completed build or the build lookup failed.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineFacts {
    pub id: String,
    pub name: String,
    pub description: String,
    pub script: String,
    pub last_build_status: String,
    pub last_build_duration_ms: i64,
}

/// Read-only data source over pipeline jobs
pub struct PipelineDataSource {
    client: Arc<dyn JobClient>,
}

impl PipelineDataSource {
    /// Creates a data source bound to a remote client
    pub fn new(client: Arc<dyn JobClient>) -> Self {
        Self { client }
    }

    /// Look up a pipeline job by id or name
    ///
    /// The identifier requirement is checked before any remote call; `id`
    /// wins when both are supplied. A missing job is a hard `NotFound`.
    /// Extraction failures and a failed last-build lookup degrade to empty
    /// fields with warning diagnostics.
    pub async fn read(&self, query: &PipelineQuery) -> Result<(PipelineFacts, Diagnostics)> {
        let name = query
            .id
            .as_deref()
            .or(query.name.as_deref())
            .ok_or_else(|| {
                ProviderError::Validation(
                    "one of 'id' or 'name' must be set to look up a pipeline".to_string(),
                )
            })?;

        let job = match self.client.get_job(name).await {
            Ok(job) => job,
            Err(e) if e.is_not_found() => return Err(ProviderError::NotFound(name.to_string())),
            Err(e) => return Err(e.into()),
        };

        let document = self.client.get_job_config(&job.name).await?;

        let mut diagnostics = Diagnostics::new();

        let script = match codec::extract_script(&document) {
            Ok(script) => script,
            Err(e) => {
                warn!("Could not extract script for job '{}': {}", job.name, e);
                diagnostics.warning(
                    "Script extraction failed",
                    format!("Failed to extract build script from job '{}': {}", job.name, e),
                );
                String::new()
            }
        };

        let description = match codec::extract_description(&document) {
            Ok(description) => description,
            Err(e) => {
                warn!("Could not extract description for job '{}': {}", job.name, e);
                diagnostics.warning(
                    "Description extraction failed",
                    format!("Failed to extract description from job '{}': {}", job.name, e),
                );
                String::new()
            }
        };

        // Secondary fetch: failure here degrades rather than failing an
        // otherwise-healthy read
        let last_build = if job.has_completed_build() {
            match self.client.get_last_completed_build(&job.name).await {
                Ok(build) => Some(build),
                Err(e) => {
                    warn!(
                        "Could not get last completed build for '{}': {}",
                        job.name, e
                    );
                    diagnostics.warning(
                        "Last build lookup failed",
                        format!("Failed to fetch last completed build of '{}': {}", job.name, e),
                    );
                    None
                }
            }
        } else {
            None
        };

        let remote = RemoteJobState {
            name: job.name,
            description,
            config_document: document,
            last_build,
        };

        let build = remote.last_build.unwrap_or_default();
        let facts = PipelineFacts {
            id: remote.name.clone(),
            name: remote.name,
            description: remote.description,
            script,
            last_build_status: build.status,
            last_build_duration_ms: build.duration_ms,
        };

        Ok((facts, diagnostics))
    }
}
