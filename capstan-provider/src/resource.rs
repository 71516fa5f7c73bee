//! Managed pipeline resource lifecycle
//!
//! State machine over a single resource instance: absent, present, updated,
//! removed, with drift (present to absent) detected during read. Each
//! operation is one blocking call sequence against the remote collaborator;
//! there is no retry loop or caching here. The host serializes operations per
//! resource instance; this type holds no mutable state of its own and may be
//! shared across distinct resources.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use capstan_client::JobClient;
use capstan_core::codec;
use capstan_core::diagnostics::Diagnostics;
use capstan_core::domain::pipeline::{PipelineDefinition, ResourceRecord};

use crate::error::{ProviderError, Result};

/// Outcome of refreshing a managed resource against the server
#[derive(Debug)]
pub enum ReadOutcome {
    /// The remote job is gone; the host must drop the record from persisted
    /// state. Drift, not an error.
    Removed,

    /// The record was refreshed from the server, with any non-fatal
    /// diagnostics accumulated along the way
    Refreshed {
        record: ResourceRecord,
        diagnostics: Diagnostics,
    },
}

/// CRUD/import lifecycle for a managed pipeline job
pub struct PipelineResource {
    client: Arc<dyn JobClient>,
}

impl PipelineResource {
    /// Creates a resource handler bound to a remote client
    pub fn new(client: Arc<dyn JobClient>) -> Self {
        Self { client }
    }

    /// Create the remote job from a declared definition
    ///
    /// The existence check is the idempotency guard: the host may retry a
    /// create after an ambiguous prior failure, and a retry against an
    /// existing job must fail without mutating anything. Any remote failure
    /// after the guard is surfaced verbatim and no record is written.
    pub async fn create(&self, plan: &PipelineDefinition) -> Result<ResourceRecord> {
        validate_definition(plan)?;

        if self.client.job_exists(&plan.name).await? {
            return Err(ProviderError::AlreadyExists(plan.name.clone()));
        }

        let document = codec::build_config_xml(
            plan.description.as_deref().unwrap_or_default(),
            &plan.script,
        );
        let job = self.client.create_job(&plan.name, &document).await?;

        info!("Pipeline job created: {}", job.name);

        // Name comes from the server's authoritative handle; description and
        // script stay as declared. Re-deriving the script from the server
        // would add a decode that can fail on an otherwise-successful create.
        Ok(ResourceRecord {
            id: job.name.clone(),
            name: job.name,
            description: plan.description.clone().unwrap_or_default(),
            script: plan.script.clone(),
            last_updated: Some(Utc::now()),
        })
    }

    /// Refresh a record from the server, detecting drift
    ///
    /// Keyed by `state.id`, not a possibly-stale plan name. Absence of the
    /// remote job signals removal so the host drops the record; extraction
    /// failures degrade to empty fields with warning diagnostics so an
    /// unreadable script does not make a healthy resource unreconcilable.
    pub async fn read(&self, state: &ResourceRecord) -> Result<ReadOutcome> {
        let name = state.id.as_str();

        if !self.client.job_exists(name).await? {
            info!("Pipeline job '{}' not found, removing from state", name);
            return Ok(ReadOutcome::Removed);
        }

        let document = self.client.get_job_config(name).await?;

        let mut diagnostics = Diagnostics::new();

        let script = match codec::extract_script(&document) {
            Ok(script) => script,
            Err(e) => {
                warn!("Could not extract script for job '{}': {}", name, e);
                diagnostics.warning(
                    "Script extraction failed",
                    format!("Failed to extract build script from job '{}': {}", name, e),
                );
                String::new()
            }
        };

        let description = match codec::extract_description(&document) {
            Ok(description) => description,
            Err(e) => {
                warn!("Could not extract description for job '{}': {}", name, e);
                diagnostics.warning(
                    "Description extraction failed",
                    format!("Failed to extract description from job '{}': {}", name, e),
                );
                String::new()
            }
        };

        let record = ResourceRecord {
            id: state.id.clone(),
            name: name.to_string(),
            description,
            script,
            last_updated: Some(Utc::now()),
        };

        Ok(ReadOutcome::Refreshed {
            record,
            diagnostics,
        })
    }

    /// Apply a changed definition to the existing remote job
    ///
    /// Keyed by the stable identity in `state`, never the plan's name; a name
    /// change triggers destroy-and-recreate upstream via the replace-on-change
    /// schema marker. The description reads back from the post-update handle;
    /// the script is assumed applied as given, matching create.
    pub async fn update(
        &self,
        plan: &PipelineDefinition,
        state: &ResourceRecord,
    ) -> Result<ResourceRecord> {
        validate_definition(plan)?;

        let name = state.id.as_str();

        let document = codec::build_config_xml(
            plan.description.as_deref().unwrap_or_default(),
            &plan.script,
        );
        let job = self.client.update_job(name, &document).await?;

        info!("Pipeline job updated: {}", name);

        Ok(ResourceRecord {
            id: state.id.clone(),
            name: state.name.clone(),
            description: job.description.unwrap_or_default(),
            script: plan.script.clone(),
            last_updated: Some(Utc::now()),
        })
    }

    /// Delete the remote job
    ///
    /// An already-absent job is a success: deletion is idempotent, and the
    /// delete endpoint is not contacted in that case.
    pub async fn delete(&self, state: &ResourceRecord) -> Result<()> {
        let name = state.id.as_str();

        if !self.client.job_exists(name).await? {
            info!("Pipeline job '{}' already gone, nothing to delete", name);
            return Ok(());
        }

        self.client.delete_job(name).await?;

        info!("Pipeline job deleted: {}", name);
        Ok(())
    }

    /// Build an import skeleton for an externally created job
    ///
    /// The identifier becomes the record's id verbatim; no remote calls are
    /// performed, and a subsequent read populates the rest.
    pub fn import(&self, external_id: &str) -> ResourceRecord {
        ResourceRecord::skeleton(external_id)
    }
}

// =============================================================================
// Validation
// =============================================================================

fn validate_definition(plan: &PipelineDefinition) -> Result<()> {
    if plan.name.trim().is_empty() {
        return Err(ProviderError::Validation(
            "pipeline name cannot be empty".to_string(),
        ));
    }

    if plan.script.trim().is_empty() {
        return Err(ProviderError::Validation(
            "pipeline script cannot be empty".to_string(),
        ));
    }

    Ok(())
}
