//! Remote job capability set
//!
//! The reconciliation core consumes this trait rather than the concrete HTTP
//! client, so the collaborator can be substituted with an in-memory double in
//! tests and the client handle can be injected once at provider configuration
//! instead of living in a process-wide singleton.

use async_trait::async_trait;

use crate::error::Result;
use capstan_core::domain::job::{BuildSummary, JobSummary};

/// Operations the reconciler needs from the remote CI server
#[async_trait]
pub trait JobClient: Send + Sync {
    /// Checks whether a job with this name exists on the server
    async fn job_exists(&self, name: &str) -> Result<bool>;

    /// Creates a job from a configuration document and returns the created
    /// job's handle
    async fn create_job(&self, name: &str, config_xml: &str) -> Result<JobSummary>;

    /// Fetches the handle of an existing job
    async fn get_job(&self, name: &str) -> Result<JobSummary>;

    /// Fetches the raw configuration document of an existing job
    async fn get_job_config(&self, name: &str) -> Result<String>;

    /// Replaces a job's configuration document and returns the post-update
    /// handle
    async fn update_job(&self, name: &str, config_xml: &str) -> Result<JobSummary>;

    /// Deletes a job
    async fn delete_job(&self, name: &str) -> Result<()>;

    /// Fetches status and duration of the job's last completed build
    async fn get_last_completed_build(&self, name: &str) -> Result<BuildSummary>;

    /// Cheap connectivity and credential check
    async fn ping(&self) -> Result<()>;
}
