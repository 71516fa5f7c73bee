//! Job API endpoints
//!
//! Endpoint paths follow the Jenkins REST conventions: job lookups under
//! `/job/{name}/api/json`, configuration documents at `/job/{name}/config.xml`,
//! creation through `/createItem`, deletion through `/job/{name}/doDelete`.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::api::JobClient;
use crate::error::{ClientError, Result};
use crate::JenkinsClient;
use capstan_core::domain::job::{BuildRecord, BuildSummary, JobSummary};

impl JenkinsClient {
    /// Check whether a job exists
    ///
    /// A 404 from the job endpoint means "does not exist" rather than an
    /// error; every other non-success status is surfaced.
    pub async fn job_exists(&self, name: &str) -> Result<bool> {
        let url = format!("{}/job/{}/api/json", self.base_url(), name);
        let response = self.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(true)
    }

    /// Create a job from a configuration document
    ///
    /// Posts the document to `/createItem` and then fetches the created job's
    /// handle, so the caller receives the server's authoritative view.
    pub async fn create_job(&self, name: &str, config_xml: &str) -> Result<JobSummary> {
        debug!("Creating job '{}'", name);

        let url = format!("{}/createItem?name={}", self.base_url(), name);
        let response = self
            .post(&url)
            .header("Content-Type", "text/xml")
            .body(config_xml.to_string())
            .send()
            .await?;

        self.handle_empty_response(response).await?;

        self.get_job(name).await
    }

    /// Get a job's handle
    pub async fn get_job(&self, name: &str) -> Result<JobSummary> {
        let url = format!("{}/job/{}/api/json", self.base_url(), name);
        let response = self.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(name.to_string()));
        }

        self.handle_response(response).await
    }

    /// Get a job's raw configuration document
    pub async fn get_job_config(&self, name: &str) -> Result<String> {
        let url = format!("{}/job/{}/config.xml", self.base_url(), name);
        let response = self.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(name.to_string()));
        }

        self.handle_text_response(response).await
    }

    /// Replace a job's configuration document
    ///
    /// Returns the post-update handle fetched from the server.
    pub async fn update_job(&self, name: &str, config_xml: &str) -> Result<JobSummary> {
        debug!("Updating job '{}'", name);

        let url = format!("{}/job/{}/config.xml", self.base_url(), name);
        let response = self
            .post(&url)
            .header("Content-Type", "text/xml")
            .body(config_xml.to_string())
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(name.to_string()));
        }

        self.handle_empty_response(response).await?;

        self.get_job(name).await
    }

    /// Delete a job
    pub async fn delete_job(&self, name: &str) -> Result<()> {
        debug!("Deleting job '{}'", name);

        let url = format!("{}/job/{}/doDelete", self.base_url(), name);
        let response = self.post(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(name.to_string()));
        }

        self.handle_empty_response(response).await
    }

    /// Get status and duration of the job's last completed build
    pub async fn get_last_completed_build(&self, name: &str) -> Result<BuildSummary> {
        let url = format!(
            "{}/job/{}/lastCompletedBuild/api/json",
            self.base_url(),
            name
        );
        let response = self.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(name.to_string()));
        }

        let record: BuildRecord = self.handle_response(response).await?;
        Ok(record.into())
    }

    /// Verify connectivity and credentials against the server root
    pub async fn ping(&self) -> Result<()> {
        let url = format!("{}/api/json", self.base_url());
        let response = self.get(&url).send().await?;

        self.handle_empty_response(response).await
    }
}

#[async_trait]
impl JobClient for JenkinsClient {
    async fn job_exists(&self, name: &str) -> Result<bool> {
        JenkinsClient::job_exists(self, name).await
    }

    async fn create_job(&self, name: &str, config_xml: &str) -> Result<JobSummary> {
        JenkinsClient::create_job(self, name, config_xml).await
    }

    async fn get_job(&self, name: &str) -> Result<JobSummary> {
        JenkinsClient::get_job(self, name).await
    }

    async fn get_job_config(&self, name: &str) -> Result<String> {
        JenkinsClient::get_job_config(self, name).await
    }

    async fn update_job(&self, name: &str, config_xml: &str) -> Result<JobSummary> {
        JenkinsClient::update_job(self, name, config_xml).await
    }

    async fn delete_job(&self, name: &str) -> Result<()> {
        JenkinsClient::delete_job(self, name).await
    }

    async fn get_last_completed_build(&self, name: &str) -> Result<BuildSummary> {
        JenkinsClient::get_last_completed_build(self, name).await
    }

    async fn ping(&self) -> Result<()> {
        JenkinsClient::ping(self).await
    }
}
