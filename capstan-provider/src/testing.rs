//! In-memory test double for the remote job collaborator
//!
//! Stores configuration documents keyed by job name and counts every
//! endpoint invocation, so tests can assert both behavior and which remote
//! calls were (not) made.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use capstan_client::error::{ClientError, Result};
use capstan_client::JobClient;
use capstan_core::codec;
use capstan_core::domain::job::{BuildRef, BuildSummary, JobSummary};

/// Per-endpoint invocation counters
#[derive(Debug, Clone, Default)]
pub struct CallCounts {
    pub exists: usize,
    pub create: usize,
    pub get: usize,
    pub get_config: usize,
    pub update: usize,
    pub delete: usize,
    pub last_build: usize,
    pub ping: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.exists
            + self.create
            + self.get
            + self.get_config
            + self.update
            + self.delete
            + self.last_build
            + self.ping
    }
}

#[derive(Debug, Clone)]
struct FakeJob {
    config: String,
    build_number: i64,
    build: Option<BuildSummary>,
}

/// In-memory stand-in for the remote CI server
#[derive(Default)]
pub struct FakeJobClient {
    jobs: Mutex<HashMap<String, FakeJob>>,
    calls: Mutex<CallCounts>,
    fail_last_build: bool,
}

impl FakeJobClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a job with the given configuration document
    pub fn with_job(self, name: &str, config: &str) -> Self {
        self.jobs.lock().unwrap().insert(
            name.to_string(),
            FakeJob {
                config: config.to_string(),
                build_number: 0,
                build: None,
            },
        );
        self
    }

    /// Attaches a completed build to a seeded job
    pub fn with_build(self, name: &str, number: i64, build: BuildSummary) -> Self {
        {
            let mut jobs = self.jobs.lock().unwrap();
            let job = jobs.get_mut(name).expect("with_build on unknown job");
            job.build_number = number;
            job.build = Some(build);
        }
        self
    }

    /// Makes the last-build endpoint fail
    pub fn failing_last_build(mut self) -> Self {
        self.fail_last_build = true;
        self
    }

    pub fn calls(&self) -> CallCounts {
        self.calls.lock().unwrap().clone()
    }

    pub fn job_count(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    pub fn contains_job(&self, name: &str) -> bool {
        self.jobs.lock().unwrap().contains_key(name)
    }

    /// Simulates an out-of-band deletion on the server
    pub fn remove_job(&self, name: &str) {
        self.jobs.lock().unwrap().remove(name);
    }

    fn summary_for(name: &str, job: &FakeJob) -> JobSummary {
        JobSummary {
            name: name.to_string(),
            description: codec::extract_description(&job.config).ok(),
            last_completed_build: (job.build_number > 0).then(|| BuildRef {
                number: job.build_number,
            }),
        }
    }
}

#[async_trait]
impl JobClient for FakeJobClient {
    async fn job_exists(&self, name: &str) -> Result<bool> {
        self.calls.lock().unwrap().exists += 1;
        Ok(self.jobs.lock().unwrap().contains_key(name))
    }

    async fn create_job(&self, name: &str, config_xml: &str) -> Result<JobSummary> {
        self.calls.lock().unwrap().create += 1;
        let mut jobs = self.jobs.lock().unwrap();
        if jobs.contains_key(name) {
            return Err(ClientError::api_error(
                400,
                format!("a job named '{}' already exists", name),
            ));
        }
        let job = FakeJob {
            config: config_xml.to_string(),
            build_number: 0,
            build: None,
        };
        let summary = Self::summary_for(name, &job);
        jobs.insert(name.to_string(), job);
        Ok(summary)
    }

    async fn get_job(&self, name: &str) -> Result<JobSummary> {
        self.calls.lock().unwrap().get += 1;
        let jobs = self.jobs.lock().unwrap();
        let job = jobs
            .get(name)
            .ok_or_else(|| ClientError::NotFound(name.to_string()))?;
        Ok(Self::summary_for(name, job))
    }

    async fn get_job_config(&self, name: &str) -> Result<String> {
        self.calls.lock().unwrap().get_config += 1;
        let jobs = self.jobs.lock().unwrap();
        let job = jobs
            .get(name)
            .ok_or_else(|| ClientError::NotFound(name.to_string()))?;
        Ok(job.config.clone())
    }

    async fn update_job(&self, name: &str, config_xml: &str) -> Result<JobSummary> {
        self.calls.lock().unwrap().update += 1;
        let mut jobs = self.jobs.lock().unwrap();
        let job = jobs
            .get_mut(name)
            .ok_or_else(|| ClientError::NotFound(name.to_string()))?;
        job.config = config_xml.to_string();
        Ok(Self::summary_for(name, job))
    }

    async fn delete_job(&self, name: &str) -> Result<()> {
        self.calls.lock().unwrap().delete += 1;
        let mut jobs = self.jobs.lock().unwrap();
        jobs.remove(name)
            .map(|_| ())
            .ok_or_else(|| ClientError::NotFound(name.to_string()))
    }

    async fn get_last_completed_build(&self, name: &str) -> Result<BuildSummary> {
        self.calls.lock().unwrap().last_build += 1;
        if self.fail_last_build {
            return Err(ClientError::api_error(500, "build endpoint unavailable"));
        }
        let jobs = self.jobs.lock().unwrap();
        let job = jobs
            .get(name)
            .ok_or_else(|| ClientError::NotFound(name.to_string()))?;
        job.build
            .clone()
            .ok_or_else(|| ClientError::NotFound(name.to_string()))
    }

    async fn ping(&self) -> Result<()> {
        self.calls.lock().unwrap().ping += 1;
        Ok(())
    }
}
