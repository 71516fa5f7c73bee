//! Remote job mirror types
//!
//! These structures are produced only by reading the remote CI server and
//! are never persisted independently of a `ResourceRecord`.

use serde::{Deserialize, Serialize};

/// Pointer to a completed build, as embedded in a job summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRef {
    pub number: i64,
}

/// Job handle returned by the remote server's JSON API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub last_completed_build: Option<BuildRef>,
}

impl JobSummary {
    /// Whether the job reports at least one completed build.
    ///
    /// The server always serializes the build pointer when present, so the
    /// number is the meaningful signal, not the field itself.
    pub fn has_completed_build(&self) -> bool {
        self.last_completed_build
            .as_ref()
            .is_some_and(|build| build.number > 0)
    }
}

/// Raw completed-build record from the build endpoint
///
/// `duration` arrives as a JSON number of milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRecord {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub duration: f64,
}

/// Status and duration of the last completed build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildSummary {
    pub status: String,
    pub duration_ms: i64,
}

impl From<BuildRecord> for BuildSummary {
    fn from(record: BuildRecord) -> Self {
        Self {
            status: record.result.unwrap_or_default(),
            duration_ms: record.duration as i64,
        }
    }
}

/// Mirror of what actually exists on the server for one job
#[derive(Debug, Clone)]
pub struct RemoteJobState {
    pub name: String,
    pub description: String,
    /// Raw wire-format configuration document
    pub config_document: String,
    pub last_build: Option<BuildSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_summary_deserializes_server_payload() {
        let payload = r#"{
            "name": "nightly",
            "description": "nightly build",
            "lastCompletedBuild": { "number": 42 }
        }"#;

        let summary: JobSummary = serde_json::from_str(payload).unwrap();
        assert_eq!(summary.name, "nightly");
        assert_eq!(summary.description.as_deref(), Some("nightly build"));
        assert!(summary.has_completed_build());
    }

    #[test]
    fn test_job_summary_without_builds() {
        let payload = r#"{ "name": "fresh" }"#;

        let summary: JobSummary = serde_json::from_str(payload).unwrap();
        assert!(summary.description.is_none());
        assert!(!summary.has_completed_build());
    }

    #[test]
    fn test_build_zero_number_means_no_completed_build() {
        let payload = r#"{ "name": "fresh", "lastCompletedBuild": { "number": 0 } }"#;

        let summary: JobSummary = serde_json::from_str(payload).unwrap();
        assert!(!summary.has_completed_build());
    }

    #[test]
    fn test_build_record_conversion() {
        let record = BuildRecord {
            result: Some("SUCCESS".to_string()),
            duration: 1234.0,
        };

        let summary: BuildSummary = record.into();
        assert_eq!(summary.status, "SUCCESS");
        assert_eq!(summary.duration_ms, 1234);
    }
}
