//! Wire types for the notification document.
//!
//! These structs define the JSON body POSTed to the webhook endpoint. Field
//! names are a stable contract with the receiving system and must not change;
//! `serde(rename)` attributes pin every key explicitly.
//!
//! Optional sections (`plan`, `build`, the per-job test arrays) are `Option`
//! fields that are skipped entirely when absent — a consumer sees the key
//! either fully populated or not at all, never `null`.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::identifiers::{JobId, PlanKey};

/// Root document delivered to the webhook endpoint.
///
/// `secret` doubles as the value of the `Authorization` header so the
/// receiver can verify the request came from a legitimate server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Shared secret resolved from the global variable store (or a sentinel,
    /// see [`crate::ports::VariableStore`]).
    pub secret: String,

    /// Human-readable description of the triggering event.
    #[serde(rename = "notificationType")]
    pub notification_type: String,

    /// Present iff the triggering event carries a plan reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanRef>,

    /// Present iff a results summary is available for the triggering event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildDetails>,
}

/// Identifies the build plan the notification belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRef {
    pub key: PlanKey,
}

/// Everything known about one completed build or deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildDetails {
    pub number: u32,

    /// Short human-readable trigger reason (e.g. `"Code has changed"`).
    pub reason: String,

    pub successful: bool,

    #[serde(rename = "completedAt")]
    pub completed_at: DateTime<Utc>,

    /// Whether the build produced shared (build-level) artifacts. Job-level
    /// artifacts are reported per job instead.
    #[serde(rename = "hasSharedArtifact")]
    pub has_shared_artifact: bool,

    #[serde(rename = "testSummary")]
    pub test_summary: TestSummary,

    /// Always an array, possibly empty.
    pub vcs: Vec<VcsChangeset>,

    /// Per-job details. Populated only for multi-stage (chain) results;
    /// absent for single-job results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<JobDetails>>,

    /// Identical in content to `jobs`; kept so consumers that still read the
    /// old field name keep working. New consumers should read `jobs`.
    #[serde(rename = "failedJobs", skip_serializing_if = "Option::is_none")]
    pub failed_jobs: Option<Vec<JobDetails>>,
}

/// Aggregate test counters for the whole build.
///
/// The counters come straight from the orchestrator's results summary; the
/// identity `total ≈ failed + successful + skipped + ignored` is *not*
/// enforced here because the quarantined/existing-failed categories overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSummary {
    pub description: String,
    #[serde(rename = "totalCount")]
    pub total_count: u32,
    #[serde(rename = "failedCount")]
    pub failed_count: u32,
    #[serde(rename = "existingFailedCount")]
    pub existing_failed_count: u32,
    #[serde(rename = "fixedCount")]
    pub fixed_count: u32,
    #[serde(rename = "newFailedCount")]
    pub new_failed_count: u32,
    #[serde(rename = "ignoredCount")]
    pub ignored_count: u32,
    #[serde(rename = "quarantineCount")]
    pub quarantine_count: u32,
    #[serde(rename = "skippedCount")]
    pub skipped_count: u32,
    #[serde(rename = "successfulCount")]
    pub successful_count: u32,
    /// Total test duration in milliseconds.
    pub duration: u64,
}

/// One VCS changeset that went into the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsChangeset {
    pub id: String,
    #[serde(rename = "repositoryName")]
    pub repository_name: String,
    pub commits: Vec<Commit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub comment: String,
}

/// Per-job section of a chain result.
///
/// The four test/task arrays are omitted as a block when the results cache
/// has no container for the job (a cache miss degrades the job entry, it
/// never fails the payload). `logs` is always present so consumers can
/// iterate it unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub id: JobId,

    #[serde(rename = "successfulTests", skip_serializing_if = "Option::is_none")]
    pub successful_tests: Option<Vec<TestResult>>,

    #[serde(rename = "skippedTests", skip_serializing_if = "Option::is_none")]
    pub skipped_tests: Option<Vec<TestResult>>,

    #[serde(rename = "failedTests", skip_serializing_if = "Option::is_none")]
    pub failed_tests: Option<Vec<TestResult>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskResult>>,

    #[serde(rename = "staticAssessmentReports")]
    pub static_assessment_reports: Vec<Report>,

    /// Non-empty only when the build-level test total is zero and the log
    /// store returned data; always present as an array.
    pub logs: Vec<LogLine>,
}

/// One test case in a job's successful/skipped/failed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    #[serde(rename = "methodName")]
    pub method_name: String,
    #[serde(rename = "className")]
    pub class_name: String,

    /// Present only for failed tests. Each entry is truncated to the first
    /// 5000 characters before inclusion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Outcome of one configured task within a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    pub description: String,
    #[serde(rename = "pluginKey")]
    pub plugin_key: String,
    #[serde(rename = "isEnabled")]
    pub is_enabled: bool,
    #[serde(rename = "isFinal")]
    pub is_final: bool,
    pub state: TaskState,
}

/// Terminal state of a task, serialized as its upper-case name
/// (`"SUCCESS"`, `"FAILED"`, `"ERROR"`).
///
/// States this crate does not know about travel through verbatim via
/// [`TaskState::Other`] so a newer orchestrator cannot break the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskState {
    Success,
    Failed,
    Error,
    Other(String),
}

impl TaskState {
    /// Returns the wire name of the state.
    pub fn as_str(&self) -> &str {
        match self {
            TaskState::Success => "SUCCESS",
            TaskState::Failed => "FAILED",
            TaskState::Error => "ERROR",
            TaskState::Other(name) => name,
        }
    }
}

impl From<&str> for TaskState {
    fn from(name: &str) -> Self {
        match name {
            "SUCCESS" => TaskState::Success,
            "FAILED" => TaskState::Failed,
            "ERROR" => TaskState::Error,
            other => TaskState::Other(other.to_owned()),
        }
    }
}

impl Serialize for TaskState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StateVisitor;

        impl<'de> Visitor<'de> for StateVisitor {
            type Value = TaskState;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a task state name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<TaskState, E> {
                Ok(TaskState::from(value))
            }
        }

        deserializer.deserialize_str(StateVisitor)
    }
}

/// One line of job log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// One parsed static-analysis report.
///
/// The schema is owned by the report parser, not by this crate; the document
/// travels through the payload untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(pub serde_json::Value);
