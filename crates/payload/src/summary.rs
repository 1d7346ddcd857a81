//! Input-side records handed to the pipeline by the build orchestrator.
//!
//! These are read-only snapshots of externally owned state: the pipeline
//! queries them while assembling one notification and never mutates or
//! outlives them. They deliberately mirror the shape of the orchestrator's
//! results summary rather than the wire document — the assembler owns the
//! translation between the two.

use chrono::{DateTime, Utc};

use crate::identifiers::{ArtifactHandle, JobId, PlanResultKey};
use crate::types::TaskState;

/// The triggering event, as handed over by the notification mechanism.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Human-readable event description; becomes `notificationType` on the
    /// wire.
    pub description: String,
}

/// Authoritative record of one build/deployment execution's outcome.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub number: u32,
    pub reason: String,
    pub successful: bool,
    pub completed_at: DateTime<Utc>,

    /// Whether build-level (shared) artifacts were produced. Job-level
    /// artifact links live on [`JobRecord`] instead.
    pub has_shared_artifacts: bool,

    pub test_totals: TestTotals,
    pub changesets: Vec<ChangesetRecord>,

    /// `Some` for multi-stage (chain) results, `None` for single-job
    /// results. The distinction decides whether the wire document carries a
    /// `jobs` section.
    pub stages: Option<Vec<StageRecord>>,
}

/// Aggregate test counters of one results summary.
#[derive(Debug, Clone, Default)]
pub struct TestTotals {
    pub description: String,
    pub total: u32,
    pub failed: u32,
    pub existing_failed: u32,
    pub fixed: u32,
    pub new_failed: u32,
    pub ignored: u32,
    pub quarantined: u32,
    pub skipped: u32,
    pub successful: u32,
    /// Milliseconds.
    pub duration: u64,
}

#[derive(Debug, Clone)]
pub struct ChangesetRecord {
    pub id: String,
    pub repository_name: String,
    pub commits: Vec<CommitRecord>,
}

#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub id: String,
    pub comment: String,
}

/// One stage of a chain: the jobs that ran together.
#[derive(Debug, Clone)]
pub struct StageRecord {
    pub jobs: Vec<JobRecord>,
}

/// One job execution within a stage.
#[derive(Debug, Clone)]
pub struct JobRecord {
    pub id: JobId,
    /// Addresses this job's cached test results and its log file.
    pub result_key: PlanResultKey,
    /// Number of test cases this job ran. Zero means the build itself broke
    /// before any test could run, which switches log collection on for the
    /// job.
    pub test_count: u32,
    /// Artifact definitions declared on the job, in declaration order.
    pub artifact_links: Vec<ArtifactLink>,
}

/// A named, job-level declaration of produced output files, independent of
/// how/where they are physically stored.
#[derive(Debug, Clone)]
pub struct ArtifactLink {
    pub label: String,
    pub handle: ArtifactHandle,
}

/// Cached per-job test results, looked up by [`PlanResultKey`].
///
/// A cache miss is represented by the lookup returning `None`, never by an
/// empty container.
#[derive(Debug, Clone, Default)]
pub struct ResultsContainer {
    pub successful: Vec<TestCaseRecord>,
    pub skipped: Vec<TestCaseRecord>,
    pub failed: Vec<TestCaseRecord>,
    pub tasks: Vec<TaskRecord>,
}

/// One test case as recorded by the orchestrator.
#[derive(Debug, Clone)]
pub struct TestCaseRecord {
    pub name: String,
    pub method_name: String,
    pub class_name: String,
    /// Raw failure messages; only meaningful on the failed list.
    pub errors: Vec<String>,
}

/// One task execution as recorded by the orchestrator.
///
/// `description` and `plugin_key` may be empty when the orchestrator has no
/// value; absence propagates as an empty string, never as a failure.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub description: String,
    pub plugin_key: String,
    pub enabled: bool,
    pub final_task: bool,
    pub state: TaskState,
}
