//! Payload assembly.
//!
//! The assembler orchestrates the collectors: it resolves the secret,
//! translates the build summary, and walks every stage and job of a chain
//! result to attach tests, tasks, reports, and logs. Assembly degrades
//! section by section — a cache miss or I/O failure costs only the affected
//! part of the document, never the whole notification.

use std::sync::Arc;

use payload::{
    ArtifactManager, AuditLog, Auditor, BuildDetails, BuildSummary, Commit, JobDetails, JobRecord,
    LogAccessorFactory, Notification, NotificationPayload, PlanRef, ReportParser, ResultsCache,
    TestSummary, TestTotals, VariableStore, VcsChangeset,
};

use crate::artifacts::collect_reports;
use crate::logs::collect_logs;
use crate::secret::resolve_secret;
use crate::tasks::collect_task_results;
use crate::test_results::collect_test_results;

/// The externally owned stores the assembler reads from.
///
/// All collaborators are injected here, never fetched from an ambient
/// registry; concurrent transports may share one set (the stores are
/// read-only).
#[derive(Clone)]
pub struct Collaborators {
    pub variables: Arc<dyn VariableStore>,
    pub results: Arc<dyn ResultsCache>,
    pub logs: Arc<dyn LogAccessorFactory>,
    pub artifacts: Arc<dyn ArtifactManager>,
    pub parser: Arc<dyn ReportParser>,
    pub audit: Arc<dyn AuditLog>,
}

/// Builds one [`NotificationPayload`] per triggering event.
///
/// Owns the document tree only for the duration of one [`assemble`] call;
/// nothing outlives the send operation.
///
/// [`assemble`]: PayloadAssembler::assemble
pub struct PayloadAssembler {
    collaborators: Collaborators,
    plan: Option<PlanRef>,
    build: Option<BuildSummary>,
    auditor: Auditor,
}

impl PayloadAssembler {
    pub fn new(
        plan: Option<PlanRef>,
        build: Option<BuildSummary>,
        collaborators: Collaborators,
    ) -> Self {
        let auditor = Auditor::new(
            collaborators.audit.clone(),
            plan.as_ref().map(|p| p.key.clone()),
        );
        Self {
            collaborators,
            plan,
            build,
            auditor,
        }
    }

    /// The auditor bound to this assembler's plan.
    pub fn auditor(&self) -> &Auditor {
        &self.auditor
    }

    /// Assembles the full notification document for one event.
    pub fn assemble(&self, notification: &Notification) -> NotificationPayload {
        self.auditor.info("Assembling notification payload");

        let payload = NotificationPayload {
            secret: resolve_secret(self.collaborators.variables.as_ref(), &self.auditor),
            notification_type: notification.description.clone(),
            plan: self.plan.clone(),
            build: self.build.as_ref().map(|build| self.build_details(build)),
        };

        self.auditor.info("Notification payload assembled");
        payload
    }

    fn build_details(&self, build: &BuildSummary) -> BuildDetails {
        let jobs = build.stages.as_ref().map(|stages| {
            stages
                .iter()
                .flat_map(|stage| stage.jobs.iter())
                .map(|job| self.job_details(job))
                .collect::<Vec<_>>()
        });

        BuildDetails {
            number: build.number,
            reason: build.reason.clone(),
            successful: build.successful,
            completed_at: build.completed_at,
            has_shared_artifact: build.has_shared_artifacts,
            test_summary: test_summary(&build.test_totals),
            vcs: build.changesets.iter().map(changeset).collect(),
            // Mirrored under the legacy name for consumers that predate the
            // `jobs` key.
            failed_jobs: jobs.clone(),
            jobs,
        }
    }

    fn job_details(&self, job: &JobRecord) -> JobDetails {
        self.auditor
            .info(&format!("Loading cached test results for job {}", job.id));

        let container = self.collaborators.results.lookup(&job.result_key);
        if container.is_some() {
            self.auditor.info("Test results found");
        } else {
            self.auditor.error(&format!(
                "Could not load cached test results for job {}",
                job.id
            ));
            tracing::warn!(result_key = %job.result_key, "results cache miss");
        }

        self.auditor
            .info(&format!("Loading artifacts for job {}", job.id));
        let reports = collect_reports(
            self.collaborators.artifacts.as_ref(),
            self.collaborators.parser.as_ref(),
            &job.artifact_links,
            job.id,
            &self.auditor,
        );

        // Logs are attached only when the job ran no tests at all: zero
        // tests means the build itself broke and the log tail is the only
        // diagnostic signal left.
        let logs = if job.test_count == 0 {
            collect_logs(
                self.collaborators.logs.as_ref(),
                &job.result_key,
                &self.auditor,
            )
        } else {
            Vec::new()
        };

        JobDetails {
            id: job.id,
            successful_tests: container
                .as_ref()
                .map(|c| collect_test_results(&c.successful, false)),
            skipped_tests: container
                .as_ref()
                .map(|c| collect_test_results(&c.skipped, false)),
            failed_tests: container
                .as_ref()
                .map(|c| collect_test_results(&c.failed, true)),
            tasks: container.as_ref().map(|c| collect_task_results(&c.tasks)),
            static_assessment_reports: reports,
            logs,
        }
    }
}

fn test_summary(totals: &TestTotals) -> TestSummary {
    TestSummary {
        description: totals.description.clone(),
        total_count: totals.total,
        failed_count: totals.failed,
        existing_failed_count: totals.existing_failed,
        fixed_count: totals.fixed,
        new_failed_count: totals.new_failed,
        ignored_count: totals.ignored,
        quarantine_count: totals.quarantined,
        skipped_count: totals.skipped,
        successful_count: totals.successful,
        duration: totals.duration,
    }
}

fn changeset(record: &payload::ChangesetRecord) -> VcsChangeset {
    VcsChangeset {
        id: record.id.clone(),
        repository_name: record.repository_name.clone(),
        commits: record
            .commits
            .iter()
            .map(|commit| Commit {
                id: commit.id.clone(),
                comment: commit.comment.clone(),
            })
            .collect(),
    }
}
