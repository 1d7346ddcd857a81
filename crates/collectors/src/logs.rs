//! Job log collection.
//!
//! Logs are only attached when a job produced no test results at all — the
//! heuristic being that zero tests means the build itself broke, and the
//! log tail is then the only diagnostic signal the receiver can show.
//! Orchestrator-internal log lines are excluded by kind filter.

use payload::{Auditor, LogAccessorFactory, LogKind, LogLine, PlanResultKey};

/// Maximum number of log lines attached per job; the last lines are taken.
pub const MAX_LOG_LINES: usize = 1000;

/// Kinds of log entries worth forwarding: output of the build itself, never
/// the orchestrator's own bookkeeping.
const FORWARDED_KINDS: [LogKind; 2] = [LogKind::BuildOutput, LogKind::Error];

/// Fetches the last [`MAX_LOG_LINES`] build/error lines for one job.
///
/// Any I/O failure is written to the audit log and degrades to an empty
/// list; log collection never aborts payload assembly.
pub fn collect_logs(factory: &dyn LogAccessorFactory, key: &PlanResultKey, audit: &Auditor) -> Vec<LogLine> {
    let lines = factory
        .open(key)
        .and_then(|accessor| accessor.last_n(MAX_LOG_LINES, &FORWARDED_KINDS));

    match lines {
        Ok(lines) => {
            audit.info(&format!("Found {} log entries", lines.len()));
            lines
        }
        Err(err) => {
            audit.error(&format!("Error while loading build log: {err}"));
            tracing::warn!(result_key = %key, error = %err, "build log unavailable");
            Vec::new()
        }
    }
}
