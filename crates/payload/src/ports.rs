//! Port traits implemented by the external collaborators.
//!
//! The notification pipeline is a pure consumer: it reads from the
//! orchestrator's stores through these traits and never writes back. All
//! collaborators are injected explicitly at construction time — there is no
//! ambient registry to fetch them from.
//!
//! Implementations must be `Send + Sync`: concurrent builds each hold their
//! own transport instance but share the underlying read-only stores.

use std::path::PathBuf;

use crate::errors::{LogAccessError, ReportParseError};
use crate::identifiers::{ArtifactHandle, PlanKey, PlanResultKey};
use crate::summary::ResultsContainer;
use crate::types::{LogLine, Report};

/// One entry of the global variable store.
#[derive(Debug, Clone)]
pub struct GlobalVariable {
    pub key: String,
    pub value: String,
}

/// Key-value configuration store holding, among other things, the shared
/// webhook secret.
pub trait VariableStore: Send + Sync {
    /// Returns all globally defined variables. An empty list is a valid
    /// answer, not an error.
    fn global_variables(&self) -> Vec<GlobalVariable>;
}

/// Cache of per-job test results, populated by the orchestrator while the
/// build runs and read here after completion.
pub trait ResultsCache: Send + Sync {
    /// Returns the cached container for one job result, or `None` on a
    /// cache miss.
    fn lookup(&self, key: &PlanResultKey) -> Option<ResultsContainer>;
}

/// Log entry kinds the pipeline is interested in.
///
/// Orchestrator-internal bookkeeping lines have no kind here and are
/// excluded by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    /// Standard output produced by the build itself.
    BuildOutput,
    /// Error output produced by the build itself.
    Error,
}

/// Opens [`LogAccessor`]s for individual job results.
pub trait LogAccessorFactory: Send + Sync {
    fn open(&self, key: &PlanResultKey) -> Result<Box<dyn LogAccessor>, LogAccessError>;
}

/// Read access to one job's log file.
pub trait LogAccessor {
    /// Returns the last `n` log lines whose kind is in `kinds`, oldest
    /// first.
    fn last_n(&self, n: usize, kinds: &[LogKind]) -> Result<Vec<LogLine>, LogAccessError>;
}

/// Resolved access to one artifact's content, tagged by capability.
///
/// Dispatch happens on the tag, not on type identity, so new storage
/// backends slot in as new variants without widening a type hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataProvider {
    /// The artifact is stored on the local file system. The path is the
    /// root of whatever the artifact's copy pattern matched: a regular file
    /// for a single match, a directory for multiple matches.
    FileBacked(PathBuf),
    /// Any other storage backend, named for diagnostics.
    Unsupported(String),
}

/// Resolves artifact handles to their content, varying by storage backend.
pub trait ArtifactManager: Send + Sync {
    /// Returns a provider for the artifact, or `None` when no backend can
    /// serve it (the artifact is then skipped, not failed).
    fn data_provider(&self, handle: &ArtifactHandle) -> Option<DataProvider>;
}

/// External component converting one static-analysis artifact file into a
/// structured report document.
pub trait ReportParser: Send + Sync {
    fn parse(&self, file: &std::path::Path, label: &str) -> Result<Report, ReportParseError>;
}

/// The build's own log stream, visible to end users.
///
/// This is the user-facing half of the two logging channels; `tracing`
/// carries the operator-facing half. Implementations may drop messages when
/// no log stream exists for the plan.
pub trait AuditLog: Send + Sync {
    fn append(&self, plan: &PlanKey, message: &str, is_error: bool);
}
