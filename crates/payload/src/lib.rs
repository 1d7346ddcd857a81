//! Core notification domain.
//!
//! This crate contains every domain concept of the result-notification
//! pipeline: newtype identifiers, the wire document POSTed to the webhook
//! endpoint, the input-side records handed over by the build orchestrator,
//! boundary error types, and the port traits external collaborators
//! implement. Infrastructure crates implement the traits defined here; they
//! never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** This crate has no I/O dependencies. It
//! defines *what* the pipeline needs; the orchestrator's adapters define
//! *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`PlanKey`, `PlanResultKey`, `JobId`, …) |
//! | [`types`] | Wire document types (`NotificationPayload`, `JobDetails`, …) |
//! | [`summary`] | Input-side records (`BuildSummary`, `ResultsContainer`, …) |
//! | [`ports`] | Collaborator traits (`VariableStore`, `ResultsCache`, …) |
//! | [`errors`] | Boundary error types |
//! | [`audit`] | User-visible diagnostics helper over the `AuditLog` port |

pub mod audit;
pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod summary;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use audit::Auditor;
pub use errors::{LogAccessError, ReportParseError};
pub use identifiers::{ArtifactHandle, JobId, PlanKey, PlanResultKey};
pub use ports::{
    ArtifactManager, AuditLog, DataProvider, GlobalVariable, LogAccessor, LogAccessorFactory,
    LogKind, ReportParser, ResultsCache, VariableStore,
};
pub use summary::{
    ArtifactLink, BuildSummary, ChangesetRecord, CommitRecord, JobRecord, Notification,
    ResultsContainer, StageRecord, TaskRecord, TestCaseRecord, TestTotals,
};
pub use types::{
    BuildDetails, Commit, JobDetails, LogLine, NotificationPayload, PlanRef, Report, TaskResult,
    TaskState, TestResult, TestSummary, VcsChangeset,
};
