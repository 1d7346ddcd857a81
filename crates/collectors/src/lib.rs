//! Result collectors and the payload assembler.
//!
//! This crate turns one completed build/deployment outcome into a
//! [`payload::NotificationPayload`]. Each collector reads one kind of result
//! data through the port traits defined in [`payload`]; the
//! [`PayloadAssembler`] composes their output into the wire document.
//!
//! ## Architectural Layer
//!
//! **Orchestration.** Collectors sequence reads against the externally owned
//! stores (results cache, log store, artifact store, variable store) and
//! contain the degradation policy: missing or broken data costs only its own
//! section of the document. No transport concerns live here.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`secret`] | Shared-secret resolution with sentinel fallbacks |
//! | [`test_results`] | Per-test detail mapping + error truncation |
//! | [`logs`] | Log-tail collection for test-less jobs |
//! | [`artifacts`] | Static-analysis report collection |
//! | [`tasks`] | Task outcome mapping |
//! | [`assembler`] | The [`PayloadAssembler`] tying it all together |

pub mod artifacts;
pub mod assembler;
pub mod logs;
pub mod secret;
pub mod tasks;
pub mod test_results;

#[cfg(test)]
mod fixtures;

pub use artifacts::collect_reports;
pub use assembler::{Collaborators, PayloadAssembler};
pub use logs::{collect_logs, MAX_LOG_LINES};
pub use secret::{resolve_secret, NO_VARIABLES_DEFINED, SECRET_NOT_DEFINED, SECRET_VARIABLE_KEY};
pub use tasks::collect_task_results;
pub use test_results::{collect_test_results, MAX_ERROR_CHARS};
