//! Convenience wrapper over the [`AuditLog`] port.
//!
//! Every user-visible diagnostic of the pipeline goes through an
//! [`Auditor`], which prefixes messages and silently drops them when the
//! triggering event has no plan (there is no log stream to write to then).

use std::sync::Arc;

use crate::identifiers::PlanKey;
use crate::ports::AuditLog;

/// Prefix identifying pipeline messages inside the build's log stream.
const MESSAGE_PREFIX: &str = "[SERVER-NOTIFICATION]";

/// Writes user-visible diagnostics to one plan's audit log.
#[derive(Clone)]
pub struct Auditor {
    log: Arc<dyn AuditLog>,
    plan: Option<PlanKey>,
}

impl Auditor {
    pub fn new(log: Arc<dyn AuditLog>, plan: Option<PlanKey>) -> Self {
        Self { log, plan }
    }

    /// Appends an informational line to the build log, if a plan is known.
    pub fn info(&self, message: &str) {
        self.append(message, false);
    }

    /// Appends an error line to the build log, if a plan is known.
    pub fn error(&self, message: &str) {
        self.append(message, true);
    }

    fn append(&self, message: &str, is_error: bool) {
        if let Some(plan) = &self.plan {
            self.log
                .append(plan, &format!("{MESSAGE_PREFIX} {message}"), is_error);
        }
    }
}

impl std::fmt::Debug for Auditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auditor").field("plan", &self.plan).finish()
    }
}
