//! Secret resolution from the global variable store.
//!
//! Absence is data, not failure: when the secret variable is missing the
//! resolver substitutes a sentinel the receiver can recognise, and writes a
//! diagnostic to the build log so the operator finds out why authentication
//! failed downstream.

use payload::{Auditor, VariableStore};

/// Name of the variable holding the shared secret. Contains "PASSWORD" so
/// the orchestrator's UI masks the value.
pub const SECRET_VARIABLE_KEY: &str = "SERVER_PLUGIN_SECRET_PASSWORD";

/// Sentinel used when variables exist but none carries the secret.
pub const SECRET_NOT_DEFINED: &str = "SERVER_PLUGIN_SECRET_PASSWORD-NOT-DEFINED";

/// Sentinel used when the store has no variables at all.
pub const NO_VARIABLES_DEFINED: &str = "NO-GLOBAL-VARIABLES-ARE-DEFINED";

/// Looks up the shared secret, falling back to sentinels. Never fails.
pub fn resolve_secret(store: &dyn VariableStore, audit: &Auditor) -> String {
    let variables = store.global_variables();
    if variables.is_empty() {
        audit.error("No global variables are defined");
        tracing::warn!("variable store is empty, sending sentinel secret");
        return NO_VARIABLES_DEFINED.to_owned();
    }

    match variables.into_iter().find(|v| v.key == SECRET_VARIABLE_KEY) {
        Some(variable) => variable.value,
        None => {
            audit.error(&format!("Variable {SECRET_VARIABLE_KEY} is not defined"));
            tracing::warn!(variable = SECRET_VARIABLE_KEY, "secret variable missing");
            SECRET_NOT_DEFINED.to_owned()
        }
    }
}
