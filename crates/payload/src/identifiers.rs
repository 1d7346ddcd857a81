//! Newtype domain identifiers.
//!
//! Every addressable concept in the notification domain is a distinct newtype
//! wrapping a primitive. This prevents accidentally interchanging — for
//! example — a [`PlanKey`] with a [`PlanResultKey`] even though both are
//! strings under the hood.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — String-backed (orchestrator-assigned keys)
// ---------------------------------------------------------------------------

string_id! {
    /// Identifies a build plan (e.g. `"PROJECT-PLAN"`).
    ///
    /// Also the address of the plan's own audit log stream, which is where
    /// every user-visible diagnostic of the notification pipeline ends up.
    PlanKey
}

string_id! {
    /// Composite key addressing one specific job's execution result within
    /// one specific build (e.g. `"PROJECT-PLAN-JOB1-42"`).
    ///
    /// Used to look up cached test results and to open the job's log file.
    PlanResultKey
}

string_id! {
    /// Opaque token naming one stored artifact.
    ///
    /// Issued by the build orchestrator alongside each artifact link; only
    /// the artifact manager can resolve it to actual file content.
    ArtifactHandle
}

// ---------------------------------------------------------------------------
// Identifiers — integer-backed
// ---------------------------------------------------------------------------

/// Numeric identifier of one job execution within a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(u64);

impl JobId {
    /// Creates a new identifier from a raw integer.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
