//! Error types at the collector boundaries.
//!
//! None of these escape the top-level send: every collector catches its own
//! boundary error, writes it to the audit log, and degrades its section of
//! the payload. They exist so omission-on-failure is an explicit `Result`
//! branch rather than a caught side effect.

use thiserror::Error;

/// A static-analysis artifact file could not be turned into a report.
///
/// Produced by [`crate::ports::ReportParser`] implementations. One failed
/// report never affects sibling artifacts of the same job.
#[derive(Debug, Error)]
pub enum ReportParseError {
    /// The file could not be read.
    #[error("failed to read report file: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but its content is not a valid report.
    #[error("malformed report: {0}")]
    Malformed(String),
}

/// A job's log file could not be opened or read.
///
/// Produced by [`crate::ports::LogAccessorFactory`] and
/// [`crate::ports::LogAccessor`]. The log collector reports this to the
/// audit log and substitutes an empty log list.
#[derive(Debug, Error)]
pub enum LogAccessError {
    #[error("failed to access build log: {0}")]
    Io(#[from] std::io::Error),

    /// No log file exists for the requested result key.
    #[error("no build log found for {0}")]
    NotFound(String),
}
