//! Error types for the sotacal feed.

use thiserror::Error;

/// Errors that can occur while building the calendar feed.
///
/// `Parse` and `Derivation` are per-record failures: the calendar builder
/// logs them and skips the offending alert, never aborting the whole build.
/// `Upstream` is produced by the fetch collaborator when the alerts API
/// cannot be reached or decoded.
#[derive(Error, Debug)]
pub enum SotaCalError {
    #[error("Timestamp parse error: {0}")]
    Parse(String),

    #[error("Event derivation error: {0}")]
    Derivation(String),

    #[error("Upstream feed error: {0}")]
    Upstream(String),
}

/// Result type alias for sotacal operations.
pub type SotaCalResult<T> = Result<T, SotaCalError>;
