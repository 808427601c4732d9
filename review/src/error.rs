use thiserror::Error;

/// Local precondition violations in the review workflow.
///
/// These are surfaced to the immediate caller and never retried
/// automatically.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Malformed record data in a batch being loaded.
    #[error("invalid submission data: {0}")]
    InvalidInput(String),

    /// No record with the given id in the active session.
    #[error("submission not found: {0}")]
    NotFound(String),

    /// Finalize requires at least one approved screenshot.
    #[error("cannot finalize: no screenshots approved")]
    NothingApproved,

    /// State-mutating call after the session was finalized.
    #[error("review session already closed")]
    SessionClosed,
}
