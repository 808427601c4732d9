use thiserror::Error;

/// Failure reported by, or while reaching, the platform backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure: connection error, timeout, non-2xx status.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered, but flagged the request as failed.
    #[error("backend rejected the request: {0}")]
    Rejected(String),

    /// The response body did not match the expected shape.
    #[error("invalid backend response: {0}")]
    InvalidResponse(String),
}
