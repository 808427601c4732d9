use mintdesk_backend::BackendError;
use mintdesk_types::UserId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToggleError {
    /// A toggle for this user is already in flight; the new request was
    /// rejected without touching the in-flight state.
    #[error("access toggle already in progress for user {0}")]
    ToggleInProgress(UserId),

    /// The user record carries no backend id to key the request by.
    #[error("user has no id; cannot issue access toggle")]
    MissingUserId,

    /// The backend refused or could not be reached; the optimistic state
    /// has been rolled back.
    #[error("access toggle failed: {0}")]
    Backend(#[from] BackendError),
}
