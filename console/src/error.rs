use mintdesk_backend::BackendError;
use mintdesk_moderation::ToggleError;
use mintdesk_review::ReviewError;
use thiserror::Error;

/// Failures surfaced across the presentation boundary.
///
/// Every operation the UI drives returns one of these as a value, so
/// presentation code renders an error banner instead of crashing.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// No user has been selected yet.
    #[error("no user selected")]
    NoUserSelected,

    /// No review session is open for the selected user.
    #[error("no active review session")]
    NoActiveSession,

    /// The staff session was cleared by logout or expiry.
    #[error("staff session expired; sign in again")]
    SessionExpired,

    /// Nothing to retry: the last finalize either credited cleanly or never
    /// happened.
    #[error("no failed credit to retry")]
    NothingToRetry,

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error(transparent)]
    Toggle(#[from] ToggleError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
