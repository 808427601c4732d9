//! Abstract backend interface for the rewards platform API.
//!
//! Every backend binding (HTTP, in-memory test double) implements this
//! trait. The rest of the workspace depends only on the trait, so workflow
//! code never sees transport details.

pub mod error;

pub use error::BackendError;

use async_trait::async_trait;
use mintdesk_types::{CoinAmount, SubmissionRecord, User, UserId};

/// Operations the staff console consumes from the platform backend.
///
/// Success and failure are reported distinctly from the payload: a
/// structurally valid response carrying a failure flag surfaces as
/// [`BackendError::Rejected`], never as a success.
#[async_trait]
pub trait RewardsBackend: Send + Sync {
    /// Fetch a single user by id.
    async fn fetch_user(&self, id: &UserId) -> Result<User, BackendError>;

    /// Fetch the reviewable submissions for a user.
    async fn fetch_submissions(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SubmissionRecord>, BackendError>;

    /// Ban the user's account.
    async fn set_banned(&self, user_id: &UserId) -> Result<(), BackendError>;

    /// Lift a ban on the user's account.
    async fn set_unbanned(&self, user_id: &UserId) -> Result<(), BackendError>;

    /// Credit `amount` coins to the user's balance.
    ///
    /// Returns the updated user as confirmed by the backend.
    async fn credit_balance(
        &self,
        user_id: &UserId,
        amount: CoinAmount,
    ) -> Result<User, BackendError>;
}
