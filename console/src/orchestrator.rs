//! Workflow orchestrator — sequences select → review → finalize → credit.

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::session::SessionContext;
use mintdesk_backend::{BackendError, RewardsBackend};
use mintdesk_moderation::{AccessToggleController, ToggleOutcome};
use mintdesk_review::{FinalizeSummary, ReviewAggregates, ReviewEngine};
use mintdesk_types::{CoinAmount, SubmissionId, SubmissionRecord, Timestamp, User, UserId};
use std::sync::Arc;

/// How the credit step of a finalize resolved.
#[derive(Debug)]
pub enum CreditStatus {
    /// Backend confirmed; the returned user is the new authoritative record.
    Credited(User),
    /// The review decision stands, but the credit failed. Retryable via
    /// [`WorkflowOrchestrator::retry_credit`] without repeating the review.
    Failed(BackendError),
}

/// Everything a finalize produced: the certified batch outcome plus how the
/// credit went.
#[derive(Debug)]
pub struct FinalizeReport {
    pub summary: FinalizeSummary,
    pub credit: CreditStatus,
}

/// A credit that failed after its finalize succeeded, kept for retry.
#[derive(Clone, Debug)]
struct PendingCredit {
    user_id: UserId,
    amount: CoinAmount,
}

/// The single entry point external presentation code drives.
///
/// Owns the selected user and the active review session. The moderation
/// controller operates on the same selected-user identity but writes only
/// `access_state`; this orchestrator writes only `balance` via the credit
/// path.
pub struct WorkflowOrchestrator {
    backend: Arc<dyn RewardsBackend>,
    moderation: AccessToggleController,
    session: SessionContext,
    config: ConsoleConfig,
    selected: Option<User>,
    review: Option<ReviewEngine>,
    pending_credit: Option<PendingCredit>,
}

impl WorkflowOrchestrator {
    pub fn new(
        backend: Arc<dyn RewardsBackend>,
        config: ConsoleConfig,
        session: SessionContext,
    ) -> Self {
        let moderation = AccessToggleController::new(backend.clone());
        Self {
            backend,
            moderation,
            session,
            config,
            selected: None,
            review: None,
            pending_credit: None,
        }
    }

    /// Select the user the following operations act on.
    ///
    /// Any open review session is discarded, as when staff navigate away
    /// from a half-finished review.
    pub fn select_user(&mut self, user: User) -> Result<(), ConsoleError> {
        self.ensure_signed_in()?;
        self.review = None;
        self.selected = Some(user);
        Ok(())
    }

    /// Fetch a user from the backend and select them.
    pub async fn load_user(&mut self, id: &UserId) -> Result<User, ConsoleError> {
        self.ensure_signed_in()?;
        let user = self.backend.fetch_user(id).await?;
        self.review = None;
        self.selected = Some(user.clone());
        Ok(user)
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Open a review session for the selected user.
    ///
    /// Uses `records` when the caller already has them; otherwise fetches
    /// from the backend. An empty backend answer seeds a placeholder batch
    /// when configured, so demo environments still have something to review.
    /// Returns the number of records under review.
    pub async fn open_review_session(
        &mut self,
        records: Option<Vec<SubmissionRecord>>,
    ) -> Result<usize, ConsoleError> {
        self.ensure_signed_in()?;
        let user_id = self.require_selected()?.id.clone();

        let mut batch = match records {
            Some(records) => records,
            None => self.backend.fetch_submissions(&user_id).await?,
        };
        if batch.is_empty() && self.config.placeholder_submissions {
            tracing::debug!(user = %user_id, "no submissions from backend, seeding placeholders");
            batch = placeholder_batch();
        }

        let engine = ReviewEngine::open(batch)?;
        let count = engine.snapshot().len();
        self.review = Some(engine);
        Ok(count)
    }

    /// Approve one screenshot in the open session.
    pub fn approve(&mut self, id: &SubmissionId) -> Result<(), ConsoleError> {
        self.ensure_signed_in()?;
        Ok(self.require_review()?.approve(id)?)
    }

    /// Reject one screenshot in the open session.
    pub fn reject(&mut self, id: &SubmissionId) -> Result<(), ConsoleError> {
        self.ensure_signed_in()?;
        Ok(self.require_review()?.reject(id)?)
    }

    /// Live aggregates for the open session.
    pub fn aggregates(&self) -> Result<ReviewAggregates, ConsoleError> {
        Ok(self.review.as_ref().ok_or(ConsoleError::NoActiveSession)?.aggregates())
    }

    /// The records under review, for rendering the list.
    pub fn session_records(&self) -> Result<Vec<SubmissionRecord>, ConsoleError> {
        Ok(self.review.as_ref().ok_or(ConsoleError::NoActiveSession)?.snapshot())
    }

    /// Finalize the batch, then credit the approved total.
    ///
    /// A finalize failure (nothing approved) leaves the session open and is
    /// returned as the error. After a successful finalize the session closes
    /// whatever happens next: a credit failure is reported in the returned
    /// report, not raised, and only the credit remains retryable.
    pub async fn finalize_and_credit(&mut self) -> Result<FinalizeReport, ConsoleError> {
        self.ensure_signed_in()?;
        let user_id = self.require_selected()?.id.clone();
        let summary = self.require_review()?.finalize()?;

        // The review decision is now on record; the session's records are done.
        self.review = None;

        let amount = summary.total_approved_coins;
        let credit = self.credit(&user_id, amount).await;
        Ok(FinalizeReport { summary, credit })
    }

    /// Re-issue a failed credit without repeating the review.
    pub async fn retry_credit(&mut self) -> Result<User, ConsoleError> {
        self.ensure_signed_in()?;
        let pending = self
            .pending_credit
            .clone()
            .ok_or(ConsoleError::NothingToRetry)?;

        match self.credit(&pending.user_id, pending.amount).await {
            CreditStatus::Credited(user) => Ok(user),
            CreditStatus::Failed(e) => Err(e.into()),
        }
    }

    /// Whether a failed credit is waiting for [`retry_credit`].
    ///
    /// [`retry_credit`]: WorkflowOrchestrator::retry_credit
    pub fn pending_credit_amount(&self) -> Option<CoinAmount> {
        self.pending_credit.as_ref().map(|p| p.amount)
    }

    /// Toggle the selected user's access; delegates to the moderation
    /// controller and adopts the confirmed state on success.
    pub async fn toggle_access(&mut self) -> Result<ToggleOutcome, ConsoleError> {
        self.ensure_signed_in()?;
        let user = self.require_selected()?.clone();
        let outcome = self.moderation.toggle(&user).await?;
        self.selected = Some(outcome.user.clone());
        Ok(outcome)
    }

    /// The moderation controller, for optimistic access-state reads.
    pub fn moderation(&self) -> &AccessToggleController {
        &self.moderation
    }

    /// Close the open review session without finalizing (back-navigation).
    /// The records are discarded; a pending credit retry survives.
    pub fn close_session(&mut self) {
        self.review = None;
    }

    pub fn has_open_session(&self) -> bool {
        self.review.is_some()
    }

    /// Clear the staff session. Further operations fail with
    /// `SessionExpired` until a new orchestrator is built from a fresh
    /// login.
    pub fn logout(&mut self) {
        self.session.clear();
        self.review = None;
        self.selected = None;
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    async fn credit(&mut self, user_id: &UserId, amount: CoinAmount) -> CreditStatus {
        match self.backend.credit_balance(user_id, amount).await {
            Ok(user) => {
                tracing::info!(user = %user_id, %amount, "balance credited");
                self.pending_credit = None;
                if self.selected.as_ref().is_some_and(|u| &u.id == user_id) {
                    self.selected = Some(user.clone());
                }
                CreditStatus::Credited(user)
            }
            Err(e) => {
                tracing::warn!(user = %user_id, %amount, error = %e, "credit failed; review decision stands");
                self.pending_credit = Some(PendingCredit {
                    user_id: user_id.clone(),
                    amount,
                });
                CreditStatus::Failed(e)
            }
        }
    }

    fn ensure_signed_in(&self) -> Result<(), ConsoleError> {
        if self.session.is_active() {
            Ok(())
        } else {
            Err(ConsoleError::SessionExpired)
        }
    }

    fn require_selected(&self) -> Result<&User, ConsoleError> {
        self.selected.as_ref().ok_or(ConsoleError::NoUserSelected)
    }

    fn require_review(&mut self) -> Result<&mut ReviewEngine, ConsoleError> {
        self.review.as_mut().ok_or(ConsoleError::NoActiveSession)
    }
}

/// Demo batch used when the backend has no submissions for the user.
fn placeholder_batch() -> Vec<SubmissionRecord> {
    let now = Timestamp::now();
    vec![
        SubmissionRecord::new("demo-1", "Day 1 workout proof", CoinAmount::new(100), now),
        SubmissionRecord::new("demo-2", "Day 2 workout proof", CoinAmount::new(150), now),
        SubmissionRecord::new("demo-3", "Day 3 workout proof", CoinAmount::new(200), now),
    ]
}
