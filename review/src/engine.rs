//! Approve/reject/finalize protocol over the submission store.

use crate::error::ReviewError;
use crate::store::SubmissionStore;
use mintdesk_types::{CoinAmount, ReviewState, SubmissionId, SubmissionRecord};
use serde::{Deserialize, Serialize};

/// Aggregate totals for the active session.
///
/// Recomputed from the current record states on every call, never cached,
/// so the totals cannot drift from the decisions on record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAggregates {
    /// Count of records currently approved.
    pub approved_count: usize,
    /// Sum of `reward_coins` over approved records.
    pub total_approved_coins: CoinAmount,
    /// Every record approved — not merely every record decided.
    pub all_approved: bool,
}

/// Certified outcome of a finalized batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeSummary {
    pub approved_count: usize,
    pub total_approved_coins: CoinAmount,
    pub all_approved: bool,
    /// Always true on a successful finalize; the presentation layer keys its
    /// confirmation banner off this flag.
    pub has_approved_screenshots: bool,
}

/// Drives one review session over a [`SubmissionStore`].
///
/// Finalize certifies the batch outcome and closes the session; it never
/// contacts the backend. Partial approval is a legal outcome — the caller
/// decides whether remaining pending items warrant a re-review prompt.
#[derive(Clone, Debug, Default)]
pub struct ReviewEngine {
    store: SubmissionStore,
    closed: bool,
}

impl ReviewEngine {
    /// Open a session over `records`, replacing anything previous.
    pub fn open(records: Vec<SubmissionRecord>) -> Result<Self, ReviewError> {
        let mut store = SubmissionStore::new();
        store.load(records)?;
        Ok(Self {
            store,
            closed: false,
        })
    }

    /// Approve the record matching `id`. Idempotent: approving an approved
    /// record changes nothing.
    pub fn approve(&mut self, id: &SubmissionId) -> Result<(), ReviewError> {
        self.set_state(id, ReviewState::Approved)
    }

    /// Reject the record matching `id`. Idempotent, and overwrites an
    /// earlier approval on re-review.
    pub fn reject(&mut self, id: &SubmissionId) -> Result<(), ReviewError> {
        self.set_state(id, ReviewState::Rejected)
    }

    fn set_state(&mut self, id: &SubmissionId, state: ReviewState) -> Result<(), ReviewError> {
        if self.closed {
            return Err(ReviewError::SessionClosed);
        }
        self.store.set_state(id, state)
    }

    /// Live aggregates computed from the current snapshot.
    pub fn aggregates(&self) -> ReviewAggregates {
        let records = self.store.snapshot();
        let approved_count = records
            .iter()
            .filter(|r| r.review_state.is_approved())
            .count();
        let total_approved_coins = records
            .iter()
            .filter(|r| r.review_state.is_approved())
            .map(|r| r.reward_coins)
            .sum();
        ReviewAggregates {
            approved_count,
            total_approved_coins,
            all_approved: !records.is_empty() && approved_count == records.len(),
        }
    }

    /// Certify the batch outcome and close the session.
    ///
    /// Requires at least one approval; fails with `NothingApproved`
    /// otherwise and leaves the session open. After success, any further
    /// `approve`/`reject`/`finalize` fails with `SessionClosed`.
    pub fn finalize(&mut self) -> Result<FinalizeSummary, ReviewError> {
        if self.closed {
            return Err(ReviewError::SessionClosed);
        }
        let aggregates = self.aggregates();
        if aggregates.approved_count == 0 {
            return Err(ReviewError::NothingApproved);
        }
        self.closed = true;
        Ok(FinalizeSummary {
            approved_count: aggregates.approved_count,
            total_approved_coins: aggregates.total_approved_coins,
            all_approved: aggregates.all_approved,
            has_approved_screenshots: true,
        })
    }

    /// Whether finalize has closed this session.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Immutable copy of the records under review, in load order.
    pub fn snapshot(&self) -> Vec<SubmissionRecord> {
        self.store.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintdesk_types::Timestamp;

    fn record(id: &str, reward: u64) -> SubmissionRecord {
        SubmissionRecord::new(
            id,
            format!("screenshot {id}"),
            CoinAmount::new(reward),
            Timestamp::new(100),
        )
    }

    fn engine_with(rewards: &[(&str, u64)]) -> ReviewEngine {
        ReviewEngine::open(rewards.iter().map(|&(id, r)| record(id, r)).collect()).unwrap()
    }

    #[test]
    fn partial_approval_aggregates() {
        // Three records, approve the first and third.
        let mut engine = engine_with(&[("s-1", 100), ("s-2", 150), ("s-3", 200)]);
        engine.approve(&"s-1".into()).unwrap();
        engine.approve(&"s-3".into()).unwrap();

        let aggregates = engine.aggregates();
        assert_eq!(aggregates.approved_count, 2);
        assert_eq!(aggregates.total_approved_coins, CoinAmount::new(300));
        assert!(!aggregates.all_approved);
    }

    #[test]
    fn all_approved_requires_every_record() {
        let mut engine = engine_with(&[("s-1", 10), ("s-2", 20)]);
        engine.approve(&"s-1".into()).unwrap();
        engine.reject(&"s-2".into()).unwrap();
        // Every record decided, but not every record approved.
        assert!(!engine.aggregates().all_approved);

        engine.approve(&"s-2".into()).unwrap();
        assert!(engine.aggregates().all_approved);
    }

    #[test]
    fn approve_twice_is_idempotent() {
        let mut engine = engine_with(&[("s-1", 100)]);
        engine.approve(&"s-1".into()).unwrap();
        let before = engine.snapshot();
        engine.approve(&"s-1".into()).unwrap();
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.aggregates().approved_count, 1);
    }

    #[test]
    fn re_review_updates_totals() {
        let mut engine = engine_with(&[("s-1", 100), ("s-2", 50)]);
        engine.approve(&"s-1".into()).unwrap();
        engine.approve(&"s-2".into()).unwrap();
        assert_eq!(engine.aggregates().total_approved_coins, CoinAmount::new(150));

        // Flipping a decision must drop its reward from the recomputed total.
        engine.reject(&"s-2".into()).unwrap();
        let aggregates = engine.aggregates();
        assert_eq!(aggregates.approved_count, 1);
        assert_eq!(aggregates.total_approved_coins, CoinAmount::new(100));
    }

    #[test]
    fn finalize_with_partial_approval_succeeds() {
        let mut engine = engine_with(&[("s-1", 100), ("s-2", 150), ("s-3", 200)]);
        engine.approve(&"s-1".into()).unwrap();
        engine.approve(&"s-3".into()).unwrap();

        let summary = engine.finalize().unwrap();
        assert_eq!(summary.approved_count, 2);
        assert_eq!(summary.total_approved_coins, CoinAmount::new(300));
        assert!(!summary.all_approved);
        assert!(summary.has_approved_screenshots);
        assert!(engine.is_closed());
    }

    #[test]
    fn finalize_with_nothing_approved_fails() {
        let mut engine = engine_with(&[("s-1", 100)]);
        engine.reject(&"s-1".into()).unwrap();
        assert!(matches!(
            engine.finalize(),
            Err(ReviewError::NothingApproved)
        ));
        assert!(!engine.is_closed(), "a failed finalize leaves the session open");
    }

    #[test]
    fn mutation_after_finalize_is_session_closed() {
        let mut engine = engine_with(&[("s-1", 100)]);
        engine.approve(&"s-1".into()).unwrap();
        engine.finalize().unwrap();

        assert!(matches!(
            engine.approve(&"s-1".into()),
            Err(ReviewError::SessionClosed)
        ));
        assert!(matches!(
            engine.reject(&"s-1".into()),
            Err(ReviewError::SessionClosed)
        ));
        assert!(matches!(engine.finalize(), Err(ReviewError::SessionClosed)));
    }

    #[test]
    fn aggregates_still_readable_after_finalize() {
        let mut engine = engine_with(&[("s-1", 100)]);
        engine.approve(&"s-1".into()).unwrap();
        engine.finalize().unwrap();
        // Read-only calls stay available so the closing screen can render.
        assert_eq!(engine.aggregates().total_approved_coins, CoinAmount::new(100));
    }

    #[test]
    fn open_rejects_malformed_batch() {
        let result = ReviewEngine::open(vec![record("s-1", 0)]);
        assert!(matches!(result, Err(ReviewError::InvalidInput(_))));
    }
}
