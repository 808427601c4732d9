//! In-memory store of the submissions under review.

use crate::error::ReviewError;
use mintdesk_types::{ReviewState, SubmissionId, SubmissionRecord};

/// Ordered sequence of the submissions belonging to one review session.
///
/// Holds the records of exactly one user at a time; [`load`] replaces the
/// whole sequence when a new session opens.
///
/// [`load`]: SubmissionStore::load
#[derive(Clone, Debug, Default)]
pub struct SubmissionStore {
    records: Vec<SubmissionRecord>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current sequence with `records`.
    ///
    /// Rejects the whole batch if any record carries a zero reward — the
    /// platform never issues rewardless screenshots, so one in the batch
    /// means malformed data.
    pub fn load(&mut self, records: Vec<SubmissionRecord>) -> Result<(), ReviewError> {
        if let Some(bad) = records.iter().find(|r| r.reward_coins.is_zero()) {
            return Err(ReviewError::InvalidInput(format!(
                "submission {} has no reward",
                bad.id
            )));
        }
        self.records = records;
        Ok(())
    }

    /// Set the review state of the record matching `id`.
    ///
    /// Re-setting the state a record already has succeeds idempotently.
    /// Re-review overwrites the previous decision rather than appending.
    pub fn set_state(
        &mut self,
        id: &SubmissionId,
        new_state: ReviewState,
    ) -> Result<(), ReviewError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| ReviewError::NotFound(id.to_string()))?;
        record.review_state = new_state;
        Ok(())
    }

    /// Immutable copy of the current sequence, in load order.
    pub fn snapshot(&self) -> Vec<SubmissionRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintdesk_types::{CoinAmount, Timestamp};

    fn record(id: &str, reward: u64) -> SubmissionRecord {
        SubmissionRecord::new(id, format!("screenshot {id}"), CoinAmount::new(reward), Timestamp::new(100))
    }

    #[test]
    fn load_replaces_previous_sequence() {
        let mut store = SubmissionStore::new();
        store.load(vec![record("s-1", 10), record("s-2", 20)]).unwrap();
        assert_eq!(store.len(), 2);

        store.load(vec![record("s-9", 5)]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].id, "s-9".into());
    }

    #[test]
    fn load_rejects_zero_reward_batch() {
        let mut store = SubmissionStore::new();
        let result = store.load(vec![record("s-1", 10), record("s-2", 0)]);
        assert!(matches!(result, Err(ReviewError::InvalidInput(_))));
        assert!(store.is_empty(), "a rejected batch must not be applied");
    }

    #[test]
    fn set_state_transitions_pending_record() {
        let mut store = SubmissionStore::new();
        store.load(vec![record("s-1", 10)]).unwrap();
        store.set_state(&"s-1".into(), ReviewState::Approved).unwrap();
        assert_eq!(store.snapshot()[0].review_state, ReviewState::Approved);
    }

    #[test]
    fn set_state_unknown_id_is_not_found() {
        let mut store = SubmissionStore::new();
        store.load(vec![record("s-1", 10)]).unwrap();
        let result = store.set_state(&"s-404".into(), ReviewState::Approved);
        assert!(matches!(result, Err(ReviewError::NotFound(_))));
    }

    #[test]
    fn set_state_same_value_is_idempotent() {
        let mut store = SubmissionStore::new();
        store.load(vec![record("s-1", 10)]).unwrap();
        store.set_state(&"s-1".into(), ReviewState::Approved).unwrap();
        let before = store.snapshot();
        store.set_state(&"s-1".into(), ReviewState::Approved).unwrap();
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn re_review_overwrites_decision() {
        let mut store = SubmissionStore::new();
        store.load(vec![record("s-1", 10)]).unwrap();
        store.set_state(&"s-1".into(), ReviewState::Approved).unwrap();
        store.set_state(&"s-1".into(), ReviewState::Rejected).unwrap();
        assert_eq!(store.snapshot()[0].review_state, ReviewState::Rejected);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut store = SubmissionStore::new();
        store.load(vec![record("s-1", 10)]).unwrap();
        let mut snap = store.snapshot();
        snap[0].review_state = ReviewState::Rejected;
        assert_eq!(store.snapshot()[0].review_state, ReviewState::Pending);
    }
}
