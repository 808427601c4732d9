//! Submitted proof-of-work screenshots awaiting review.

use crate::amount::CoinAmount;
use crate::id::SubmissionId;
use crate::state::ReviewState;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// One reviewable screenshot submission.
///
/// `review_state` starts at `Pending`. Approve and reject overwrite the
/// current decision; re-review replaces it rather than appending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub title: String,
    pub reward_coins: CoinAmount,
    pub submitted_at: Timestamp,
    /// Backends omit this for never-reviewed items; absent means `Pending`.
    #[serde(default)]
    pub review_state: ReviewState,
}

impl SubmissionRecord {
    /// A fresh record as delivered by the backend — nothing decided yet.
    pub fn new(
        id: impl Into<SubmissionId>,
        title: impl Into<String>,
        reward_coins: CoinAmount,
        submitted_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            reward_coins,
            submitted_at,
            review_state: ReviewState::Pending,
        }
    }
}
