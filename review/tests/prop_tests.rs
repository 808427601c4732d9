use proptest::prelude::*;

use mintdesk_review::{ReviewEngine, ReviewError};
use mintdesk_types::{CoinAmount, ReviewState, SubmissionRecord, Timestamp};

fn records_from(rewards: &[u64]) -> Vec<SubmissionRecord> {
    rewards
        .iter()
        .enumerate()
        .map(|(i, &reward)| {
            SubmissionRecord::new(
                format!("s-{i}"),
                format!("screenshot {i}"),
                CoinAmount::new(reward),
                Timestamp::new(1_700_000_000 + i as u64),
            )
        })
        .collect()
}

/// (record index, approve?) pairs, resolved against the record count.
fn decisions() -> impl Strategy<Value = Vec<(prop::sample::Index, bool)>> {
    prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..40)
}

fn rewards() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..=1000, 1..12)
}

proptest! {
    /// For every decision sequence, the aggregate total equals the sum of
    /// rewards over records whose final state is Approved — recomputed, not
    /// cached.
    #[test]
    fn total_matches_final_record_states(rewards in rewards(), decisions in decisions()) {
        let mut engine = ReviewEngine::open(records_from(&rewards)).unwrap();
        let mut model: Vec<ReviewState> = vec![ReviewState::Pending; rewards.len()];

        for (index, approve) in decisions {
            let i = index.index(rewards.len());
            let id = format!("s-{i}").into();
            if approve {
                engine.approve(&id).unwrap();
                model[i] = ReviewState::Approved;
            } else {
                engine.reject(&id).unwrap();
                model[i] = ReviewState::Rejected;
            }
        }

        let expected_total: u64 = rewards
            .iter()
            .zip(&model)
            .filter(|(_, state)| state.is_approved())
            .map(|(&reward, _)| reward)
            .sum();
        let expected_count = model.iter().filter(|s| s.is_approved()).count();

        let aggregates = engine.aggregates();
        prop_assert_eq!(aggregates.total_approved_coins, CoinAmount::new(expected_total));
        prop_assert_eq!(aggregates.approved_count, expected_count);
        prop_assert_eq!(aggregates.all_approved, expected_count == rewards.len());
    }

    /// Approving the same record twice yields the same store state as once.
    #[test]
    fn approve_is_idempotent(rewards in rewards(), index in any::<prop::sample::Index>()) {
        let mut engine = ReviewEngine::open(records_from(&rewards)).unwrap();
        let id = format!("s-{}", index.index(rewards.len())).into();

        engine.approve(&id).unwrap();
        let once = engine.snapshot();
        engine.approve(&id).unwrap();
        prop_assert_eq!(engine.snapshot(), once);
    }

    /// finalize fails with NothingApproved exactly when no record is approved.
    #[test]
    fn finalize_iff_any_approved(rewards in rewards(), decisions in decisions()) {
        let mut engine = ReviewEngine::open(records_from(&rewards)).unwrap();
        for (index, approve) in decisions {
            let id = format!("s-{}", index.index(rewards.len())).into();
            if approve {
                engine.approve(&id).unwrap();
            } else {
                engine.reject(&id).unwrap();
            }
        }

        let approved_count = engine.aggregates().approved_count;
        match engine.finalize() {
            Ok(summary) => {
                prop_assert!(approved_count > 0);
                prop_assert_eq!(summary.approved_count, approved_count);
                prop_assert!(summary.has_approved_screenshots);
            }
            Err(ReviewError::NothingApproved) => prop_assert_eq!(approved_count, 0),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}
