//! The toggle controller — optimistic update, backend reconciliation,
//! rollback on failure.

use crate::error::ToggleError;
use crate::state::{AccessToggleRequest, ToggleOutcome, ToggleState};
use mintdesk_backend::RewardsBackend;
use mintdesk_types::{AccessState, User, UserId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Manages the two-state access lifecycle for every user the console has
/// touched.
///
/// Toggles for different users are independent and may run concurrently; a
/// second toggle for the same user while one is in flight is rejected with
/// `ToggleInProgress` and does not disturb the in-flight request.
pub struct AccessToggleController {
    backend: Arc<dyn RewardsBackend>,
    states: Mutex<HashMap<UserId, ToggleState>>,
}

impl AccessToggleController {
    pub fn new(backend: Arc<dyn RewardsBackend>) -> Self {
        Self {
            backend,
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Flip the user's access state.
    ///
    /// The in-memory value flips immediately (optimistic), then the matching
    /// backend call confirms it. On success the optimistic value is
    /// committed and a [`ToggleOutcome`] is returned for the success banner.
    /// On failure the state reverts to the pre-toggle value recorded when
    /// the request began, and the failure reason is surfaced.
    pub async fn toggle(&self, user: &User) -> Result<ToggleOutcome, ToggleError> {
        if user.id.is_empty() {
            return Err(ToggleError::MissingUserId);
        }

        let (request, prior) = self.begin(user)?;
        let result = match request.desired_state {
            AccessState::Banned => self.backend.set_banned(&request.user_id).await,
            AccessState::Active => self.backend.set_unbanned(&request.user_id).await,
        };

        match result {
            Ok(()) => {
                self.resolve(&request.user_id, request.desired_state);
                tracing::info!(user = %request.user_id, state = ?request.desired_state, "access toggle confirmed");
                Ok(ToggleOutcome {
                    user: User {
                        access_state: request.desired_state,
                        ..user.clone()
                    },
                    new_state: request.desired_state,
                })
            }
            Err(e) => {
                self.resolve(&request.user_id, prior);
                tracing::warn!(user = %request.user_id, error = %e, "access toggle failed, rolled back");
                Err(e.into())
            }
        }
    }

    /// The access state the presentation layer should render for this user:
    /// the optimistic target while a toggle is in flight, the last stable
    /// value otherwise. `None` for users this controller has never touched.
    pub fn access_state(&self, user_id: &UserId) -> Option<AccessState> {
        self.states
            .lock()
            .unwrap()
            .get(user_id)
            .map(ToggleState::visible)
    }

    /// Whether a toggle is currently in flight for this user.
    pub fn in_flight(&self, user_id: &UserId) -> bool {
        self.states
            .lock()
            .unwrap()
            .get(user_id)
            .is_some_and(ToggleState::is_pending)
    }

    /// Validate and enter `Pending`, returning the intent to dispatch along
    /// with the pre-image the rollback restores.
    ///
    /// The lock is scoped to this call; it is never held across the backend
    /// await.
    fn begin(&self, user: &User) -> Result<(AccessToggleRequest, AccessState), ToggleError> {
        let mut states = self.states.lock().unwrap();
        let current = match states.get(&user.id) {
            Some(ToggleState::Pending { .. }) => {
                return Err(ToggleError::ToggleInProgress(user.id.clone()));
            }
            Some(ToggleState::Stable(state)) => *state,
            None => user.access_state,
        };
        let target = current.toggled();
        states.insert(
            user.id.clone(),
            ToggleState::Pending {
                prior: current,
                target,
            },
        );
        Ok((
            AccessToggleRequest {
                user_id: user.id.clone(),
                desired_state: target,
            },
            current,
        ))
    }

    fn resolve(&self, user_id: &UserId, state: AccessState) {
        self.states
            .lock()
            .unwrap()
            .insert(user_id.clone(), ToggleState::Stable(state));
    }
}
