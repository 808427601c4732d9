//! Toggle lifecycle state and the intent/outcome payloads around it.

use mintdesk_types::{AccessState, User, UserId};
use serde::{Deserialize, Serialize};

/// Per-user toggle lifecycle.
///
/// `Pending` is transient: it exists only while a backend call is in flight
/// and always resolves to a stable state within that call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleState {
    /// No request in flight; this is the last confirmed (or rolled-back)
    /// access state.
    Stable(AccessState),
    /// A backend call is in flight. `prior` is the pre-toggle state the
    /// rollback restores; `target` is the optimistic value the UI shows.
    Pending {
        prior: AccessState,
        target: AccessState,
    },
}

impl ToggleState {
    /// The access state the presentation layer should render right now —
    /// the optimistic target while a request is in flight.
    pub fn visible(&self) -> AccessState {
        match *self {
            Self::Stable(state) => state,
            Self::Pending { target, .. } => target,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

/// Ephemeral intent: which user, and which state the toggle is driving
/// towards. Consumed by the controller and discarded after resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToggleRequest {
    pub user_id: UserId,
    pub desired_state: AccessState,
}

/// Success notification payload emitted after the backend confirms a toggle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    /// The user with the confirmed access state applied.
    pub user: User,
    pub new_state: AccessState,
}
