//! User account as seen by the staff console.

use crate::amount::CoinAmount;
use crate::id::UserId;
use crate::state::AccessState;
use serde::{Deserialize, Serialize};

/// A platform user under review or moderation.
///
/// `access_state` is written only by the moderation controller and `balance`
/// only by a successful finalize-and-credit. Everything else is
/// backend-authoritative data the console displays as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub display_name: String,
    pub email: String,
    pub balance: CoinAmount,
    pub access_state: AccessState,
}

impl User {
    pub fn is_banned(&self) -> bool {
        self.access_state.is_banned()
    }
}
