//! State enums for account access and submission review.

use serde::{Deserialize, Serialize};

/// Whether a user account may currently use the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessState {
    /// Account in good standing.
    Active,
    /// Banned by staff; sign-in and new submissions are disabled.
    Banned,
}

impl AccessState {
    /// The state a toggle moves this account towards.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Active => Self::Banned,
            Self::Banned => Self::Active,
        }
    }

    pub fn is_banned(&self) -> bool {
        matches!(self, Self::Banned)
    }
}

/// Review status of a single submitted screenshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewState {
    /// Awaiting a staff decision.
    #[default]
    Pending,
    /// Accepted — its reward counts toward the batch total.
    Approved,
    /// Declined — no reward.
    Rejected,
}

impl ReviewState {
    /// Whether a staff decision has been recorded (approved or rejected).
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}
