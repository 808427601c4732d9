//! Fundamental types for the mintdesk staff console.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identifiers, coin amounts, timestamps, and the user and
//! submission records the review workflow operates on.

pub mod amount;
pub mod id;
pub mod state;
pub mod submission;
pub mod time;
pub mod user;

pub use amount::CoinAmount;
pub use id::{SubmissionId, UserId};
pub use state::{AccessState, ReviewState};
pub use submission::SubmissionRecord;
pub use time::Timestamp;
pub use user::User;
