//! Account access moderation — the ban/unban toggle workflow.
//!
//! Toggling is optimistic: the in-memory state flips immediately, the
//! backend call confirms it, and a failure rolls the state back to the
//! pre-toggle value computed from the pre-image. The presentation layer
//! never displays a state the backend did not confirm or a rollback did not
//! restore.

pub mod controller;
pub mod error;
pub mod state;

pub use controller::AccessToggleController;
pub use error::ToggleError;
pub use state::{AccessToggleRequest, ToggleOutcome, ToggleState};
