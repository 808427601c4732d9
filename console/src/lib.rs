//! Workflow orchestration for the mintdesk staff console.
//!
//! This crate owns the user-facing flow: select a user, open a review
//! session over their submitted screenshots, approve or reject each one,
//! finalize the batch, credit the approved total, and independently toggle
//! the user's access. Every operation exposed to the presentation layer
//! returns a result value rather than panicking across the UI boundary.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod session;

pub use config::ConsoleConfig;
pub use error::ConsoleError;
pub use orchestrator::{CreditStatus, FinalizeReport, WorkflowOrchestrator};
pub use session::SessionContext;
