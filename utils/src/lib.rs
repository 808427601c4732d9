//! Shared utilities for the mintdesk staff console.

pub mod logging;
pub mod time;

pub use logging::init_tracing;
pub use time::format_age;
