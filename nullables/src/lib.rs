//! Nullable infrastructure for deterministic testing.
//!
//! The platform backend is abstracted behind the [`RewardsBackend`] trait;
//! this crate provides a test-friendly implementation that:
//! - Serves scripted users and submissions
//! - Records every call for assertions
//! - Injects failures and holds calls in flight on demand
//! - Never touches the network
//!
//! Usage: swap the HTTP binding for [`NullBackend`] in tests.
//!
//! [`RewardsBackend`]: mintdesk_backend::RewardsBackend

pub mod backend;

pub use backend::{NullBackend, RecordedCall};
