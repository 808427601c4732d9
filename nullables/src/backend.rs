//! Nullable backend — scripted responses instead of HTTP calls.

use async_trait::async_trait;
use mintdesk_backend::{BackendError, RewardsBackend};
use mintdesk_types::{CoinAmount, SubmissionRecord, User, UserId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// A recorded backend call, for test assertions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedCall {
    FetchUser(UserId),
    FetchSubmissions(UserId),
    SetBanned(UserId),
    SetUnbanned(UserId),
    CreditBalance(UserId, CoinAmount),
}

/// A test backend that serves scripted data and records every call.
///
/// Failure injection is per operation family. Access-state calls can
/// additionally be held in flight and released later, which is how the
/// toggle mutual-exclusion tests park one request mid-call.
#[derive(Default)]
pub struct NullBackend {
    users: Mutex<HashMap<UserId, User>>,
    submissions: Mutex<HashMap<UserId, Vec<SubmissionRecord>>>,
    calls: Mutex<Vec<RecordedCall>>,
    fail_fetches: AtomicBool,
    fail_access: AtomicBool,
    fail_credits: AtomicBool,
    hold_access: AtomicBool,
    gate: Notify,
}

impl NullBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a user the backend knows about.
    pub fn insert_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id.clone(), user);
    }

    /// Script the submissions the backend returns for a user.
    pub fn insert_submissions(&self, user_id: UserId, records: Vec<SubmissionRecord>) {
        self.submissions.lock().unwrap().insert(user_id, records);
    }

    /// Make fetch calls fail until cleared.
    pub fn fail_fetch_calls(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    /// Make ban/unban calls fail until cleared.
    pub fn fail_access_calls(&self, fail: bool) {
        self.fail_access.store(fail, Ordering::SeqCst);
    }

    /// Make credit calls fail until cleared.
    pub fn fail_credit_calls(&self, fail: bool) {
        self.fail_credits.store(fail, Ordering::SeqCst);
    }

    /// Park subsequent ban/unban calls until [`release_access_calls`] runs.
    ///
    /// [`release_access_calls`]: NullBackend::release_access_calls
    pub fn hold_access_calls(&self) {
        self.hold_access.store(true, Ordering::SeqCst);
    }

    /// Release every parked ban/unban call.
    pub fn release_access_calls(&self) {
        self.hold_access.store(false, Ordering::SeqCst);
        self.gate.notify_waiters();
    }

    /// All calls recorded so far (for assertions).
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The current scripted state of a user, if known.
    pub fn user(&self, id: &UserId) -> Option<User> {
        self.users.lock().unwrap().get(id).cloned()
    }

    /// Clear recorded calls and failure flags; scripted data stays.
    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
        self.fail_fetches.store(false, Ordering::SeqCst);
        self.fail_access.store(false, Ordering::SeqCst);
        self.fail_credits.store(false, Ordering::SeqCst);
        self.release_access_calls();
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn wait_if_held(&self) {
        while self.hold_access.load(Ordering::SeqCst) {
            self.gate.notified().await;
        }
    }

    fn set_access(&self, user_id: &UserId, banned: bool) -> Result<(), BackendError> {
        if self.fail_access.load(Ordering::SeqCst) {
            return Err(BackendError::Rejected("scripted moderation failure".into()));
        }
        if let Some(user) = self.users.lock().unwrap().get_mut(user_id) {
            user.access_state = if banned {
                mintdesk_types::AccessState::Banned
            } else {
                mintdesk_types::AccessState::Active
            };
        }
        Ok(())
    }
}

#[async_trait]
impl RewardsBackend for NullBackend {
    async fn fetch_user(&self, id: &UserId) -> Result<User, BackendError> {
        self.record(RecordedCall::FetchUser(id.clone()));
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("scripted fetch failure".into()));
        }
        self.users
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| BackendError::Rejected(format!("no such user: {id}")))
    }

    async fn fetch_submissions(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SubmissionRecord>, BackendError> {
        self.record(RecordedCall::FetchSubmissions(user_id.clone()));
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("scripted fetch failure".into()));
        }
        Ok(self
            .submissions
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_banned(&self, user_id: &UserId) -> Result<(), BackendError> {
        self.record(RecordedCall::SetBanned(user_id.clone()));
        self.wait_if_held().await;
        self.set_access(user_id, true)
    }

    async fn set_unbanned(&self, user_id: &UserId) -> Result<(), BackendError> {
        self.record(RecordedCall::SetUnbanned(user_id.clone()));
        self.wait_if_held().await;
        self.set_access(user_id, false)
    }

    async fn credit_balance(
        &self,
        user_id: &UserId,
        amount: CoinAmount,
    ) -> Result<User, BackendError> {
        self.record(RecordedCall::CreditBalance(user_id.clone(), amount));
        if self.fail_credits.load(Ordering::SeqCst) {
            return Err(BackendError::Rejected("scripted credit failure".into()));
        }
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| BackendError::Rejected(format!("no such user: {user_id}")))?;
        user.balance = user.balance.saturating_add(amount);
        Ok(user.clone())
    }
}
