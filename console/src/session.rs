//! Explicit staff session context.
//!
//! Replaces ambient page-level storage: the context is created on login,
//! injected into the orchestrator, and cleared on logout or expiry. After
//! clearing, workflow operations refuse to run.

use mintdesk_types::Timestamp;

/// The authenticated staff session driving the console.
#[derive(Clone, Debug)]
pub struct SessionContext {
    staff_user: String,
    auth_token: String,
    started_at: Timestamp,
    active: bool,
}

impl SessionContext {
    /// Create a context for a freshly signed-in staff member.
    pub fn login(
        staff_user: impl Into<String>,
        auth_token: impl Into<String>,
        started_at: Timestamp,
    ) -> Self {
        Self {
            staff_user: staff_user.into(),
            auth_token: auth_token.into(),
            started_at,
            active: true,
        }
    }

    pub fn staff_user(&self) -> &str {
        &self.staff_user
    }

    /// The bearer token, while the session is active.
    pub fn auth_token(&self) -> Option<&str> {
        self.active.then_some(self.auth_token.as_str())
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Clear the session on logout or expiry. The token is dropped; the
    /// context cannot be reactivated.
    pub fn clear(&mut self) {
        self.auth_token.clear();
        self.active = false;
    }
}
