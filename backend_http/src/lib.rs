//! HTTP binding for the rewards platform admin API.
//!
//! [`ApiClient`] wraps `reqwest::Client` with the API base URL and provides
//! a typed method per endpoint the console consumes. Every endpoint answers
//! with the same JSON envelope; a body that parses cleanly but carries
//! `success: false` is a failure, never a success.

use async_trait::async_trait;
use mintdesk_backend::{BackendError, RewardsBackend};
use mintdesk_types::{CoinAmount, SubmissionRecord, User, UserId};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Default per-request timeout. Expiry counts as a backend failure.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the platform's admin REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Response envelope every admin endpoint uses.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

impl ApiClient {
    /// Create a client targeting the given base URL (e.g. `https://api.example.com`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| BackendError::Unavailable(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(format!("request failed: {e}")))?;
        Self::read_envelope(response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, BackendError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(format!("request failed: {e}")))?;
        Self::read_envelope(response).await
    }

    /// POST where the envelope carries no payload; only the success flag matters.
    async fn post_ack(&self, path: &str) -> Result<(), BackendError> {
        let response = self
            .http
            .post(self.url(path))
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(format!("request failed: {e}")))?;
        let envelope: Envelope<serde_json::Value> = Self::parse_body(response).await?;
        check_success(&envelope)
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let envelope: Envelope<T> = Self::parse_body(response).await?;
        unwrap_envelope(envelope)
    }

    async fn parse_body<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, BackendError> {
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Unavailable(format!(
                "backend returned HTTP {status}"
            )));
        }
        response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("invalid JSON response: {e}")))
    }
}

fn check_success<T>(envelope: &Envelope<T>) -> Result<(), BackendError> {
    if envelope.success {
        Ok(())
    } else {
        Err(BackendError::Rejected(
            envelope
                .message
                .clone()
                .unwrap_or_else(|| "request failed".into()),
        ))
    }
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, BackendError> {
    check_success(&envelope)?;
    envelope
        .data
        .ok_or_else(|| BackendError::InvalidResponse("missing data field".into()))
}

#[async_trait]
impl RewardsBackend for ApiClient {
    async fn fetch_user(&self, id: &UserId) -> Result<User, BackendError> {
        self.get(&format!("api/users/{id}")).await
    }

    async fn fetch_submissions(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SubmissionRecord>, BackendError> {
        self.get(&format!("api/users/{user_id}/screenshots")).await
    }

    async fn set_banned(&self, user_id: &UserId) -> Result<(), BackendError> {
        self.post_ack(&format!("api/users/{user_id}/ban")).await
    }

    async fn set_unbanned(&self, user_id: &UserId) -> Result<(), BackendError> {
        self.post_ack(&format!("api/users/{user_id}/unban")).await
    }

    async fn credit_balance(
        &self,
        user_id: &UserId,
        amount: CoinAmount,
    ) -> Result<User, BackendError> {
        self.post(
            &format!("api/users/{user_id}/credit"),
            &serde_json::json!({ "amount": amount.coins() }),
        )
        .await
    }
}
