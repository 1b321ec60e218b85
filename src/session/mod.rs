//! Per-run state shared between test-script steps.
//!
//! Holds the current user, the auth token, a request counter, and the
//! responses observed so far. Each run owns its own context, so independent
//! runs never see each other's state; share one across tasks behind a lock.

use serde_json::Value;

use crate::analysis::{self, PerformanceSummary};
use crate::error::SessionError;
use crate::response::ResponseRecord;
use crate::support::{auth_headers, generate_uuid};

/// Stand-in logged instead of the token itself.
const MASKED_TOKEN: &str = "***";

#[derive(Debug)]
pub struct SessionContext {
    session_id: String,
    current_user: Option<Value>,
    auth_token: Option<String>,
    request_count: u64,
    responses: Vec<ResponseRecord>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        let session = Self {
            session_id: generate_uuid(),
            current_user: None,
            auth_token: None,
            request_count: 0,
            responses: Vec::new(),
        };
        tracing::debug!(session_id = %session.session_id, "Session initialized");
        session
    }

    /// Drops all state and starts over with a fresh session id.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn set_current_user(&mut self, user: Value) {
        tracing::info!(user = %user, "Current user set");
        self.current_user = Some(user);
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&Value> {
        self.current_user.as_ref()
    }

    pub fn set_auth_token(&mut self, token: Option<String>) {
        let shown = if token.is_some() { MASKED_TOKEN } else { "null" };
        tracing::info!(token = shown, "Auth token set");
        self.auth_token = token;
    }

    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Bearer headers for the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AuthTokenMissing`] when no token is set or the
    /// token is empty.
    pub fn auth_headers(&self) -> Result<Vec<(String, String)>, SessionError> {
        self.auth_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .map(|token| auth_headers(token, None))
            .ok_or(SessionError::AuthTokenMissing)
    }

    /// Counts one more request and returns the new total.
    pub const fn increment_request_count(&mut self) -> u64 {
        self.request_count = self.request_count.saturating_add(1);
        self.request_count
    }

    #[must_use]
    pub const fn request_count(&self) -> u64 {
        self.request_count
    }

    pub fn record_response(&mut self, response: ResponseRecord) {
        self.responses.push(response);
    }

    #[must_use]
    pub fn responses(&self) -> &[ResponseRecord] {
        &self.responses
    }

    /// Latency summary over every recorded response.
    #[must_use]
    pub fn performance_summary(&self) -> Option<PerformanceSummary> {
        analysis::analyze(&self.responses)
    }
}
