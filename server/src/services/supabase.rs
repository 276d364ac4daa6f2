//! Supabase Auth + PostgREST client.
//!
//! DESIGN
//! ======
//! The login flow only needs two calls: a password grant against GoTrue and
//! a single insert into `teller_sessions`. Both sit behind small traits so
//! the login service and route handlers can be exercised with stubs.
//! Response parsing is split into pure functions for testability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::SupabaseConfig;

const TELLER_SESSIONS_TABLE: &str = "teller_sessions";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupabaseError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("supabase request failed: {0}")]
    Request(String),

    /// Supabase answered with a non-success status.
    #[error("supabase rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// A success response did not have the expected shape.
    #[error("supabase response parse failed: {0}")]
    Parse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// TYPES
// =============================================================================

/// Authenticated user returned by the password grant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Result of a successful sign-in.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("access_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Row written to `teller_sessions` after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TellerSessionRecord {
    pub user_id: String,
    pub terminal_id: String,
    pub status: String,
}

impl TellerSessionRecord {
    #[must_use]
    pub fn active(user_id: impl Into<String>, terminal_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            terminal_id: terminal_id.into(),
            status: teller::login::SESSION_STATUS_ACTIVE.to_owned(),
        }
    }
}

// =============================================================================
// TRAITS
// =============================================================================

/// Password-based identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, SupabaseError>;

    /// Revoke the provider session behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError>;
}

/// Append-only store for teller-session rows.
#[async_trait]
pub trait TellerSessionStore: Send + Sync {
    async fn insert_teller_session(
        &self,
        access_token: &str,
        record: &TellerSessionRecord,
    ) -> Result<(), SupabaseError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &SupabaseConfig) -> Result<Self, SupabaseError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request)
            .connect_timeout(config.timeouts.connect)
            .build()
            .map_err(|e| SupabaseError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.url.clone(), anon_key: config.anon_key.clone() })
    }

    fn token_url(&self) -> String {
        token_url(&self.base_url)
    }

    fn logout_url(&self) -> String {
        format!("{}/auth/v1/logout", self.base_url)
    }

    fn table_url(&self, table: &str) -> String {
        table_url(&self.base_url, table)
    }
}

#[async_trait]
impl IdentityProvider for SupabaseClient {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, SupabaseError> {
        let response = self
            .http
            .post(self.token_url())
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| SupabaseError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| SupabaseError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(rejected(status, &text));
        }
        parse_auth_session(&text)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
        let response = self
            .http
            .post(self.logout_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| SupabaseError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(rejected(status, &text))
    }
}

#[async_trait]
impl TellerSessionStore for SupabaseClient {
    async fn insert_teller_session(
        &self,
        access_token: &str,
        record: &TellerSessionRecord,
    ) -> Result<(), SupabaseError> {
        let response = self
            .http
            .post(self.table_url(TELLER_SESSIONS_TABLE))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await
            .map_err(|e| SupabaseError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(rejected(status, &text))
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

pub(crate) fn token_url(base_url: &str) -> String {
    format!("{}/auth/v1/token?grant_type=password", base_url.trim_end_matches('/'))
}

pub(crate) fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{table}", base_url.trim_end_matches('/'))
}

pub(crate) fn parse_auth_session(body: &str) -> Result<AuthSession, SupabaseError> {
    serde_json::from_str::<AuthSession>(body).map_err(|e| SupabaseError::Parse(e.to_string()))
}

fn rejected(status: u16, body: &str) -> SupabaseError {
    SupabaseError::Rejected { status, message: error_message(body).unwrap_or_default() }
}

/// Pull a human-readable message out of a GoTrue or PostgREST error body.
///
/// GoTrue has used both `msg` and `error_description` across versions;
/// PostgREST uses `message`.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "error_description", "message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;
