//! Login request/response shapes and the teller identity derived from a
//! successful sign-in.

use serde::{Deserialize, Serialize};

use crate::routes;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const GENERIC_LOGIN_FAILURE: &str = "An error occurred during login";

/// Status written to every new teller-session record.
pub const SESSION_STATUS_ACTIVE: &str = "active";

const TELLER_ID_PREFIX: &str = "T-";
const TELLER_ID_LEN: usize = 9;

/// Credentials submitted from the login form.
///
/// Missing JSON fields deserialize as empty strings so they fail
/// [`LoginRequest::validate`] instead of the JSON extractor.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub terminal_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// All three fields must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ALL_FIELDS_REQUIRED`] when any field is empty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.terminal_id.is_empty() || self.username.is_empty() || self.password.is_empty() {
            return Err(ALL_FIELDS_REQUIRED);
        }
        Ok(())
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("terminal_id", &self.terminal_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The authenticated teller as shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TellerProfile {
    pub user_id: String,
    pub email: Option<String>,
    pub terminal_id: String,
    pub teller_id: String,
}

impl TellerProfile {
    #[must_use]
    pub fn new(user_id: impl Into<String>, email: Option<String>, terminal_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let teller_id = teller_id_for(&user_id);
        Self { user_id, email, terminal_id: terminal_id.into(), teller_id }
    }
}

/// Display teller id derived from the authenticated user id.
///
/// Takes the first nine alphanumeric characters, uppercased, behind a `T-`
/// prefix. The same user always gets the same id.
#[must_use]
pub fn teller_id_for(user_id: &str) -> String {
    let suffix: String = user_id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(TELLER_ID_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    format!("{TELLER_ID_PREFIX}{suffix}")
}

/// Successful login: where to go next and who is signed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub redirect: String,
    pub teller: TellerProfile,
}

impl LoginResponse {
    #[must_use]
    pub fn to_dashboard(teller: TellerProfile) -> Self {
        Self { redirect: routes::DASHBOARD.to_owned(), teller }
    }
}

/// Distinguishes why a login attempt failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginFailureKind {
    MissingFields,
    CredentialsRejected,
    ProviderUnavailable,
    SessionWriteFailed,
}

/// JSON error envelope returned by every API endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub retryable: bool,
}

impl ErrorBody {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>, retryable: bool) -> Self {
        Self { code: code.into(), message: message.into(), retryable }
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
