//! Teller login flow: validate, sign in, record the teller session.
//!
//! Failures are tagged by kind so the login page can tell a rejected
//! password apart from a backend that could not be reached or a session row
//! that could not be written.

use teller::login::GENERIC_LOGIN_FAILURE;
use teller::{LoginFailureKind, LoginRequest, TellerProfile};

use super::supabase::{AuthSession, IdentityProvider, SupabaseError, TellerSessionRecord, TellerSessionStore};
use crate::error::ErrorCode;

/// Provider statuses that mean "these credentials are wrong". Anything else,
/// including 408 and 429, is the provider being unavailable.
const CREDENTIAL_REJECTION_STATUSES: [u16; 3] = [400, 401, 422];

/// What to do when the `teller_sessions` insert fails after a good sign-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionWritePolicy {
    /// Log the failure and let the teller in.
    #[default]
    BestEffort,
    /// Refuse the login with [`LoginError::SessionWriteFailed`].
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("All fields are required")]
    MissingFields,
    /// The identity provider refused the credentials.
    #[error("{0}")]
    CredentialsRejected(String),
    /// The identity provider could not be reached or answered garbage.
    #[error("An error occurred during login")]
    ProviderUnavailable,
    /// Sign-in succeeded but the session row could not be written.
    #[error("Signed in, but the terminal session could not be recorded: {0}")]
    SessionWriteFailed(String),
}

impl LoginError {
    #[must_use]
    pub fn kind(&self) -> LoginFailureKind {
        match self {
            Self::MissingFields => LoginFailureKind::MissingFields,
            Self::CredentialsRejected(_) => LoginFailureKind::CredentialsRejected,
            Self::ProviderUnavailable => LoginFailureKind::ProviderUnavailable,
            Self::SessionWriteFailed(_) => LoginFailureKind::SessionWriteFailed,
        }
    }
}

impl ErrorCode for LoginError {
    fn error_code(&self) -> &'static str {
        match self.kind() {
            LoginFailureKind::MissingFields => "E_MISSING_FIELDS",
            LoginFailureKind::CredentialsRejected => "E_CREDENTIALS_REJECTED",
            LoginFailureKind::ProviderUnavailable => "E_PROVIDER_UNAVAILABLE",
            LoginFailureKind::SessionWriteFailed => "E_SESSION_WRITE_FAILED",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::ProviderUnavailable | Self::SessionWriteFailed(_))
    }
}

/// Successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session: AuthSession,
    pub profile: TellerProfile,
    /// `false` when the session row failed under [`SessionWritePolicy::BestEffort`].
    pub session_recorded: bool,
}

/// Run the full login flow.
///
/// The username is passed to the identity provider as the email credential.
///
/// # Errors
///
/// See [`LoginError`]; nothing is sent to the provider when a field is empty.
pub async fn login(
    identity: &dyn IdentityProvider,
    store: &dyn TellerSessionStore,
    policy: SessionWritePolicy,
    request: &LoginRequest,
) -> Result<LoginOutcome, LoginError> {
    request.validate().map_err(|_| LoginError::MissingFields)?;

    let session = identity
        .sign_in_with_password(&request.username, &request.password)
        .await
        .map_err(|e| sign_in_error(&request.terminal_id, e))?;

    let record = TellerSessionRecord::active(session.user.id.clone(), request.terminal_id.clone());
    let session_recorded = match store.insert_teller_session(&session.access_token, &record).await {
        Ok(()) => true,
        Err(e) => match policy {
            SessionWritePolicy::Required => {
                tracing::error!(error = %e, terminal_id = %request.terminal_id, "teller session insert failed");
                return Err(LoginError::SessionWriteFailed(short_reason(&e)));
            }
            SessionWritePolicy::BestEffort => {
                tracing::warn!(error = %e, terminal_id = %request.terminal_id, "teller session insert failed; continuing");
                false
            }
        },
    };

    let profile = TellerProfile::new(
        session.user.id.clone(),
        session.user.email.clone(),
        request.terminal_id.clone(),
    );
    tracing::info!(
        user_id = %profile.user_id,
        terminal_id = %profile.terminal_id,
        session_recorded,
        "teller signed in"
    );
    Ok(LoginOutcome { session, profile, session_recorded })
}

fn sign_in_error(terminal_id: &str, err: SupabaseError) -> LoginError {
    match err {
        SupabaseError::Rejected { status, message } if CREDENTIAL_REJECTION_STATUSES.contains(&status) => {
            tracing::info!(status, %terminal_id, "sign-in rejected");
            if message.is_empty() {
                LoginError::CredentialsRejected(GENERIC_LOGIN_FAILURE.to_owned())
            } else {
                LoginError::CredentialsRejected(message)
            }
        }
        other => {
            tracing::error!(error = %other, %terminal_id, "sign-in request failed");
            LoginError::ProviderUnavailable
        }
    }
}

fn short_reason(err: &SupabaseError) -> String {
    match err {
        SupabaseError::Rejected { message, .. } if !message.is_empty() => message.clone(),
        SupabaseError::Rejected { status, .. } => format!("status {status}"),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
