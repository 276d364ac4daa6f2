//! Auth-session state for the signed-in teller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the dashboard header to coordinate login
//! redirects and show the teller id.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use teller::TellerProfile;

/// Authentication state tracking the current teller and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub teller: Option<TellerProfile>,
    pub loading: bool,
}

impl AuthState {
    /// State before `/api/auth/me` has answered.
    #[must_use]
    pub fn pending() -> Self {
        Self { teller: None, loading: true }
    }

    #[must_use]
    pub fn resolved(teller: Option<TellerProfile>) -> Self {
        Self { teller, loading: false }
    }

    /// Apply the start-up `/api/auth/me` answer. A login that already
    /// resolved the state wins over a late reply.
    pub fn resolve_initial(&mut self, teller: Option<TellerProfile>) {
        if self.loading {
            *self = Self::resolved(teller);
        }
    }

    /// True once loading finished without a signed-in teller.
    #[must_use]
    pub fn is_signed_out(&self) -> bool {
        !self.loading && self.teller.is_none()
    }

    #[must_use]
    pub fn teller_id(&self) -> Option<&str> {
        self.teller.as_ref().map(|t| t.teller_id.as_str())
    }
}
