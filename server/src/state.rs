//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the external collaborators (identity provider and session-row
//! store) as trait objects plus the in-memory teller-session registry.

use std::sync::Arc;

use crate::services::login::SessionWritePolicy;
use crate::services::session::SessionRegistry;
use crate::services::supabase::{IdentityProvider, TellerSessionStore};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub session_store: Arc<dyn TellerSessionStore>,
    pub sessions: SessionRegistry,
    pub session_write: SessionWritePolicy,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        session_store: Arc<dyn TellerSessionStore>,
        sessions: SessionRegistry,
        session_write: SessionWritePolicy,
        cookie_secure: bool,
    ) -> Self {
        Self { identity, session_store, sessions, session_write, cookie_secure }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
