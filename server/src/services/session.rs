//! Server-side teller sessions.
//!
//! ARCHITECTURE
//! ============
//! A successful login creates an entry keyed by an opaque random token that
//! the browser holds in an `HttpOnly` cookie. The entry carries the teller
//! identity and the last dashboard selection, so a page reload on the
//! customer-details step still finds what the teller picked.
//!
//! TRADE-OFFS
//! ==========
//! Entries live in process memory only. A server restart signs every teller
//! out; the durable audit row is the `teller_sessions` insert made at login.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use teller::{PaymentSelection, TellerProfile};
use tokio::sync::RwLock;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// One signed-in teller.
#[derive(Clone)]
pub struct TellerSession {
    pub profile: TellerProfile,
    /// Supabase access token, kept for follow-up calls on the teller's behalf.
    pub access_token: String,
    pub selection: Option<PaymentSelection>,
    pub expires_at: Instant,
}

impl TellerSession {
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

impl std::fmt::Debug for TellerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TellerSession")
            .field("profile", &self.profile)
            .field("access_token", &"<redacted>")
            .field("selection", &self.selection)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Token -> session map shared by all handlers.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, TellerSession>>>,
    ttl: Duration,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    /// Start a session and return its cookie token.
    pub async fn create(&self, profile: TellerProfile, access_token: String) -> String {
        let token = generate_token();
        let session = TellerSession { profile, access_token, selection: None, expires_at: Instant::now() + self.ttl };
        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    /// Look up a live session. Expired sessions are reported as absent.
    pub async fn get(&self, token: &str) -> Option<TellerSession> {
        let sessions = self.sessions.read().await;
        sessions
            .get(token)
            .filter(|s| !s.is_expired(Instant::now()))
            .cloned()
    }

    /// Replace the stored dashboard selection. Returns `false` if the session is gone.
    pub async fn set_selection(&self, token: &str, selection: PaymentSelection) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(token) {
            Some(session) if !session.is_expired(Instant::now()) => {
                session.selection = Some(selection);
                true
            }
            _ => false,
        }
    }

    /// The stored dashboard selection for a live session.
    pub async fn selection(&self, token: &str) -> Option<PaymentSelection> {
        self.get(token).await.and_then(|s| s.selection)
    }

    /// End a session. Returns whether one existed.
    pub async fn remove(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Drop expired sessions, returning how many were removed.
    pub async fn prune_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Periodically prune expired sessions.
pub fn spawn_prune_task(registry: SessionRegistry, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let removed = registry.prune_expired().await;
            if removed > 0 {
                let remaining = registry.session_count().await;
                tracing::debug!(removed, remaining, "pruned expired teller sessions");
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
