use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_teller() {
    let state = AuthState::default();
    assert!(state.teller.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_is_not_signed_out() {
    assert!(!AuthState::pending().is_signed_out());
}

#[test]
fn resolved_without_teller_is_signed_out() {
    assert!(AuthState::resolved(None).is_signed_out());
}

#[test]
fn resolved_with_teller_exposes_teller_id() {
    let state = AuthState::resolved(Some(TellerProfile::new("abc-def-123", None, "T01")));
    assert!(!state.is_signed_out());
    assert_eq!(state.teller_id(), Some("T-ABCDEF123"));
}

// =============================================================
// resolve_initial
// =============================================================

#[test]
fn resolve_initial_applies_while_pending() {
    let mut state = AuthState::pending();
    state.resolve_initial(None);
    assert!(state.is_signed_out());
}

#[test]
fn late_initial_reply_does_not_undo_login() {
    let teller = TellerProfile::new("3f2a9c1e-77b4-4d2e-9a10-5c6d7e8f9012", None, "T01");
    let mut state = AuthState::resolved(Some(teller.clone()));
    state.resolve_initial(None);
    assert_eq!(state.teller, Some(teller));
    assert!(!state.is_signed_out());
}
