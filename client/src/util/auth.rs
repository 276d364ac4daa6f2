//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Teller-only pages apply identical unauthenticated redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/login` whenever auth has loaded and no teller is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.get().is_signed_out() {
            navigate(teller::routes::LOGIN, NavigateOptions::default());
        }
    });
}
