//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its local form state and route-scoped orchestration.
//! Cross-page data travels through the server session, never through
//! in-memory navigation state.

pub mod customer_details;
pub mod dashboard;
pub mod home;
pub mod login;
