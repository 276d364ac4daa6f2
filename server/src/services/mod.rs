//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and calls to external collaborators
//! so route handlers can stay focused on protocol translation and cookies.

pub mod login;
pub mod session;
pub mod supabase;
