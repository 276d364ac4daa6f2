//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is app-wide and provided via context; `payment` is the
//! dashboard's local form model. Both are plain structs so their rules can
//! be tested without a browser.

pub mod auth;
pub mod payment;
