//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the JSON calls to the server; wire types live in the
//! shared `teller` crate.

pub mod api;
