//! Shared teller workflow model used by both `server` and `client`.
//!
//! This crate owns the request/response shapes exchanged over the JSON API
//! and the validation rules both sides must agree on, so the dashboard and
//! the server never disagree about what a valid payment selection is.

pub mod login;
pub mod payment;
pub mod routes;

pub use login::{ErrorBody, LoginFailureKind, LoginRequest, LoginResponse, TellerProfile, teller_id_for};
pub use payment::{MIN_ACCOUNT_NUMBER_LEN, PaymentSelection, PaymentType, SelectionError, validate_account_number};
