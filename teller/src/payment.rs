//! Payment types and the validated selection handed from the dashboard to
//! the customer-details step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum accepted account-number length, counted in characters after trimming.
pub const MIN_ACCOUNT_NUMBER_LEN: usize = 5;

/// Transaction category picked on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Utility bill payment.
    Bill,
    /// Payment for an existing customer.
    Registered,
    /// Payment for a first-time customer.
    Unregistered,
}

impl PaymentType {
    /// Dashboard display order.
    pub const ALL: [Self; 3] = [Self::Bill, Self::Registered, Self::Unregistered];

    /// Wire tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bill => "bill",
            Self::Registered => "registered",
            Self::Unregistered => "unregistered",
        }
    }

    /// Whether continuing with this type needs an account number.
    #[must_use]
    pub fn requires_account_number(self) -> bool {
        matches!(self, Self::Bill | Self::Registered)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Bill => "Bill Payment",
            Self::Registered => "Registered Customer",
            Self::Unregistered => "New Customer",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Bill => "Pay utility bills (electricity, water, etc.)",
            Self::Registered => "Process payment for existing customers",
            Self::Unregistered => "Process payment for first-time customers",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown payment-type tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment type: {0}")]
pub struct UnknownPaymentType(pub String);

impl FromStr for PaymentType {
    type Err = UnknownPaymentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bill" => Ok(Self::Bill),
            "registered" => Ok(Self::Registered),
            "unregistered" => Ok(Self::Unregistered),
            other => Err(UnknownPaymentType(other.to_owned())),
        }
    }
}

/// Why a dashboard selection cannot continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Please select a payment type")]
    NoPaymentType,
    #[error("Please enter an account number")]
    MissingAccountNumber,
    #[error("Invalid account number format")]
    InvalidAccountNumber,
}

/// Presence and length check only; there is no account-number grammar.
///
/// # Errors
///
/// Returns [`SelectionError::MissingAccountNumber`] for blank input and
/// [`SelectionError::InvalidAccountNumber`] when shorter than
/// [`MIN_ACCOUNT_NUMBER_LEN`] characters after trimming.
pub fn validate_account_number(raw: &str) -> Result<(), SelectionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SelectionError::MissingAccountNumber);
    }
    if trimmed.chars().count() < MIN_ACCOUNT_NUMBER_LEN {
        return Err(SelectionError::InvalidAccountNumber);
    }
    Ok(())
}

/// Validated dashboard output carried to the next step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSelection {
    pub payment_type: PaymentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    pub teller_id: String,
}

impl PaymentSelection {
    /// Build a selection, validating the account number when the type needs one.
    ///
    /// The account number is stored trimmed, and dropped entirely for
    /// [`PaymentType::Unregistered`].
    ///
    /// # Errors
    ///
    /// Returns the [`validate_account_number`] error for bill and registered
    /// payments with a missing or short account number.
    pub fn new(
        payment_type: PaymentType,
        account_number: &str,
        teller_id: impl Into<String>,
    ) -> Result<Self, SelectionError> {
        let account_number = if payment_type.requires_account_number() {
            validate_account_number(account_number)?;
            Some(account_number.trim().to_owned())
        } else {
            None
        };
        Ok(Self { payment_type, account_number, teller_id: teller_id.into() })
    }
}

#[cfg(test)]
#[path = "payment_test.rs"]
mod tests;
