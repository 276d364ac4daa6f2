//! Dashboard payment-type form.
//!
//! Four states: nothing selected, bill, registered, unregistered. Each card
//! click replaces the selection and clears any displayed error. The account
//! number survives switching types so a teller who picks the wrong card
//! does not lose what they typed.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use teller::{PaymentSelection, PaymentType, SelectionError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub selected: Option<PaymentType>,
    pub account_number: String,
    pub error: Option<String>,
}

impl PaymentForm {
    /// Select a payment type. Selecting the current type again is a no-op
    /// apart from clearing the error.
    pub fn select(&mut self, kind: PaymentType) {
        self.selected = Some(kind);
        self.error = None;
    }

    pub fn set_account_number(&mut self, value: String) {
        self.account_number = value;
    }

    #[must_use]
    pub fn is_selected(&self, kind: PaymentType) -> bool {
        self.selected == Some(kind)
    }

    /// The account-number input is only rendered for bill and registered.
    #[must_use]
    pub fn shows_account_number(&self) -> bool {
        self.selected.is_some_and(PaymentType::requires_account_number)
    }

    /// The continue button is only rendered once a type is chosen.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.selected.is_some()
    }

    /// Validate and build the selection for the next step.
    ///
    /// On failure the message is kept in `error` for display.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] when no type is selected or the account
    /// number is missing or too short for a type that needs one.
    pub fn submit(&mut self, teller_id: &str) -> Result<PaymentSelection, SelectionError> {
        let result = self
            .selected
            .ok_or(SelectionError::NoPaymentType)
            .and_then(|kind| PaymentSelection::new(kind, &self.account_number, teller_id));
        self.error = result.as_ref().err().map(ToString::to_string);
        result
    }
}
