//! Conditional card-details group
//!
//! The credit-card fields are only real when the credit-card payment method
//! is selected. This controller runs on every payment-method change: it
//! toggles the group's visibility and required flags, and scrubs any stale
//! annotations the moment the group is hidden, so a hidden field never shows
//! an error.

use crate::field::CARD_GROUP;
use crate::form::OrderForm;

/// Radio value that reveals the card-details group.
pub const CREDIT_CARD: &str = "Credit Card";

/// Apply the conditional-group rules for the form's current payment
/// selection.
///
/// [`OrderForm::set_value`] calls this automatically when the payment-method
/// field changes; it is exposed for callers that replay form state wholesale.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formwell::{conditional, FieldId, FormVariant, OrderForm};
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
/// let mut form = OrderForm::new(FormVariant::Compact, today);
///
/// form.set_value(FieldId::PaymentMethod, conditional::CREDIT_CARD);
/// assert!(form.card_details_visible());
/// assert!(form.is_required(FieldId::CardNumber));
///
/// form.set_value(FieldId::PaymentMethod, "UPI");
/// assert!(!form.card_details_visible());
/// assert!(!form.is_required(FieldId::CardNumber));
/// ```
pub fn payment_method_changed(form: &mut OrderForm) {
    let credit = form.selected_payment() == Some(CREDIT_CARD);
    form.set_card_details_visible(credit);
    for field in CARD_GROUP {
        form.set_required(field, credit);
        if !credit {
            form.clear_annotation(field);
        }
    }
}
