//! The form validator
//!
//! One synchronous pass over the variant's full field list at submission
//! time. Every field is checked regardless of earlier failures, each failure
//! is annotated onto the form, and the pass starts by wiping all previous
//! annotations so nothing stale survives. The card group is only checked
//! while the credit-card payment method is selected.

use chrono::{Local, NaiveDate};

use crate::conditional::CREDIT_CARD;
use crate::field::FieldId;
use crate::form::OrderForm;
use crate::predicate;
use crate::verdict::Verdict;

/// Validates a whole [`OrderForm`] in one pass.
///
/// The validator carries the date used for the expiry-month rule; the
/// delivery-date floor lives on the form itself.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formwell::{FieldId, FormValidator, FormVariant, OrderForm};
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
/// let mut form = OrderForm::new(FormVariant::Compact, today);
/// let validator = FormValidator::with_today(today);
///
/// let verdict = validator.validate(&mut form);
/// assert!(!verdict.is_valid());
/// assert_eq!(
///     form.annotation(FieldId::FullName),
///     Some("Full Name is required.")
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FormValidator {
    today: NaiveDate,
}

impl FormValidator {
    /// A validator pinned to the local calendar date.
    pub fn new() -> Self {
        FormValidator {
            today: Local::now().date_naive(),
        }
    }

    /// A validator pinned to an explicit date. Tests use this to hold the
    /// expiry rule still.
    pub fn with_today(today: NaiveDate) -> Self {
        FormValidator { today }
    }

    /// The date the expiry-month rule compares against.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Check every field on the form, annotate the failures, and return the
    /// accumulated verdict.
    ///
    /// All previous annotations are cleared first, so after this returns a
    /// field is annotated iff its predicate failed on this pass.
    pub fn validate(&self, form: &mut OrderForm) -> Verdict {
        form.clear_all_annotations();

        let mut verdict = Verdict::new();
        for &field in form.variant().fields() {
            if let Some(message) = self.check_field(field, form) {
                tracing::debug!(field = %field, message = %message, "field validation failed");
                form.annotate(field, message.clone());
                verdict.record(field, message);
            }
        }
        verdict
    }

    /// Evaluate one field's predicate. `None` means the field passed (or,
    /// for card fields without a credit-card selection, was skipped).
    fn check_field(&self, field: FieldId, form: &OrderForm) -> Option<String> {
        if field.is_card_field() && form.selected_payment() != Some(CREDIT_CARD) {
            return None;
        }

        let value = form.text(field);
        let message: Option<&str> = match field {
            FieldId::FullName => {
                if !predicate::trimmed_not_empty(value) {
                    Some("Full Name is required.")
                } else if !predicate::full_name_chars(value) {
                    Some(
                        "Full Name can only contain letters, spaces, hyphens, \
                         apostrophes, and dots.",
                    )
                } else {
                    None
                }
            }
            FieldId::Email => {
                if !predicate::trimmed_not_empty(value) {
                    Some("Email is required.")
                } else if !predicate::email_shape(value) {
                    Some("Please enter a valid email address.")
                } else {
                    None
                }
            }
            FieldId::Phone => {
                if !predicate::trimmed_not_empty(value) {
                    Some("Phone Number is required.")
                } else if !predicate::exact_digits(value, 10) {
                    Some("Phone Number must be 10 digits.")
                } else {
                    None
                }
            }
            FieldId::Gender => value.is_empty().then_some("Please select your Gender."),
            FieldId::PlotNumber => {
                if !predicate::trimmed_not_empty(value) {
                    Some("Plot/House Number is required.")
                } else if !predicate::plot_number_chars(value) {
                    Some("Invalid characters in Plot/House Number (e.g., A-Z, 0-9, /, -, comma).")
                } else {
                    None
                }
            }
            FieldId::StreetName => {
                if !predicate::trimmed_not_empty(value) {
                    Some("Street Name is required.")
                } else if !predicate::street_name_chars(value) {
                    Some(
                        "Invalid characters in Street Name (e.g., A-Z, 0-9, space, \
                         comma, dot, hyphen, apostrophe).",
                    )
                } else {
                    None
                }
            }
            FieldId::District => {
                if !predicate::trimmed_not_empty(value) {
                    Some("District is required.")
                } else if !predicate::region_chars(value) {
                    Some("Invalid characters in District (e.g., A-Z, space, dot, hyphen).")
                } else {
                    None
                }
            }
            FieldId::State => {
                if !predicate::trimmed_not_empty(value) {
                    Some("State is required.")
                } else if !predicate::region_chars(value) {
                    Some("Invalid characters in State (e.g., A-Z, space, dot, hyphen).")
                } else {
                    None
                }
            }
            FieldId::DeliveryAddress => {
                if !predicate::trimmed_not_empty(value) {
                    Some("Delivery Address is required.")
                } else if !predicate::address_min_len(value, 15) {
                    Some("Please enter a complete address (at least 15 characters).")
                } else {
                    None
                }
            }
            FieldId::Pincode => (!form.native_validity(field)).then_some("Pincode must be 6 digits."),
            FieldId::CarMake => {
                (!predicate::trimmed_not_empty(value)).then_some("Car Make is required.")
            }
            FieldId::AccessoryType => {
                (!form.native_validity(field)).then_some("Please select an Accessory Type.")
            }
            FieldId::Accessories => form
                .value(field)
                .entries()
                .is_empty()
                .then_some("Please select at least one accessory."),
            FieldId::Quantity => {
                if form.native_validity(field) {
                    None
                } else {
                    let bounds = form.variant().quantity_bounds();
                    return Some(format!(
                        "Quantity must be between {} and {}.",
                        bounds.start(),
                        bounds.end()
                    ));
                }
            }
            FieldId::DeliveryDate => (!form.native_validity(field))
                .then_some("Please select a valid future delivery date."),
            FieldId::PaymentMethod => form
                .selected_payment()
                .is_none()
                .then_some("Please select a payment method."),
            FieldId::CardNumber => {
                (!form.native_validity(field)).then_some("Card Number must be 13-16 digits.")
            }
            FieldId::ExpiryDate => {
                if !form.native_validity(field) {
                    Some("Please enter a valid expiry month/year.")
                } else {
                    match predicate::parse_year_month(value) {
                        Some(month) if predicate::month_is_past(month, self.today) => {
                            Some("Expiry date cannot be in the past.")
                        }
                        Some(_) => None,
                        // Unparseable values already failed native validity.
                        None => Some("Please enter a valid expiry month/year."),
                    }
                }
            }
            FieldId::Cvv => (!form.native_validity(field)).then_some("CVV must be 3 or 4 digits."),
        };
        message.map(str::to_string)
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        FormValidator::new()
    }
}
