//! # Formwell
//!
//! Order-form validation with error accumulation and a conditional field
//! group.
//!
//! ## Philosophy
//!
//! **Formwell** keeps the rules pure and the form imperative:
//! - **Predicates** are pure functions over strings, testable in isolation
//! - **The form** is a typed in-memory document holding values, native
//!   constraints, and error annotations
//!
//! A validation pass never short-circuits: every field is checked, every
//! failure annotated, and stale annotations from earlier passes are always
//! wiped first. The credit-card details group is conditional: it is only
//! visible, required, and validated while the credit-card payment method is
//! selected.
//!
//! ## Quick Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use formwell::{FieldId, FormValidator, FormVariant, OrderForm};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
//! let mut form = OrderForm::new(FormVariant::Compact, today);
//!
//! form.set_value(FieldId::FullName, "Jane O'Neil");
//! form.set_value(FieldId::Email, "jane@example.com");
//! form.set_value(FieldId::Phone, "9876543210");
//! form.set_value(FieldId::DeliveryAddress, "221B Baker Street, London");
//! form.set_value(FieldId::Pincode, "560001");
//! form.set_value(FieldId::CarMake, "Toyota");
//! form.set_value(FieldId::AccessoryType, "Interior");
//! form.set_checked("Floor Mats", true);
//! form.set_value(FieldId::Quantity, "2");
//! form.set_value(FieldId::DeliveryDate, "2026-09-01");
//! form.set_value(FieldId::PaymentMethod, "UPI");
//!
//! let validator = FormValidator::with_today(today);
//! assert!(validator.validate(&mut form).is_valid());
//!
//! // One bad field: the verdict flips and exactly that field is annotated.
//! form.set_value(FieldId::Phone, "12345");
//! let verdict = validator.validate(&mut form);
//! assert!(!verdict.is_valid());
//! assert_eq!(
//!     form.annotation(FieldId::Phone),
//!     Some("Phone Number must be 10 digits.")
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod conditional;
pub mod field;
pub mod form;
pub mod predicate;
pub mod submit;
pub mod validator;
pub mod variant;
pub mod verdict;

// Re-exports
pub use conditional::CREDIT_CARD;
pub use field::{FieldId, FieldValue, CARD_GROUP};
pub use form::OrderForm;
pub use submit::{submit, SubmissionRecord, SubmissionValue};
pub use validator::FormValidator;
pub use variant::FormVariant;
pub use verdict::{FieldError, Verdict};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::conditional::CREDIT_CARD;
    pub use crate::field::{FieldId, FieldValue, CARD_GROUP};
    pub use crate::form::OrderForm;
    pub use crate::submit::{submit, SubmissionRecord, SubmissionValue};
    pub use crate::validator::FormValidator;
    pub use crate::variant::FormVariant;
    pub use crate::verdict::{FieldError, Verdict};
}
