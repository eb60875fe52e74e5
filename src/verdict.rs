//! Validation outcome with accumulated field errors
//!
//! A validation pass never short-circuits: every field is checked and every
//! failure is recorded, so the user sees all problems at once. [`Verdict`]
//! is the accumulator for one pass; it is recomputed from scratch each time
//! and never stored on the form.

use std::error::Error as StdError;
use std::fmt;

use crate::field::FieldId;

/// A single field's validation failure: which field, and the fixed
/// human-readable message shown next to it.
///
/// # Examples
///
/// ```
/// use formwell::{FieldError, FieldId};
///
/// let err = FieldError::new(FieldId::Phone, "Phone Number must be 10 digits.");
/// assert_eq!(err.field(), FieldId::Phone);
/// assert_eq!(err.to_string(), "phone: Phone Number must be 10 digits.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field: FieldId,
    message: String,
}

impl FieldError {
    /// Create a failure record for one field.
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }

    /// The field that failed.
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// The message displayed in the field's error slot.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl StdError for FieldError {}

/// Outcome of one validation pass over the whole form.
///
/// Failures are kept in form order. The verdict is acceptable iff no field
/// failed.
///
/// # Examples
///
/// ```
/// use formwell::{FieldId, Verdict};
///
/// let mut verdict = Verdict::new();
/// assert!(verdict.is_valid());
///
/// verdict.record(FieldId::Email, "Email is required.");
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.message_for(FieldId::Email), Some("Email is required."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    failures: Vec<FieldError>,
}

impl Verdict {
    /// An empty (passing) verdict.
    pub fn new() -> Self {
        Verdict::default()
    }

    /// Record one field failure.
    pub fn record(&mut self, field: FieldId, message: impl Into<String>) {
        self.failures.push(FieldError::new(field, message));
    }

    /// Fold another verdict's failures into this one, preserving order.
    pub fn merge(mut self, other: Verdict) -> Verdict {
        self.failures.extend(other.failures);
        self
    }

    /// True iff every field predicate passed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// All failures, in form order.
    pub fn failures(&self) -> &[FieldError] {
        &self.failures
    }

    /// The message recorded for a field, if that field failed.
    pub fn message_for(&self, field: FieldId) -> Option<&str> {
        self.failures
            .iter()
            .find(|e| e.field() == field)
            .map(FieldError::message)
    }

    /// Convert into a `Result`, keeping the failures as the error side.
    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.failures)
        }
    }
}

impl IntoIterator for Verdict {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}
