//! Successful-submission handoff
//!
//! There is no backend here. A valid submission produces a flat name→value
//! record of the whole form, logs it, and hands it back to the caller; an
//! invalid one hands back the verdict so the caller can resubmit after
//! corrections.

use crate::field::{FieldId, FieldValue};
use crate::form::OrderForm;
use crate::validator::FormValidator;
use crate::verdict::Verdict;

/// One entry of a submission record.
///
/// The accessories checkbox group collapses into a single `Many` entry, in
/// checked order; every other control contributes a `Single` string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SubmissionValue {
    /// Single-valued control.
    Single(String),
    /// Checkbox group, ordered.
    Many(Vec<String>),
}

/// Flat name→value snapshot of a valid form, in form order.
///
/// Mirrors browser form-data semantics: text-like controls always
/// contribute their current value, the radio group contributes only when a
/// method is selected, and checkboxes contribute only checked entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    entries: Vec<(&'static str, SubmissionValue)>,
}

impl SubmissionRecord {
    fn collect(form: &OrderForm) -> Self {
        let mut entries = Vec::new();
        for &field in form.variant().fields() {
            match (field, form.value(field)) {
                (FieldId::PaymentMethod, _) => {
                    if let Some(method) = form.selected_payment() {
                        entries.push((field.name(), SubmissionValue::Single(method.to_string())));
                    }
                }
                (_, FieldValue::Many(checked)) => {
                    if !checked.is_empty() {
                        entries.push((field.name(), SubmissionValue::Many(checked.clone())));
                    }
                }
                (_, FieldValue::Text(value)) => {
                    entries.push((field.name(), SubmissionValue::Single(value.clone())));
                }
            }
        }
        SubmissionRecord { entries }
    }

    /// The value recorded under a control name, if present.
    pub fn get(&self, name: &str) -> Option<&SubmissionValue> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| value)
    }

    /// All entries, in form order.
    pub fn entries(&self) -> &[(&'static str, SubmissionValue)] {
        &self.entries
    }

    /// Number of recorded controls.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SubmissionRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Validate the form and, if it passes, produce the submission record.
///
/// On success this logs the success event and the full record (the stand-in
/// for a backend handoff). On failure the form is left annotated and the
/// verdict is returned; the caller may correct fields and submit again.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formwell::{submit, FieldId, FormValidator, FormVariant, OrderForm};
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
/// let mut form = OrderForm::new(FormVariant::Compact, today);
/// let validator = FormValidator::with_today(today);
///
/// let verdict = submit(&mut form, &validator).unwrap_err();
/// assert!(!verdict.is_valid());
/// ```
pub fn submit(form: &mut OrderForm, validator: &FormValidator) -> Result<SubmissionRecord, Verdict> {
    let verdict = validator.validate(form);
    if !verdict.is_valid() {
        return Err(verdict);
    }

    let record = SubmissionRecord::collect(form);
    tracing::info!("Form submitted successfully! Thank you for your order.");
    tracing::info!(record = ?record, "order form data");
    Ok(record)
}
