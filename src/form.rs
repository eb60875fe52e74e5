//! The in-memory form document
//!
//! [`OrderForm`] stands in for the browser document: a typed mapping from
//! [`FieldId`] to the control's value, its declared native constraints, its
//! required flag, and its error annotation. Keeping the whole surface in one
//! value makes every rule testable without a browser, and replaces
//! stringly-typed element lookup with an enum.
//!
//! Native constraints model the browser's own constraint validation: the
//! checks an input with `required`, `pattern`, `min`, or `max` attributes
//! would enforce by itself. Scripted rules live in
//! [`predicate`](crate::predicate) and the validator; the form only answers
//! "would this control's built-in validation pass right now".

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::conditional;
use crate::field::{FieldId, FieldValue};
use crate::predicate::parse_year_month;
use crate::variant::FormVariant;

/// What kind of control a field is, with its declared native constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ControlKind {
    /// Free text input; any value is natively fine.
    Text,
    /// Dropdown; the empty value means "nothing selected".
    Select,
    /// Radio group, single selected value.
    Radio,
    /// Checkbox group.
    Checkboxes,
    /// Digit-pattern input accepting between `min` and `max` digits.
    Digits { min: usize, max: usize },
    /// Integer input with inclusive bounds.
    Number { min: i64, max: i64 },
    /// Date input floored at the form's construction date.
    Date,
    /// Month input (`YYYY-MM`).
    Month,
}

#[derive(Debug, Clone)]
struct Control {
    kind: ControlKind,
    required: bool,
    value: FieldValue,
    // Message and marker are the two DOM artifacts of one failure; they are
    // always set and cleared together.
    annotation: Option<String>,
    marked_invalid: bool,
}

impl Control {
    fn new(kind: ControlKind, required: bool) -> Self {
        let value = match kind {
            ControlKind::Checkboxes => FieldValue::Many(Vec::new()),
            _ => FieldValue::Text(String::new()),
        };
        Control {
            kind,
            required,
            value,
            annotation: None,
            marked_invalid: false,
        }
    }
}

/// One order form's complete state.
///
/// Constructed empty from a [`FormVariant`] and the "page load" date, which
/// becomes the floor on the delivery-date input.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formwell::{FieldId, FormVariant, OrderForm};
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
/// let mut form = OrderForm::new(FormVariant::Compact, today);
///
/// form.set_value(FieldId::FullName, "Jane O'Neil");
/// assert_eq!(form.text(FieldId::FullName), "Jane O'Neil");
/// assert!(!form.card_details_visible());
/// ```
#[derive(Debug, Clone)]
pub struct OrderForm {
    variant: FormVariant,
    date_floor: NaiveDate,
    card_details_visible: bool,
    controls: BTreeMap<FieldId, Control>,
}

impl OrderForm {
    /// Create an empty form for `variant`, flooring the delivery date at
    /// `page_load`.
    pub fn new(variant: FormVariant, page_load: NaiveDate) -> Self {
        let mut controls = BTreeMap::new();
        for &field in variant.fields() {
            controls.insert(field, Control::new(kind_for(field, variant), initially_required(field)));
        }
        OrderForm {
            variant,
            date_floor: page_load,
            card_details_visible: false,
            controls,
        }
    }

    /// The configuration this form was built for.
    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    /// Earliest accepted delivery date, fixed at construction.
    pub fn date_floor(&self) -> NaiveDate {
        self.date_floor
    }

    /// Whether the card-details group is currently shown.
    pub fn card_details_visible(&self) -> bool {
        self.card_details_visible
    }

    pub(crate) fn set_card_details_visible(&mut self, visible: bool) {
        self.card_details_visible = visible;
    }

    fn control(&self, field: FieldId) -> &Control {
        match self.controls.get(&field) {
            Some(control) => control,
            None => panic!("field {field} is not part of the {:?} form", self.variant),
        }
    }

    fn control_mut(&mut self, field: FieldId) -> &mut Control {
        let variant = self.variant;
        match self.controls.get_mut(&field) {
            Some(control) => control,
            None => panic!("field {field} is not part of the {variant:?} form"),
        }
    }

    /// Set a single-valued control's value.
    ///
    /// Setting [`FieldId::PaymentMethod`] also runs the conditional-field
    /// controller, exactly as a change event on the radio group would.
    ///
    /// # Panics
    ///
    /// Panics if the field is not part of this form's variant, or if it is
    /// the checkbox group (use [`OrderForm::set_checked`]).
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        let control = self.control_mut(field);
        if matches!(control.value, FieldValue::Many(_)) {
            panic!("field {field} is a checkbox group; use set_checked");
        }
        control.value = FieldValue::Text(value.into());
        if field == FieldId::PaymentMethod {
            conditional::payment_method_changed(self);
        }
    }

    /// Check or uncheck one entry of the accessories group, preserving the
    /// order entries were first checked in.
    ///
    /// # Panics
    ///
    /// Panics if this form has no accessories group.
    pub fn set_checked(&mut self, entry: &str, checked: bool) {
        let control = self.control_mut(FieldId::Accessories);
        let FieldValue::Many(entries) = &mut control.value else {
            panic!("accessories control is not a checkbox group");
        };
        let position = entries.iter().position(|e| e == entry);
        match (checked, position) {
            (true, None) => entries.push(entry.to_string()),
            (false, Some(i)) => {
                entries.remove(i);
            }
            _ => {}
        }
    }

    /// Current value of a control.
    ///
    /// # Panics
    ///
    /// Panics if the field is not part of this form's variant.
    pub fn value(&self, field: FieldId) -> &FieldValue {
        &self.control(field).value
    }

    /// String value of a single-valued control (empty string for the
    /// checkbox group).
    pub fn text(&self, field: FieldId) -> &str {
        self.value(field).text()
    }

    /// The selected payment method, if any radio is checked.
    pub fn selected_payment(&self) -> Option<&str> {
        let value = self.text(FieldId::PaymentMethod);
        (!value.is_empty()).then_some(value)
    }

    /// Whether the control currently carries the `required` constraint.
    pub fn is_required(&self, field: FieldId) -> bool {
        self.control(field).required
    }

    pub(crate) fn set_required(&mut self, field: FieldId, required: bool) {
        self.control_mut(field).required = required;
    }

    /// Record a failure annotation on a field: the message for its error
    /// slot plus the invalid marker.
    pub fn annotate(&mut self, field: FieldId, message: impl Into<String>) {
        let control = self.control_mut(field);
        control.annotation = Some(message.into());
        control.marked_invalid = true;
    }

    /// Clear a field's annotation and invalid marker.
    pub fn clear_annotation(&mut self, field: FieldId) {
        let control = self.control_mut(field);
        control.annotation = None;
        control.marked_invalid = false;
    }

    pub(crate) fn clear_all_annotations(&mut self) {
        for control in self.controls.values_mut() {
            control.annotation = None;
            control.marked_invalid = false;
        }
    }

    /// The message currently shown in a field's error slot, if any.
    pub fn annotation(&self, field: FieldId) -> Option<&str> {
        self.control(field).annotation.as_deref()
    }

    /// Whether the field currently carries the invalid visual marker.
    pub fn is_marked_invalid(&self, field: FieldId) -> bool {
        self.control(field).marked_invalid
    }

    /// All fields with a visible annotation, in form order.
    pub fn annotated_fields(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        self.variant.fields().iter().filter_map(|&field| {
            self.control(field)
                .annotation
                .as_deref()
                .map(|message| (field, message))
        })
    }

    /// Would this control's built-in constraint validation pass right now?
    ///
    /// Mirrors browser semantics: `required` fails on an empty value, and
    /// shape constraints apply only to non-empty values.
    ///
    /// # Panics
    ///
    /// Panics if the field is not part of this form's variant.
    pub fn native_validity(&self, field: FieldId) -> bool {
        let control = self.control(field);
        match &control.value {
            FieldValue::Many(entries) => !control.required || !entries.is_empty(),
            FieldValue::Text(value) => {
                if value.is_empty() {
                    return !control.required;
                }
                match control.kind {
                    ControlKind::Text
                    | ControlKind::Select
                    | ControlKind::Radio
                    | ControlKind::Checkboxes => true,
                    ControlKind::Digits { min, max } => {
                        value.bytes().all(|b| b.is_ascii_digit())
                            && (min..=max).contains(&value.len())
                    }
                    ControlKind::Number { min, max } => value
                        .parse::<i64>()
                        .map(|n| (min..=max).contains(&n))
                        .unwrap_or(false),
                    ControlKind::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                        .map(|date| date >= self.date_floor)
                        .unwrap_or(false),
                    ControlKind::Month => parse_year_month(value).is_some(),
                }
            }
        }
    }
}

fn kind_for(field: FieldId, variant: FormVariant) -> ControlKind {
    match field {
        FieldId::FullName
        | FieldId::Email
        | FieldId::Phone
        | FieldId::PlotNumber
        | FieldId::StreetName
        | FieldId::District
        | FieldId::State
        | FieldId::DeliveryAddress
        | FieldId::CarMake => ControlKind::Text,
        FieldId::Gender | FieldId::AccessoryType => ControlKind::Select,
        FieldId::PaymentMethod => ControlKind::Radio,
        FieldId::Accessories => ControlKind::Checkboxes,
        FieldId::Pincode => ControlKind::Digits { min: 6, max: 6 },
        FieldId::CardNumber => ControlKind::Digits { min: 13, max: 16 },
        FieldId::Cvv => ControlKind::Digits { min: 3, max: 4 },
        FieldId::Quantity => {
            let bounds = variant.quantity_bounds();
            ControlKind::Number {
                min: *bounds.start(),
                max: *bounds.end(),
            }
        }
        FieldId::DeliveryDate => ControlKind::Date,
        FieldId::ExpiryDate => ControlKind::Month,
    }
}

// Card fields start optional; the conditional controller flips them when
// the credit-card method is selected.
fn initially_required(field: FieldId) -> bool {
    !field.is_card_field() && field != FieldId::Accessories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_load() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    #[test]
    fn annotation_and_marker_move_together() {
        let mut form = OrderForm::new(FormVariant::Compact, page_load());
        form.annotate(FieldId::Email, "Email is required.");
        assert_eq!(form.annotation(FieldId::Email), Some("Email is required."));
        assert!(form.is_marked_invalid(FieldId::Email));

        form.clear_annotation(FieldId::Email);
        assert_eq!(form.annotation(FieldId::Email), None);
        assert!(!form.is_marked_invalid(FieldId::Email));
    }

    #[test]
    fn native_required_fails_on_empty() {
        let form = OrderForm::new(FormVariant::Compact, page_load());
        assert!(!form.native_validity(FieldId::Pincode));
        // Card number starts optional, so empty passes.
        assert!(form.native_validity(FieldId::CardNumber));
    }

    #[test]
    fn native_digit_patterns() {
        let mut form = OrderForm::new(FormVariant::Compact, page_load());
        form.set_value(FieldId::Pincode, "560001");
        assert!(form.native_validity(FieldId::Pincode));
        form.set_value(FieldId::Pincode, "5600");
        assert!(!form.native_validity(FieldId::Pincode));
        form.set_value(FieldId::Pincode, "56000a");
        assert!(!form.native_validity(FieldId::Pincode));
    }

    #[test]
    fn native_quantity_bounds_follow_variant() {
        let mut compact = OrderForm::new(FormVariant::Compact, page_load());
        compact.set_value(FieldId::Quantity, "10");
        assert!(compact.native_validity(FieldId::Quantity));
        compact.set_value(FieldId::Quantity, "11");
        assert!(!compact.native_validity(FieldId::Quantity));
        compact.set_value(FieldId::Quantity, "2.5");
        assert!(!compact.native_validity(FieldId::Quantity));

        let mut detailed = OrderForm::new(FormVariant::Detailed, page_load());
        detailed.set_value(FieldId::Quantity, "100");
        assert!(detailed.native_validity(FieldId::Quantity));
        detailed.set_value(FieldId::Quantity, "101");
        assert!(!detailed.native_validity(FieldId::Quantity));
    }

    #[test]
    fn native_delivery_date_floor() {
        let mut form = OrderForm::new(FormVariant::Compact, page_load());
        form.set_value(FieldId::DeliveryDate, "2026-08-27");
        assert!(!form.native_validity(FieldId::DeliveryDate));
        form.set_value(FieldId::DeliveryDate, "2026-08-28");
        assert!(form.native_validity(FieldId::DeliveryDate));
        form.set_value(FieldId::DeliveryDate, "not-a-date");
        assert!(!form.native_validity(FieldId::DeliveryDate));
    }

    #[test]
    fn checkbox_order_is_check_order() {
        let mut form = OrderForm::new(FormVariant::Compact, page_load());
        form.set_checked("Seat Covers", true);
        form.set_checked("Floor Mats", true);
        form.set_checked("Seat Covers", true); // re-checking is a no-op
        assert_eq!(
            form.value(FieldId::Accessories).entries(),
            ["Seat Covers".to_string(), "Floor Mats".to_string()]
        );

        form.set_checked("Seat Covers", false);
        assert_eq!(
            form.value(FieldId::Accessories).entries(),
            ["Floor Mats".to_string()]
        );
    }

    #[test]
    #[should_panic(expected = "not part of the Compact form")]
    fn missing_field_is_a_precondition_violation() {
        let form = OrderForm::new(FormVariant::Compact, page_load());
        form.text(FieldId::Gender);
    }
}
