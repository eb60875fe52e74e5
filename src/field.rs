//! Field identities and values
//!
//! Every control on the order form is identified by a [`FieldId`] variant
//! rather than a string, so a typo in a field name is a compile error instead
//! of a silent lookup miss. The set of fields actually present on a given
//! form is decided by its [`FormVariant`](crate::variant::FormVariant).

use std::fmt;

/// Identity of a single form control.
///
/// The enum covers the union of both form variants; [`FormVariant::fields`]
/// selects the subset that exists on a concrete form.
///
/// [`FormVariant::fields`]: crate::variant::FormVariant::fields
///
/// # Examples
///
/// ```
/// use formwell::FieldId;
///
/// assert_eq!(FieldId::FullName.name(), "fullName");
/// assert_eq!(FieldId::FullName.error_slot(), "fullNameError");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    /// Customer's full name.
    FullName,
    /// Contact email address.
    Email,
    /// Contact phone number.
    Phone,
    /// Gender selection (detailed variant only).
    Gender,
    /// Plot or house number (detailed variant only).
    PlotNumber,
    /// Street name (detailed variant only).
    StreetName,
    /// District (detailed variant only).
    District,
    /// State (detailed variant only).
    State,
    /// Free-text delivery address (compact variant only).
    DeliveryAddress,
    /// Postal pincode.
    Pincode,
    /// Make of the customer's car.
    CarMake,
    /// Accessory category selection.
    AccessoryType,
    /// Accessories checkbox group.
    Accessories,
    /// Order quantity.
    Quantity,
    /// Preferred delivery date.
    DeliveryDate,
    /// Payment method radio group.
    PaymentMethod,
    /// Credit card number (card group).
    CardNumber,
    /// Credit card expiry month (card group).
    ExpiryDate,
    /// Credit card verification value (card group).
    Cvv,
}

impl FieldId {
    /// The control name, as it would appear in a submitted record.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Gender => "gender",
            FieldId::PlotNumber => "plotNumber",
            FieldId::StreetName => "streetName",
            FieldId::District => "district",
            FieldId::State => "state",
            FieldId::DeliveryAddress => "deliveryAddress",
            FieldId::Pincode => "pincode",
            FieldId::CarMake => "carMake",
            FieldId::AccessoryType => "accessoryType",
            FieldId::Accessories => "accessories",
            FieldId::Quantity => "quantity",
            FieldId::DeliveryDate => "deliveryDate",
            FieldId::PaymentMethod => "paymentMethod",
            FieldId::CardNumber => "cardNumber",
            FieldId::ExpiryDate => "expiryDate",
            FieldId::Cvv => "cvv",
        }
    }

    /// Identifier of the error-display slot paired with this control.
    ///
    /// The slot name is always the control name suffixed with `Error`.
    pub fn error_slot(self) -> String {
        format!("{}Error", self.name())
    }

    /// Whether this field belongs to the credit-card details group.
    pub fn is_card_field(self) -> bool {
        CARD_GROUP.contains(&self)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The conditional card-details group, in form order.
///
/// These three fields are required and visible only while the selected
/// payment method is `"Credit Card"`.
pub const CARD_GROUP: [FieldId; 3] = [FieldId::CardNumber, FieldId::ExpiryDate, FieldId::Cvv];

/// Current value of a form control.
///
/// Every control except the accessories checkbox group holds a single string;
/// the checkbox group holds the checked entries in the order they were
/// checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Single-valued control (text, select, radio, number, date, month).
    Text(String),
    /// Multi-valued checkbox group.
    Many(Vec<String>),
}

impl FieldValue {
    /// The string value of a single-valued control.
    ///
    /// Returns the empty string for a checkbox group; group membership is
    /// read through [`FieldValue::entries`] instead.
    pub fn text(&self) -> &str {
        match self {
            FieldValue::Text(value) => value,
            FieldValue::Many(_) => "",
        }
    }

    /// The checked entries of a checkbox group, empty for other controls.
    pub fn entries(&self) -> &[String] {
        match self {
            FieldValue::Text(_) => &[],
            FieldValue::Many(entries) => entries,
        }
    }

    /// True when the control carries no user input at all.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.is_empty(),
            FieldValue::Many(entries) => entries.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_slot_is_name_plus_suffix() {
        assert_eq!(FieldId::Email.error_slot(), "emailError");
        assert_eq!(FieldId::PlotNumber.error_slot(), "plotNumberError");
    }

    #[test]
    fn card_group_members() {
        assert!(FieldId::CardNumber.is_card_field());
        assert!(FieldId::ExpiryDate.is_card_field());
        assert!(FieldId::Cvv.is_card_field());
        assert!(!FieldId::PaymentMethod.is_card_field());
    }

    #[test]
    fn text_value_accessors() {
        let value = FieldValue::Text("hello".to_string());
        assert_eq!(value.text(), "hello");
        assert!(value.entries().is_empty());
        assert!(!value.is_empty());
    }

    #[test]
    fn many_value_accessors() {
        let value = FieldValue::Many(vec!["Floor Mats".to_string()]);
        assert_eq!(value.text(), "");
        assert_eq!(value.entries(), ["Floor Mats".to_string()]);
        assert!(!value.is_empty());
        assert!(FieldValue::Many(vec![]).is_empty());
    }
}
