//! The two order-form configurations
//!
//! The product ships two builds of the same order form. They share most
//! fields but disagree on how the delivery address is collected and on the
//! quantity bound. Both are configurations of one validator, captured here
//! so the field list and bounds are declared once and never inferred.

use std::ops::RangeInclusive;

use crate::field::FieldId;

/// Which build of the order form is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// Split address (plot number, street, district, state) plus a gender
    /// selection; quantities up to 100.
    Detailed,
    /// Single free-text delivery address; quantities up to 10.
    Compact,
}

const DETAILED_FIELDS: [FieldId; 18] = [
    FieldId::FullName,
    FieldId::Email,
    FieldId::Phone,
    FieldId::Gender,
    FieldId::PlotNumber,
    FieldId::StreetName,
    FieldId::District,
    FieldId::State,
    FieldId::Pincode,
    FieldId::CarMake,
    FieldId::AccessoryType,
    FieldId::Accessories,
    FieldId::Quantity,
    FieldId::DeliveryDate,
    FieldId::PaymentMethod,
    FieldId::CardNumber,
    FieldId::ExpiryDate,
    FieldId::Cvv,
];

const COMPACT_FIELDS: [FieldId; 14] = [
    FieldId::FullName,
    FieldId::Email,
    FieldId::Phone,
    FieldId::DeliveryAddress,
    FieldId::Pincode,
    FieldId::CarMake,
    FieldId::AccessoryType,
    FieldId::Accessories,
    FieldId::Quantity,
    FieldId::DeliveryDate,
    FieldId::PaymentMethod,
    FieldId::CardNumber,
    FieldId::ExpiryDate,
    FieldId::Cvv,
];

impl FormVariant {
    /// Every field on this variant, in form order.
    ///
    /// Validation walks this list front to back, and submission records are
    /// assembled in the same order.
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FormVariant::Detailed => &DETAILED_FIELDS,
            FormVariant::Compact => &COMPACT_FIELDS,
        }
    }

    /// Whether this variant carries the given field at all.
    pub fn has_field(self, field: FieldId) -> bool {
        self.fields().contains(&field)
    }

    /// Inclusive bounds declared on the quantity input.
    pub fn quantity_bounds(self) -> RangeInclusive<i64> {
        match self {
            FormVariant::Detailed => 1..=100,
            FormVariant::Compact => 1..=10,
        }
    }
}
