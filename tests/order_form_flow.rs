//! End-to-end submission flows for both form variants.

use chrono::NaiveDate;
use formwell::{submit, FieldId, FormValidator, FormVariant, OrderForm, CARD_GROUP, CREDIT_CARD};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
}

fn fill_shared_fields(form: &mut OrderForm) {
    form.set_value(FieldId::FullName, "Jane O'Neil");
    form.set_value(FieldId::Email, "jane@example.com");
    form.set_value(FieldId::Phone, "9876543210");
    form.set_value(FieldId::Pincode, "560001");
    form.set_value(FieldId::CarMake, "Toyota");
    form.set_value(FieldId::AccessoryType, "Interior");
    form.set_checked("Floor Mats", true);
    form.set_value(FieldId::Quantity, "2");
    form.set_value(FieldId::DeliveryDate, "2026-09-01");
}

fn valid_detailed_form() -> OrderForm {
    let mut form = OrderForm::new(FormVariant::Detailed, today());
    fill_shared_fields(&mut form);
    form.set_value(FieldId::Gender, "Female");
    form.set_value(FieldId::PlotNumber, "12/4-B");
    form.set_value(FieldId::StreetName, "St. Mark's Road");
    form.set_value(FieldId::District, "Bengaluru Urban");
    form.set_value(FieldId::State, "Karnataka");
    form.set_value(FieldId::PaymentMethod, "UPI");
    form
}

fn valid_compact_form() -> OrderForm {
    let mut form = OrderForm::new(FormVariant::Compact, today());
    fill_shared_fields(&mut form);
    form.set_value(FieldId::DeliveryAddress, "221B Baker Street, London");
    form.set_value(FieldId::PaymentMethod, "UPI");
    form
}

#[test]
fn detailed_form_submits_with_credit_card() {
    let mut form = valid_detailed_form();
    form.set_value(FieldId::PaymentMethod, CREDIT_CARD);
    form.set_value(FieldId::CardNumber, "4111111111111111");
    form.set_value(FieldId::ExpiryDate, "2028-01");
    form.set_value(FieldId::Cvv, "123");

    let record = submit(&mut form, &FormValidator::with_today(today()))
        .expect("fully filled detailed form should submit");
    assert_eq!(form.annotated_fields().count(), 0);
    assert!(record.get("cardNumber").is_some());
}

#[test]
fn compact_form_submits_without_card_details() {
    let mut form = valid_compact_form();
    let record = submit(&mut form, &FormValidator::with_today(today()))
        .expect("fully filled compact form should submit");
    assert_eq!(form.annotated_fields().count(), 0);
    assert!(record.get("deliveryAddress").is_some());
}

#[test]
fn each_invalid_field_annotates_exactly_itself() {
    let cases: [(FieldId, &str, &str); 7] = [
        (FieldId::FullName, "John123", "Full Name can only contain"),
        (FieldId::Email, "a@b", "valid email address"),
        (FieldId::Phone, "123456789", "must be 10 digits"),
        (FieldId::DeliveryAddress, "123 Main St", "complete address"),
        (FieldId::Pincode, "5600", "must be 6 digits"),
        (FieldId::Quantity, "0", "between 1 and 10"),
        (FieldId::DeliveryDate, "2026-08-01", "future delivery date"),
    ];

    for (field, bad_value, message_part) in cases {
        let mut form = valid_compact_form();
        form.set_value(field, bad_value);

        let verdict = FormValidator::with_today(today()).validate(&mut form);
        assert_eq!(
            verdict.failures().len(),
            1,
            "only {field} should fail for {bad_value:?}"
        );
        let annotated: Vec<_> = form.annotated_fields().collect();
        assert_eq!(annotated.len(), 1);
        assert_eq!(annotated[0].0, field);
        assert!(
            annotated[0].1.contains(message_part),
            "unexpected message for {field}: {}",
            annotated[0].1
        );
    }
}

#[test]
fn email_and_phone_boundaries() {
    let validator = FormValidator::with_today(today());

    let mut form = valid_compact_form();
    form.set_value(FieldId::Email, "a@b.c");
    form.set_value(FieldId::Phone, "1234567890");
    assert!(validator.validate(&mut form).is_valid());

    form.set_value(FieldId::Email, "a@b");
    let verdict = validator.validate(&mut form);
    assert_eq!(
        verdict.message_for(FieldId::Email),
        Some("Please enter a valid email address.")
    );
}

#[test]
fn compact_address_length_boundary() {
    let validator = FormValidator::with_today(today());

    let mut form = valid_compact_form();
    form.set_value(FieldId::DeliveryAddress, "123 Main St");
    let verdict = validator.validate(&mut form);
    assert_eq!(
        verdict.message_for(FieldId::DeliveryAddress),
        Some("Please enter a complete address (at least 15 characters).")
    );

    form.set_value(FieldId::DeliveryAddress, "123 Main St, Springfield");
    assert!(validator.validate(&mut form).is_valid());
}

#[test]
fn expiry_month_boundary_with_credit_card() {
    let validator = FormValidator::with_today(today());
    let mut form = valid_compact_form();
    form.set_value(FieldId::PaymentMethod, CREDIT_CARD);
    form.set_value(FieldId::CardNumber, "4111111111111111");
    form.set_value(FieldId::Cvv, "1234");

    form.set_value(FieldId::ExpiryDate, "2026-07");
    let verdict = validator.validate(&mut form);
    assert_eq!(
        verdict.message_for(FieldId::ExpiryDate),
        Some("Expiry date cannot be in the past.")
    );

    form.set_value(FieldId::ExpiryDate, "2026-08");
    assert!(validator.validate(&mut form).is_valid());
}

#[test]
fn switching_away_from_credit_card_clears_card_errors() {
    let validator = FormValidator::with_today(today());
    let mut form = valid_compact_form();
    form.set_value(FieldId::PaymentMethod, CREDIT_CARD);

    // Card group is empty, so all three card fields fail.
    let verdict = validator.validate(&mut form);
    for field in CARD_GROUP {
        assert!(verdict.message_for(field).is_some());
        assert!(form.annotation(field).is_some());
        assert!(form.is_required(field));
    }

    form.set_value(FieldId::PaymentMethod, "Cash on Delivery");
    for field in CARD_GROUP {
        assert_eq!(form.annotation(field), None);
        assert!(!form.is_required(field));
    }
    assert!(!form.card_details_visible());
    assert!(validator.validate(&mut form).is_valid());
}

#[test]
fn resubmission_after_fixing_every_field() {
    let validator = FormValidator::with_today(today());
    let mut form = OrderForm::new(FormVariant::Detailed, today());

    let verdict = validator.validate(&mut form);
    assert!(!verdict.is_valid());
    assert!(form.annotated_fields().count() > 0);

    form = valid_detailed_form();
    assert!(submit(&mut form, &validator).is_ok());
}

#[test]
fn submission_logging_is_well_behaved() {
    // The success path logs the handoff record; make sure it does so under a
    // real subscriber.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut form = valid_compact_form();
    let record = submit(&mut form, &FormValidator::with_today(today())).unwrap();
    assert!(!record.is_empty());
}
