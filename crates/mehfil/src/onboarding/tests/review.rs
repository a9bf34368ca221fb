use super::common::*;

use serde_json::Value;

use crate::onboarding::domain::{BusinessType, FieldValue};
use crate::onboarding::review::project;
use crate::onboarding::submission;

fn catering_record_with_venue_leftovers() -> crate::onboarding::record::OnboardingRecord {
    record_from(vec![
        ("businessType", "catering".into()),
        ("ownerName", "Ayesha".into()),
        ("ownerMobile", "03001234567".into()),
        ("ownerEmail", "a@x.com".into()),
        ("managerName", "Hamza".into()),
        ("managerMobile", "03217654321".into()),
        ("businessName", "Spice Co".into()),
        ("city", "Karachi".into()),
        ("area", "Clifton".into()),
        ("address", "123 Street".into()),
        ("cancellationPolicy", "48hr notice".into()),
        (
            "cuisineTypes",
            FieldValue::from(vec!["Mughlai".to_string(), "Continental".to_string()]),
        ),
        // Left behind by an earlier venue run before the category switch.
        ("guestCapacity", "500".into()),
        ("venueType", "Banquet".into()),
    ])
}

#[test]
fn projection_groups_populated_fields_by_section() {
    let sections = project(BusinessType::Catering, &catering_record());

    let titles: Vec<&str> = sections.iter().map(|section| section.title).collect();
    assert_eq!(
        titles,
        vec!["Owner", "Manager", "Business", "Menu", "Policies"]
    );

    let menu = sections
        .iter()
        .find(|section| section.title == "Menu")
        .expect("menu section present");
    assert!(menu
        .fields
        .iter()
        .any(|field| field.label == "Cuisines" && field.value == "Mughlai, Continental"));
    assert!(menu
        .fields
        .iter()
        .any(|field| field.label == "Live stations" && field.value == "Yes"));
}

#[test]
fn empty_sections_are_dropped_entirely() {
    let sections = project(BusinessType::Catering, &catering_record());
    // No payout fields were entered.
    assert!(sections.iter().all(|section| section.title != "Payout"));
}

#[test]
fn blank_values_count_as_absent() {
    let record = record_from(vec![
        ("ownerName", "Ayesha".into()),
        ("ownerCnic", "".into()),
        ("amenities", FieldValue::List(Vec::new())),
    ]);

    let sections = project(BusinessType::Venue, &record);
    let owner = sections
        .iter()
        .find(|section| section.title == "Owner")
        .expect("owner section present");
    assert_eq!(owner.fields.len(), 1);
    assert!(sections.iter().all(|section| section.title != "Venue Profile"));
}

#[test]
fn leftover_fields_from_other_categories_never_leak() {
    let sections = project(BusinessType::Catering, &catering_record_with_venue_leftovers());

    for section in &sections {
        for field in &section.fields {
            assert_ne!(field.label, "Venue type");
            assert_ne!(field.label, "Guest capacity");
        }
    }
}

#[test]
fn flags_render_as_yes_no() {
    let record = record_from(vec![
        ("ownerName", "Zara".into()),
        ("stageSetup", true.into()),
        ("freshFlowers", false.into()),
    ]);

    let sections = project(BusinessType::Decor, &record);
    let portfolio = sections
        .iter()
        .find(|section| section.title == "Portfolio")
        .expect("portfolio section present");
    assert!(portfolio
        .fields
        .iter()
        .any(|field| field.label == "Stage setup" && field.value == "Yes"));
    assert!(portfolio
        .fields
        .iter()
        .any(|field| field.label == "Fresh flowers" && field.value == "No"));
}

#[test]
fn payload_carries_every_union_column() {
    let payload = submission::build(BusinessType::Catering, &catering_record());
    let value = serde_json::to_value(&payload).expect("payload serializes");
    let object = value.as_object().expect("payload is an object");

    // Uniform shape: absent optionals surface as explicit nulls.
    for key in [
        "guestCapacity",
        "outfitTypes",
        "parlorServices",
        "decorStyles",
        "bankName",
        "iban",
    ] {
        assert_eq!(object.get(key), Some(&Value::Null), "{key} should be null");
    }

    assert_eq!(
        object.get("status"),
        Some(&Value::String("PENDING".to_string()))
    );
    assert_eq!(
        object.get("businessType"),
        Some(&Value::String("CATERING".to_string()))
    );
    assert_eq!(
        object.get("ownerName"),
        Some(&Value::String("Ayesha".to_string()))
    );
}

#[test]
fn mapper_ignores_fields_outside_the_active_category() {
    let payload = submission::build(
        BusinessType::Catering,
        &catering_record_with_venue_leftovers(),
    );

    assert_eq!(payload.guest_capacity, None);
    assert_eq!(payload.venue_type, None);
    assert_eq!(
        payload.cuisine_types,
        Some(vec!["Mughlai".to_string(), "Continental".to_string()])
    );
}

#[test]
fn missing_required_fields_are_reported_by_name() {
    let mut payload = complete_payload();
    payload.owner_email = None;
    payload.city = Some("  ".to_string());

    let missing = payload.missing_required_fields();
    assert_eq!(missing, vec!["ownerEmail", "city"]);
}
