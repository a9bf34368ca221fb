use serde::{Deserialize, Serialize};

use super::catalog;
use super::domain::{BusinessType, SubmissionStatus};
use super::record::OnboardingRecord;

/// The field-complete structure handed to the persistence collaborator.
/// Every column of the union schema is present; optional fields that
/// were never entered are serialized as explicit nulls so the persisted
/// shape is uniform across categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub business_type: String,
    pub status: SubmissionStatus,

    // Contact and identity
    pub owner_name: Option<String>,
    pub owner_mobile: Option<String>,
    pub owner_email: Option<String>,
    pub owner_cnic: Option<String>,
    pub manager_name: Option<String>,
    pub manager_mobile: Option<String>,
    pub manager_email: Option<String>,

    // Business profile
    pub business_name: Option<String>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub address: Option<String>,
    pub business_website: Option<String>,
    pub instagram_handle: Option<String>,
    pub years_in_business: Option<String>,

    // Payout
    pub bank_name: Option<String>,
    pub account_title: Option<String>,
    pub account_number: Option<String>,
    pub iban: Option<String>,
    pub advance_payment_percent: Option<String>,

    // Policies
    pub cancellation_policy: Option<String>,
    pub refund_policy: Option<String>,

    // Venue
    pub venue_type: Option<String>,
    pub guest_capacity: Option<String>,
    pub parking_capacity: Option<String>,
    pub outdoor_space: Option<bool>,
    pub catering_included: Option<bool>,
    pub amenities: Option<Vec<String>>,

    // Boutique
    pub outfit_types: Option<Vec<String>>,
    pub designer_labels: Option<String>,
    pub price_range_min: Option<String>,
    pub price_range_max: Option<String>,
    pub custom_stitching: Option<bool>,

    // Beauty parlor
    pub parlor_services: Option<Vec<String>>,
    pub bridal_packages: Option<String>,
    pub home_service: Option<bool>,
    pub staff_gender: Option<String>,

    // Decor
    pub decor_styles: Option<Vec<String>>,
    pub stage_setup: Option<bool>,
    pub lighting_services: Option<bool>,
    pub fresh_flowers: Option<bool>,

    // Catering
    pub cuisine_types: Option<Vec<String>>,
    pub min_guest_order: Option<String>,
    pub max_guest_order: Option<String>,
    pub live_stations: Option<bool>,
    pub food_tasting: Option<bool>,
}

/// Top-level fields the persistence collaborator refuses to store nulls
/// for. Mirrors the required set enforced step by step in the wizard.
const REQUIRED_PAYLOAD_FIELDS: &[&str] = &[
    "ownerName",
    "ownerMobile",
    "ownerEmail",
    "managerName",
    "managerMobile",
    "businessName",
    "city",
    "area",
    "address",
    "cancellationPolicy",
];

impl SubmissionPayload {
    /// Names of required top-level fields that are missing or blank.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        REQUIRED_PAYLOAD_FIELDS
            .iter()
            .copied()
            .filter(|field| {
                let value = match *field {
                    "ownerName" => &self.owner_name,
                    "ownerMobile" => &self.owner_mobile,
                    "ownerEmail" => &self.owner_email,
                    "managerName" => &self.manager_name,
                    "managerMobile" => &self.manager_mobile,
                    "businessName" => &self.business_name,
                    "city" => &self.city,
                    "area" => &self.area,
                    "address" => &self.address,
                    "cancellationPolicy" => &self.cancellation_policy,
                    _ => return true,
                };
                value
                    .as_deref()
                    .map(|text| text.trim().is_empty())
                    .unwrap_or(true)
            })
            .collect()
    }

    pub fn parsed_business_type(&self) -> Option<BusinessType> {
        BusinessType::from_external_tag(&self.business_type)
    }
}

/// Map the accumulated record onto the persisted shape. Fields outside
/// the active category's relevant set are ignored even when populated,
/// which is how leftovers from a category switch are shed.
pub fn build(business_type: BusinessType, record: &OnboardingRecord) -> SubmissionPayload {
    let text = |field: &str| -> Option<String> {
        if !catalog::is_relevant(business_type, field) {
            return None;
        }
        record
            .value(field)
            .filter(|value| !value.is_blank())
            .and_then(|value| value.as_text())
            .map(str::to_string)
    };
    let flag = |field: &str| -> Option<bool> {
        if !catalog::is_relevant(business_type, field) {
            return None;
        }
        record.value(field).and_then(|value| value.as_flag())
    };
    let list = |field: &str| -> Option<Vec<String>> {
        if !catalog::is_relevant(business_type, field) {
            return None;
        }
        record
            .value(field)
            .filter(|value| !value.is_blank())
            .and_then(|value| value.as_list())
            .map(<[String]>::to_vec)
    };

    SubmissionPayload {
        business_type: business_type.external_tag().to_string(),
        status: SubmissionStatus::Pending,

        owner_name: text("ownerName"),
        owner_mobile: text("ownerMobile"),
        owner_email: text("ownerEmail"),
        owner_cnic: text("ownerCnic"),
        manager_name: text("managerName"),
        manager_mobile: text("managerMobile"),
        manager_email: text("managerEmail"),

        business_name: text("businessName"),
        city: text("city"),
        area: text("area"),
        address: text("address"),
        business_website: text("businessWebsite"),
        instagram_handle: text("instagramHandle"),
        years_in_business: text("yearsInBusiness"),

        bank_name: text("bankName"),
        account_title: text("accountTitle"),
        account_number: text("accountNumber"),
        iban: text("iban"),
        advance_payment_percent: text("advancePaymentPercent"),

        cancellation_policy: text("cancellationPolicy"),
        refund_policy: text("refundPolicy"),

        venue_type: text("venueType"),
        guest_capacity: text("guestCapacity"),
        parking_capacity: text("parkingCapacity"),
        outdoor_space: flag("outdoorSpace"),
        catering_included: flag("cateringIncluded"),
        amenities: list("amenities"),

        outfit_types: list("outfitTypes"),
        designer_labels: text("designerLabels"),
        price_range_min: text("priceRangeMin"),
        price_range_max: text("priceRangeMax"),
        custom_stitching: flag("customStitching"),

        parlor_services: list("parlorServices"),
        bridal_packages: text("bridalPackages"),
        home_service: flag("homeService"),
        staff_gender: text("staffGender"),

        decor_styles: list("decorStyles"),
        stage_setup: flag("stageSetup"),
        lighting_services: flag("lightingServices"),
        fresh_flowers: flag("freshFlowers"),

        cuisine_types: list("cuisineTypes"),
        min_guest_order: text("minGuestOrder"),
        max_guest_order: text("maxGuestOrder"),
        live_stations: flag("liveStations"),
        food_tasting: flag("foodTasting"),
    }
}
