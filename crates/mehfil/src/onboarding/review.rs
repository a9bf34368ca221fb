use serde::Serialize;

use super::domain::BusinessType;
use super::record::OnboardingRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub fields: Vec<ReviewField>,
}

struct SectionLayout {
    title: &'static str,
    fields: &'static [(&'static str, &'static str)],
}

const OWNER_SECTION: SectionLayout = SectionLayout {
    title: "Owner",
    fields: &[
        ("Name", "ownerName"),
        ("Mobile", "ownerMobile"),
        ("Email", "ownerEmail"),
        ("CNIC", "ownerCnic"),
    ],
};

const MANAGER_SECTION: SectionLayout = SectionLayout {
    title: "Manager",
    fields: &[
        ("Name", "managerName"),
        ("Mobile", "managerMobile"),
        ("Email", "managerEmail"),
    ],
};

const BUSINESS_SECTION: SectionLayout = SectionLayout {
    title: "Business",
    fields: &[
        ("Name", "businessName"),
        ("City", "city"),
        ("Area", "area"),
        ("Address", "address"),
        ("Website", "businessWebsite"),
        ("Instagram", "instagramHandle"),
        ("Years in business", "yearsInBusiness"),
    ],
};

const PAYOUT_SECTION: SectionLayout = SectionLayout {
    title: "Payout",
    fields: &[
        ("Bank", "bankName"),
        ("Account title", "accountTitle"),
        ("Account number", "accountNumber"),
        ("IBAN", "iban"),
        ("Advance payment %", "advancePaymentPercent"),
    ],
};

const POLICIES_SECTION: SectionLayout = SectionLayout {
    title: "Policies",
    fields: &[
        ("Cancellation policy", "cancellationPolicy"),
        ("Refund policy", "refundPolicy"),
    ],
};

const VENUE_SECTION: SectionLayout = SectionLayout {
    title: "Venue Profile",
    fields: &[
        ("Venue type", "venueType"),
        ("Guest capacity", "guestCapacity"),
        ("Parking capacity", "parkingCapacity"),
        ("Outdoor space", "outdoorSpace"),
        ("Catering included", "cateringIncluded"),
        ("Amenities", "amenities"),
    ],
};

const BOUTIQUE_SECTION: SectionLayout = SectionLayout {
    title: "Collection",
    fields: &[
        ("Outfit types", "outfitTypes"),
        ("Designer labels", "designerLabels"),
        ("Price range from", "priceRangeMin"),
        ("Price range to", "priceRangeMax"),
        ("Custom stitching", "customStitching"),
    ],
};

const PARLOR_SECTION: SectionLayout = SectionLayout {
    title: "Services",
    fields: &[
        ("Services offered", "parlorServices"),
        ("Bridal packages", "bridalPackages"),
        ("Home service", "homeService"),
        ("Staff", "staffGender"),
    ],
};

const DECOR_SECTION: SectionLayout = SectionLayout {
    title: "Portfolio",
    fields: &[
        ("Decor styles", "decorStyles"),
        ("Stage setup", "stageSetup"),
        ("Lighting services", "lightingServices"),
        ("Fresh flowers", "freshFlowers"),
    ],
};

const CATERING_SECTION: SectionLayout = SectionLayout {
    title: "Menu",
    fields: &[
        ("Cuisines", "cuisineTypes"),
        ("Minimum guest order", "minGuestOrder"),
        ("Maximum guest order", "maxGuestOrder"),
        ("Live stations", "liveStations"),
        ("Food tasting", "foodTasting"),
    ],
};

fn layout_for(business_type: BusinessType) -> [&'static SectionLayout; 6] {
    let specific = match business_type {
        BusinessType::Venue => &VENUE_SECTION,
        BusinessType::Boutique => &BOUTIQUE_SECTION,
        BusinessType::BeautyParlor => &PARLOR_SECTION,
        BusinessType::Decor => &DECOR_SECTION,
        BusinessType::Catering => &CATERING_SECTION,
    };

    [
        &OWNER_SECTION,
        &MANAGER_SECTION,
        &BUSINESS_SECTION,
        specific,
        &PAYOUT_SECTION,
        &POLICIES_SECTION,
    ]
}

/// Derive the confirmation view: populated fields only, grouped by
/// section, with empty sections dropped. Fields belonging to other
/// categories are never referenced, so leftovers from a category switch
/// cannot leak into the output.
pub fn project(business_type: BusinessType, record: &OnboardingRecord) -> Vec<Section> {
    layout_for(business_type)
        .into_iter()
        .filter_map(|layout| {
            let fields: Vec<ReviewField> = layout
                .fields
                .iter()
                .filter_map(|(label, field)| {
                    record
                        .value(field)
                        .filter(|value| !value.is_blank())
                        .map(|value| ReviewField {
                            label,
                            value: value.display(),
                        })
                })
                .collect();

            if fields.is_empty() {
                None
            } else {
                Some(Section {
                    title: layout.title,
                    fields,
                })
            }
        })
        .collect()
}
