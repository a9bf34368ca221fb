use super::domain::BusinessType;

/// Static metadata for one wizard page. Ordering inside the per-category
/// lists defines both the visual sequence and the forward-gate order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub required: bool,
    pub validation_fields: &'static [&'static str],
}

const BUSINESS_TYPE: StepDescriptor = StepDescriptor {
    id: "business-type",
    title: "Business Category",
    required: true,
    validation_fields: &["businessType"],
};

const OWNER_DETAILS: StepDescriptor = StepDescriptor {
    id: "owner-details",
    title: "Owner Details",
    required: true,
    validation_fields: &["ownerName", "ownerMobile", "ownerEmail"],
};

const MANAGER_DETAILS: StepDescriptor = StepDescriptor {
    id: "manager-details",
    title: "Manager Details",
    required: true,
    validation_fields: &["managerName", "managerMobile", "managerEmail"],
};

const BUSINESS_DETAILS: StepDescriptor = StepDescriptor {
    id: "business-details",
    title: "Business Details",
    required: true,
    validation_fields: &["businessName", "city", "area", "address", "businessWebsite"],
};

const VENUE_SPACE: StepDescriptor = StepDescriptor {
    id: "venue-space",
    title: "Venue & Capacity",
    required: false,
    validation_fields: &[],
};

const VENUE_AMENITIES: StepDescriptor = StepDescriptor {
    id: "venue-amenities",
    title: "Amenities",
    required: false,
    validation_fields: &[],
};

const BOUTIQUE_COLLECTION: StepDescriptor = StepDescriptor {
    id: "boutique-collection",
    title: "Collection & Pricing",
    required: false,
    validation_fields: &[],
};

const PARLOR_SERVICES: StepDescriptor = StepDescriptor {
    id: "parlor-services",
    title: "Services & Packages",
    required: false,
    validation_fields: &[],
};

const DECOR_PORTFOLIO: StepDescriptor = StepDescriptor {
    id: "decor-portfolio",
    title: "Styles & Portfolio",
    required: false,
    validation_fields: &[],
};

const CATERING_MENU: StepDescriptor = StepDescriptor {
    id: "catering-menu",
    title: "Cuisine & Menu",
    required: false,
    validation_fields: &[],
};

const BANK_DETAILS: StepDescriptor = StepDescriptor {
    id: "bank-details",
    title: "Payout Details",
    required: false,
    validation_fields: &[],
};

const POLICIES: StepDescriptor = StepDescriptor {
    id: "policies",
    title: "Booking Policies",
    required: true,
    validation_fields: &["cancellationPolicy"],
};

const REVIEW: StepDescriptor = StepDescriptor {
    id: "review",
    title: "Review & Submit",
    required: false,
    validation_fields: &[],
};

// Until a category is chosen the selector is the only reachable step.
const SELECTION_ONLY: &[StepDescriptor] = &[BUSINESS_TYPE];

const VENUE_STEPS: &[StepDescriptor] = &[
    BUSINESS_TYPE,
    OWNER_DETAILS,
    MANAGER_DETAILS,
    BUSINESS_DETAILS,
    VENUE_SPACE,
    VENUE_AMENITIES,
    BANK_DETAILS,
    POLICIES,
    REVIEW,
];

const BOUTIQUE_STEPS: &[StepDescriptor] = &[
    BUSINESS_TYPE,
    OWNER_DETAILS,
    MANAGER_DETAILS,
    BUSINESS_DETAILS,
    BOUTIQUE_COLLECTION,
    BANK_DETAILS,
    POLICIES,
    REVIEW,
];

const BEAUTY_PARLOR_STEPS: &[StepDescriptor] = &[
    BUSINESS_TYPE,
    OWNER_DETAILS,
    MANAGER_DETAILS,
    BUSINESS_DETAILS,
    PARLOR_SERVICES,
    BANK_DETAILS,
    POLICIES,
    REVIEW,
];

const DECOR_STEPS: &[StepDescriptor] = &[
    BUSINESS_TYPE,
    OWNER_DETAILS,
    MANAGER_DETAILS,
    BUSINESS_DETAILS,
    DECOR_PORTFOLIO,
    BANK_DETAILS,
    POLICIES,
    REVIEW,
];

const CATERING_STEPS: &[StepDescriptor] = &[
    BUSINESS_TYPE,
    OWNER_DETAILS,
    MANAGER_DETAILS,
    BUSINESS_DETAILS,
    CATERING_MENU,
    BANK_DETAILS,
    POLICIES,
    REVIEW,
];

// One entry per distinct step id, for rule lookups by id alone.
const ALL_STEPS: &[StepDescriptor] = &[
    BUSINESS_TYPE,
    OWNER_DETAILS,
    MANAGER_DETAILS,
    BUSINESS_DETAILS,
    VENUE_SPACE,
    VENUE_AMENITIES,
    BOUTIQUE_COLLECTION,
    PARLOR_SERVICES,
    DECOR_PORTFOLIO,
    CATERING_MENU,
    BANK_DETAILS,
    POLICIES,
    REVIEW,
];

/// Fields collected on the shared steps, relevant to every category.
const COMMON_FIELDS: &[&str] = &[
    "businessType",
    "ownerName",
    "ownerMobile",
    "ownerEmail",
    "ownerCnic",
    "managerName",
    "managerMobile",
    "managerEmail",
    "businessName",
    "city",
    "area",
    "address",
    "businessWebsite",
    "instagramHandle",
    "yearsInBusiness",
    "bankName",
    "accountTitle",
    "accountNumber",
    "iban",
    "advancePaymentPercent",
    "cancellationPolicy",
    "refundPolicy",
];

const VENUE_FIELDS: &[&str] = &[
    "venueType",
    "guestCapacity",
    "parkingCapacity",
    "outdoorSpace",
    "cateringIncluded",
    "amenities",
];

const BOUTIQUE_FIELDS: &[&str] = &[
    "outfitTypes",
    "designerLabels",
    "priceRangeMin",
    "priceRangeMax",
    "customStitching",
];

const BEAUTY_PARLOR_FIELDS: &[&str] = &[
    "parlorServices",
    "bridalPackages",
    "homeService",
    "staffGender",
];

const DECOR_FIELDS: &[&str] = &[
    "decorStyles",
    "stageSetup",
    "lightingServices",
    "freshFlowers",
];

const CATERING_FIELDS: &[&str] = &[
    "cuisineTypes",
    "minGuestOrder",
    "maxGuestOrder",
    "liveStations",
    "foodTasting",
];

pub fn steps_for(business_type: Option<BusinessType>) -> &'static [StepDescriptor] {
    match business_type {
        None => SELECTION_ONLY,
        Some(BusinessType::Venue) => VENUE_STEPS,
        Some(BusinessType::Boutique) => BOUTIQUE_STEPS,
        Some(BusinessType::BeautyParlor) => BEAUTY_PARLOR_STEPS,
        Some(BusinessType::Decor) => DECOR_STEPS,
        Some(BusinessType::Catering) => CATERING_STEPS,
    }
}

pub fn total_steps(business_type: Option<BusinessType>) -> usize {
    steps_for(business_type).len()
}

/// Position of a step within a category's sequence. Absence is a normal
/// outcome during navigation-bounds checks.
pub fn step_index(business_type: BusinessType, step_id: &str) -> Option<usize> {
    steps_for(Some(business_type))
        .iter()
        .position(|step| step.id == step_id)
}

/// Lookup by id alone; shared steps carry identical rules everywhere.
pub fn descriptor(step_id: &str) -> Option<&'static StepDescriptor> {
    ALL_STEPS.iter().find(|step| step.id == step_id)
}

pub fn common_fields() -> &'static [&'static str] {
    COMMON_FIELDS
}

pub fn specific_fields(business_type: BusinessType) -> &'static [&'static str] {
    match business_type {
        BusinessType::Venue => VENUE_FIELDS,
        BusinessType::Boutique => BOUTIQUE_FIELDS,
        BusinessType::BeautyParlor => BEAUTY_PARLOR_FIELDS,
        BusinessType::Decor => DECOR_FIELDS,
        BusinessType::Catering => CATERING_FIELDS,
    }
}

/// True when the field belongs to the category's persisted profile.
pub fn is_relevant(business_type: BusinessType, field: &str) -> bool {
    COMMON_FIELDS.contains(&field) || specific_fields(business_type).contains(&field)
}
