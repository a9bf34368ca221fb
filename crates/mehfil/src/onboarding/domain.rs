use serde::{Deserialize, Serialize};

/// Vendor category chosen on the first wizard step. Selects which step
/// sequence and which optional profile fields apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    Venue,
    Boutique,
    BeautyParlor,
    Decor,
    Catering,
}

impl BusinessType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Venue,
            Self::Boutique,
            Self::BeautyParlor,
            Self::Decor,
            Self::Catering,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Venue => "Wedding Venue",
            Self::Boutique => "Bridal Boutique",
            Self::BeautyParlor => "Beauty Parlor",
            Self::Decor => "Decor Studio",
            Self::Catering => "Catering Service",
        }
    }

    /// Internal kebab-case spelling stored in the onboarding record.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Venue => "venue",
            Self::Boutique => "boutique",
            Self::BeautyParlor => "beauty-parlor",
            Self::Decor => "decor",
            Self::Catering => "catering",
        }
    }

    /// Spelling expected by the persistence collaborator.
    pub const fn external_tag(self) -> &'static str {
        match self {
            Self::Venue => "VENUE",
            Self::Boutique => "BOUTIQUE",
            Self::BeautyParlor => "BEAUTY_PARLOR",
            Self::Decor => "DECOR",
            Self::Catering => "CATERING",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.tag() == raw.trim())
    }

    pub fn from_external_tag(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.external_tag() == raw.trim())
    }
}

/// Value of a single onboarding field. Absence is modelled by the field
/// not being present in the record at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Empty text and empty lists count as absent for review and
    /// submission purposes.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Flag(_) => false,
            FieldValue::Text(value) => value.trim().is_empty(),
            FieldValue::List(values) => values.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(values) => Some(values),
            _ => None,
        }
    }

    /// Human-readable rendering for the review projection.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Flag(true) => "Yes".to_string(),
            FieldValue::Flag(false) => "No".to_string(),
            FieldValue::Text(value) => value.clone(),
            FieldValue::List(values) => values.join(", "),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::List(values)
    }
}

/// Review lifecycle of a stored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
    Contacted,
}

impl SubmissionStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Pending,
            Self::UnderReview,
            Self::Approved,
            Self::Rejected,
            Self::Contacted,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::UnderReview => "Under Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Contacted => "Contacted",
        }
    }

    /// Wire spelling used in query strings and stored rows.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Contacted => "CONTACTED",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.tag() == raw.trim())
    }
}
