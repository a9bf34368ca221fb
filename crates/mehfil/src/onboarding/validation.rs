use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::catalog;
use super::domain::BusinessType;
use super::record::OnboardingRecord;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+$").expect("email pattern"));
static URL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://)?\S+\.\S+$").expect("url pattern"));

/// Field-level outcome of checking one step or the whole record.
/// Informational only; callers decide whether to block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: BTreeMap::new(),
        }
    }

    fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    fn absorb(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.valid = self.errors.is_empty();
    }
}

enum FieldRule {
    RequiredText,
    RequiredEmail,
    OptionalEmail,
    OptionalUrl,
    RequiredCategory,
}

/// Required-field burden sits on contact, identity, and policy data
/// only; descriptive profile content never blocks navigation.
fn rule_for(field: &str) -> Option<FieldRule> {
    match field {
        "businessType" => Some(FieldRule::RequiredCategory),
        "ownerName" | "ownerMobile" | "managerName" | "managerMobile" | "businessName"
        | "city" | "area" | "address" | "cancellationPolicy" => Some(FieldRule::RequiredText),
        "ownerEmail" => Some(FieldRule::RequiredEmail),
        "managerEmail" => Some(FieldRule::OptionalEmail),
        "businessWebsite" => Some(FieldRule::OptionalUrl),
        _ => None,
    }
}

fn field_label(field: &str) -> &'static str {
    match field {
        "businessType" => "Business category",
        "ownerName" => "Owner name",
        "ownerMobile" => "Owner mobile number",
        "ownerEmail" => "Owner email",
        "managerName" => "Manager name",
        "managerMobile" => "Manager mobile number",
        "managerEmail" => "Manager email",
        "businessName" => "Business name",
        "city" => "City",
        "area" => "Area",
        "address" => "Address",
        "businessWebsite" => "Website",
        "cancellationPolicy" => "Cancellation policy",
        _ => "This field",
    }
}

fn check_field(field: &str, record: &OnboardingRecord) -> Option<String> {
    let rule = rule_for(field)?;
    let text = record.text(field).map(str::trim).unwrap_or("");

    match rule {
        FieldRule::RequiredText => {
            if text.is_empty() {
                return Some(format!("{} is required", field_label(field)));
            }
        }
        FieldRule::RequiredCategory => {
            if text.is_empty() {
                return Some(format!("{} is required", field_label(field)));
            }
            if BusinessType::parse(text).is_none() {
                return Some(format!("{} is not recognized", field_label(field)));
            }
        }
        FieldRule::RequiredEmail => {
            if text.is_empty() {
                return Some(format!("{} is required", field_label(field)));
            }
            if !EMAIL_SHAPE.is_match(text) {
                return Some("Enter a valid email address".to_string());
            }
        }
        FieldRule::OptionalEmail => {
            if !text.is_empty() && !EMAIL_SHAPE.is_match(text) {
                return Some("Enter a valid email address".to_string());
            }
        }
        FieldRule::OptionalUrl => {
            if !text.is_empty() && !URL_SHAPE.is_match(text) {
                return Some("Enter a valid website address".to_string());
            }
        }
    }

    None
}

/// Check the rules attached to a single step. Steps without rules, and
/// unknown step ids, validate trivially.
pub fn validate_step(step_id: &str, record: &OnboardingRecord) -> ValidationResult {
    let Some(step) = catalog::descriptor(step_id) else {
        return ValidationResult::ok();
    };

    let mut errors = BTreeMap::new();
    for field in step.validation_fields {
        if let Some(message) = check_field(field, record) {
            errors.insert((*field).to_string(), message);
        }
    }

    ValidationResult::from_errors(errors)
}

/// The authoritative submission gate: every step of the category's
/// sequence, regardless of how the user navigated.
pub fn validate_all(business_type: BusinessType, record: &OnboardingRecord) -> ValidationResult {
    let mut result = ValidationResult::ok();
    for step in catalog::steps_for(Some(business_type)) {
        result.absorb(validate_step(step.id, record));
    }
    result
}
