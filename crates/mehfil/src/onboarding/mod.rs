//! Partner-onboarding core: the category-driven step catalog, the
//! accumulating form record, validation gates, navigation, the review
//! projection, and the mapping onto the persisted submission shape.

pub mod catalog;
pub mod domain;
pub mod navigator;
pub mod record;
pub mod repository;
pub mod review;
pub mod router;
pub mod service;
pub mod session;
pub mod submission;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::StepDescriptor;
pub use domain::{BusinessType, FieldValue, SubmissionStatus};
pub use navigator::{NavigationError, StepNavigator};
pub use record::{DebounceBuffer, FormStateStore, OnboardingRecord, DEBOUNCE_WINDOW_MS};
pub use repository::{
    PageInfo, RepositoryError, StatusChange, SubmissionFilter, SubmissionId, SubmissionPage,
    SubmissionRecord, SubmissionRepository, SubmissionView,
};
pub use review::{ReviewField, Section};
pub use router::onboarding_router;
pub use service::{OnboardingService, OnboardingServiceError};
pub use session::{FinalizeError, WizardSession};
pub use submission::SubmissionPayload;
pub use validation::ValidationResult;
