use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::repository::{
    RepositoryError, StatusChange, SubmissionFilter, SubmissionId, SubmissionPage,
    SubmissionRecord, SubmissionRepository,
};
use super::submission::SubmissionPayload;

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub-{id:06}"))
}

/// Error raised by the onboarding intake service.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingServiceError {
    #[error("missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),
    #[error("unknown business type tag: {0}")]
    UnknownBusinessType(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Intake and admin-review operations over the persistence
/// collaborator. Stateless apart from the repository handle; the wizard
/// session it serves lives entirely on the caller's side.
pub struct OnboardingService<R> {
    repository: Arc<R>,
}

impl<R> OnboardingService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Accept a finalized payload. The required-field check mirrors the
    /// wizard's own gate so a payload that skipped the wizard cannot
    /// land half-empty rows.
    pub fn submit(
        &self,
        payload: SubmissionPayload,
        submitted_at: DateTime<Utc>,
    ) -> Result<SubmissionRecord, OnboardingServiceError> {
        if payload.parsed_business_type().is_none() {
            return Err(OnboardingServiceError::UnknownBusinessType(
                payload.business_type.clone(),
            ));
        }

        let missing = payload.missing_required_fields();
        if !missing.is_empty() {
            return Err(OnboardingServiceError::Incomplete(missing));
        }

        let record = SubmissionRecord {
            id: next_submission_id(),
            payload,
            created_at: submitted_at,
            reviewed_by: None,
            reviewed_at: None,
            admin_notes: None,
        };

        let stored = self.repository.create(record)?;
        Ok(stored)
    }

    pub fn list(&self, filter: &SubmissionFilter) -> Result<SubmissionPage, OnboardingServiceError> {
        Ok(self.repository.list(filter)?)
    }

    pub fn get(&self, id: &SubmissionId) -> Result<SubmissionRecord, OnboardingServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Apply an admin review decision and stamp the review metadata.
    pub fn review_status(
        &self,
        id: &SubmissionId,
        change: StatusChange,
        reviewed_at: DateTime<Utc>,
    ) -> Result<SubmissionRecord, OnboardingServiceError> {
        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        record.payload.status = change.status;
        record.reviewed_at = Some(reviewed_at);
        if change.reviewed_by.is_some() {
            record.reviewed_by = change.reviewed_by;
        }
        if change.admin_notes.is_some() {
            record.admin_notes = change.admin_notes;
        }

        self.repository.update(record.clone())?;
        Ok(record)
    }
}
