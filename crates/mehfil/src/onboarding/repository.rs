use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{BusinessType, SubmissionStatus};
use super::submission::SubmissionPayload;

/// Identifier wrapper for stored submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// One persisted onboarding application: the payload plus review
/// metadata stamped by admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub payload: SubmissionPayload,
    pub created_at: DateTime<Utc>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub admin_notes: Option<String>,
}

impl SubmissionRecord {
    pub fn status(&self) -> SubmissionStatus {
        self.payload.status
    }

    /// Compact listing row for admin screens.
    pub fn summary_view(&self) -> SubmissionView {
        SubmissionView {
            id: self.id.clone(),
            business_type: self.payload.business_type.clone(),
            business_name: self.payload.business_name.clone(),
            city: self.payload.city.clone(),
            owner_name: self.payload.owner_name.clone(),
            status: self.payload.status,
            status_label: self.payload.status.label(),
            created_at: self.created_at,
            reviewed_by: self.reviewed_by.clone(),
            reviewed_at: self.reviewed_at,
            admin_notes: self.admin_notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    pub id: SubmissionId,
    pub business_type: String,
    pub business_name: Option<String>,
    pub city: Option<String>,
    pub owner_name: Option<String>,
    pub status: SubmissionStatus,
    pub status_label: &'static str,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

/// Listing filter for admin screens. Pages are 1-based.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFilter {
    pub status: Option<SubmissionStatus>,
    pub business_type: Option<BusinessType>,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone)]
pub struct SubmissionPage {
    pub items: Vec<SubmissionRecord>,
    pub pagination: PageInfo,
}

/// Admin review action applied to a stored submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub status: SubmissionStatus,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
}

/// Storage abstraction so the onboarding service can be exercised
/// without a live database.
pub trait SubmissionRepository: Send + Sync {
    fn create(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
    fn list(&self, filter: &SubmissionFilter) -> Result<SubmissionPage, RepositoryError>;
    fn update(&self, record: SubmissionRecord) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
