use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::onboarding::domain::{BusinessType, FieldValue};
use crate::onboarding::record::{FormStateStore, OnboardingRecord};
use crate::onboarding::repository::{
    PageInfo, RepositoryError, SubmissionFilter, SubmissionId, SubmissionPage, SubmissionRecord,
    SubmissionRepository,
};
use crate::onboarding::router::onboarding_router;
use crate::onboarding::service::OnboardingService;
use crate::onboarding::submission::{self, SubmissionPayload};

pub(super) fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 3, 10, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn record_from(pairs: Vec<(&str, FieldValue)>) -> OnboardingRecord {
    let mut store = FormStateStore::new();
    let partial: BTreeMap<String, FieldValue> = pairs
        .into_iter()
        .map(|(field, value)| (field.to_string(), value))
        .collect();
    store.update(partial);
    store.get().clone()
}

/// Fully filled catering application, the baseline happy path.
pub(super) fn catering_record() -> OnboardingRecord {
    record_from(vec![
        ("businessType", "catering".into()),
        ("ownerName", "Ayesha".into()),
        ("ownerMobile", "03001234567".into()),
        ("ownerEmail", "a@x.com".into()),
        ("managerName", "Hamza".into()),
        ("managerMobile", "03217654321".into()),
        ("managerEmail", "hamza@spiceco.pk".into()),
        ("businessName", "Spice Co".into()),
        ("city", "Karachi".into()),
        ("area", "Clifton".into()),
        ("address", "123 Street".into()),
        ("cancellationPolicy", "48hr notice".into()),
        (
            "cuisineTypes",
            FieldValue::from(vec!["Mughlai".to_string(), "Continental".to_string()]),
        ),
        ("minGuestOrder", "100".into()),
        ("liveStations", true.into()),
    ])
}

pub(super) fn complete_payload() -> SubmissionPayload {
    submission::build(BusinessType::Catering, &catering_record())
}

pub(super) fn build_service() -> (OnboardingService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = OnboardingService::new(repository.clone());
    (service, repository)
}

pub(super) fn onboarding_router_with_service(
    service: OnboardingService<MemoryRepository>,
) -> axum::Router {
    onboarding_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl SubmissionRepository for MemoryRepository {
    fn create(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn list(&self, filter: &SubmissionFilter) -> Result<SubmissionPage, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let matching: Vec<SubmissionRecord> = guard
            .iter()
            .filter(|record| {
                filter
                    .status
                    .map(|status| record.status() == status)
                    .unwrap_or(true)
            })
            .filter(|record| {
                filter
                    .business_type
                    .map(|business_type| {
                        record.payload.business_type == business_type.external_tag()
                    })
                    .unwrap_or(true)
            })
            .cloned()
            .collect();

        let total = matching.len();
        let limit = filter.limit.max(1);
        let page = filter.page.max(1);
        let total_pages = (total + limit - 1) / limit;
        let items = matching
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        Ok(SubmissionPage {
            items,
            pagination: PageInfo {
                page,
                limit,
                total,
                total_pages,
            },
        })
    }

    fn update(&self, record: SubmissionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn create(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _filter: &SubmissionFilter) -> Result<SubmissionPage, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: SubmissionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
