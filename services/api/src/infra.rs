use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use mehfil::onboarding::{
    PageInfo, RepositoryError, SubmissionFilter, SubmissionId, SubmissionPage, SubmissionRecord,
    SubmissionRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local stand-in for the marketplace database, good enough for
/// demos and tests.
#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
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
                    .map(|kind| record.payload.business_type == kind.external_tag())
                    .unwrap_or(true)
            })
            .cloned()
            .collect();

        let total = matching.len();
        let limit = filter.limit.max(1);
        let page = filter.page.max(1);
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
                total_pages: (total + limit - 1) / limit,
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
