use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{patch, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::auth::{self, Capability, Role, Session};

use super::domain::{BusinessType, SubmissionStatus};
use super::repository::{
    RepositoryError, StatusChange, SubmissionFilter, SubmissionId, SubmissionRepository,
};
use super::service::{OnboardingService, OnboardingServiceError};

pub const DEFAULT_PAGE_LIMIT: usize = 20;
pub const MAX_PAGE_LIMIT: usize = 100;

/// Router builder for the partner-onboarding HTTP surface. Intake is
/// public; listing and review are admin-gated.
pub fn onboarding_router<R>(service: Arc<OnboardingService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/partner-onboarding",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/partner-onboarding/:submission_id/status",
            patch(review_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListingQuery {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    business_type: Option<String>,
    #[serde(default)]
    page: Option<usize>,
    #[serde(default)]
    limit: Option<usize>,
}

/// Identity resolved upstream and forwarded in headers. Absence means
/// an unauthenticated caller.
fn session_from_headers(headers: &HeaderMap) -> Option<Session> {
    let user = headers.get("x-session-user")?.to_str().ok()?.to_string();
    let role = Role::parse(headers.get("x-session-role")?.to_str().ok()?)?;

    let grants: Vec<Capability> = headers
        .get("x-session-grants")
        .and_then(|value| value.to_str().ok())
        .map(|raw| raw.split(',').filter_map(Capability::parse).collect())
        .unwrap_or_default();

    Some(Session::new(user, role).with_grants(grants))
}

fn admin_gate(headers: &HeaderMap) -> Result<Session, Response> {
    match session_from_headers(headers) {
        Some(session) if auth::can_access_admin(&session) => Ok(session),
        _ => {
            let payload = json!({ "error": "admin access required" });
            Err((StatusCode::FORBIDDEN, axum::Json(payload)).into_response())
        }
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    axum::Json(payload): axum::Json<super::submission::SubmissionPayload>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.submit(payload, Utc::now()) {
        Ok(record) => {
            let body = json!({
                "success": true,
                "id": record.id.0,
            });
            (StatusCode::CREATED, axum::Json(body)).into_response()
        }
        Err(OnboardingServiceError::Incomplete(missing)) => {
            let body = json!({
                "success": false,
                "error": "missing required fields",
                "missingFields": missing,
            });
            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        }
        Err(OnboardingServiceError::UnknownBusinessType(tag)) => {
            let body = json!({
                "success": false,
                "error": format!("unknown business type: {tag}"),
            });
            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        }
        Err(_) => {
            let body = json!({ "success": false, "error": "internal error" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    headers: HeaderMap,
    Query(query): Query<ListingQuery>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    if let Err(denied) = admin_gate(&headers) {
        return denied;
    }

    let status = match &query.status {
        Some(raw) => match SubmissionStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                let body = json!({ "error": format!("unknown status: {raw}") });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }
        },
        None => None,
    };

    let business_type = match &query.business_type {
        Some(raw) => match BusinessType::from_external_tag(raw) {
            Some(business_type) => Some(business_type),
            None => {
                let body = json!({ "error": format!("unknown business type: {raw}") });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }
        },
        None => None,
    };

    let filter = SubmissionFilter {
        status,
        business_type,
        page: query.page.unwrap_or(1).max(1),
        limit: query
            .limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT),
    };

    match service.list(&filter) {
        Ok(page) => {
            let items: Vec<_> = page
                .items
                .iter()
                .map(|record| record.summary_view())
                .collect();
            let body = json!({
                "items": items,
                "pagination": page.pagination,
            });
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => {
            let body = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
        }
    }
}

pub(crate) async fn review_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    headers: HeaderMap,
    Path(submission_id): Path<String>,
    axum::Json(change): axum::Json<StatusChange>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let session = match admin_gate(&headers) {
        Ok(session) => session,
        Err(denied) => return denied,
    };

    let change = StatusChange {
        status: change.status,
        admin_notes: change.admin_notes,
        reviewed_by: change.reviewed_by.or(Some(session.user)),
    };

    let id = SubmissionId(submission_id);
    match service.review_status(&id, change, Utc::now()) {
        Ok(record) => (StatusCode::OK, axum::Json(record.summary_view())).into_response(),
        Err(OnboardingServiceError::Repository(RepositoryError::NotFound)) => {
            let body = json!({ "error": "submission not found" });
            (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
        }
        Err(error) => {
            let body = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
        }
    }
}
