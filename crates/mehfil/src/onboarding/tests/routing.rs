use super::common::*;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use crate::onboarding::domain::SubmissionStatus;

fn post_request(payload: &crate::onboarding::submission::SubmissionPayload) -> Request<Body> {
    Request::post("/api/v1/partner-onboarding")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn intake_route_accepts_complete_payloads() {
    let (service, _) = build_service();
    let router = onboarding_router_with_service(service);

    let response = router
        .oneshot(post_request(&complete_payload()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body.get("success"), Some(&serde_json::json!(true)));
    assert!(body
        .get("id")
        .and_then(serde_json::Value::as_str)
        .map(|id| id.starts_with("sub-"))
        .unwrap_or(false));
}

#[tokio::test]
async fn intake_route_rejects_incomplete_payloads() {
    let (service, _) = build_service();
    let router = onboarding_router_with_service(service);

    let mut payload = complete_payload();
    payload.owner_name = None;
    payload.owner_email = Some("".to_string());

    let response = router
        .oneshot(post_request(&payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body.get("success"), Some(&serde_json::json!(false)));
    let missing: Vec<&str> = body
        .get("missingFields")
        .and_then(serde_json::Value::as_array)
        .expect("missing field list")
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();
    assert!(missing.contains(&"ownerName"));
    assert!(missing.contains(&"ownerEmail"));
}

#[tokio::test]
async fn intake_route_reports_storage_failures_opaquely() {
    let service = crate::onboarding::service::OnboardingService::new(std::sync::Arc::new(
        UnavailableRepository,
    ));
    let router = crate::onboarding::router::onboarding_router(std::sync::Arc::new(service));

    let response = router
        .oneshot(post_request(&complete_payload()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("error"),
        Some(&serde_json::json!("internal error"))
    );
}

#[tokio::test]
async fn listing_requires_an_admin_session() {
    let (service, _) = build_service();
    let router = onboarding_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/partner-onboarding")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn support_role_without_grants_is_denied() {
    let (service, _) = build_service();
    let router = onboarding_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/partner-onboarding")
                .header("x-session-user", "bilal")
                .header("x-session-role", "support")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn support_role_with_a_grant_is_admitted() {
    let (service, _) = build_service();
    let router = onboarding_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/partner-onboarding")
                .header("x-session-user", "bilal")
                .header("x-session-role", "support")
                .header("x-session-grants", "review_submissions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn listing_returns_views_and_pagination() {
    let (service, _) = build_service();
    service
        .submit(complete_payload(), submitted_at())
        .expect("submission succeeds");
    let router = onboarding_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/partner-onboarding?status=PENDING&businessType=CATERING")
                .header("x-session-user", "maryam")
                .header("x-session-role", "moderator")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let items = body
        .get("items")
        .and_then(serde_json::Value::as_array)
        .expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get("businessName"),
        Some(&serde_json::json!("Spice Co"))
    );
    assert_eq!(items[0].get("status"), Some(&serde_json::json!("PENDING")));
    assert_eq!(
        body.get("pagination").and_then(|p| p.get("total")),
        Some(&serde_json::json!(1))
    );
}

#[tokio::test]
async fn listing_rejects_unknown_filters() {
    let (service, _) = build_service();
    let router = onboarding_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/partner-onboarding?status=SHIPPED")
                .header("x-session-user", "maryam")
                .header("x-session-role", "moderator")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn review_route_updates_status() {
    let (service, _) = build_service();
    let stored = service
        .submit(complete_payload(), submitted_at())
        .expect("submission succeeds");
    let router = onboarding_router_with_service(service);

    let uri = format!("/api/v1/partner-onboarding/{}/status", stored.id.0);
    let response = router
        .oneshot(
            Request::patch(&uri)
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-session-user", "maryam")
                .header("x-session-role", "moderator")
                .body(Body::from(
                    serde_json::to_vec(&serde_json::json!({
                        "status": "UNDER_REVIEW",
                        "adminNotes": "call the owner",
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("status"),
        Some(&serde_json::json!(SubmissionStatus::UnderReview.tag()))
    );
    // The acting session is recorded when the body names nobody.
    assert_eq!(body.get("reviewedBy"), Some(&serde_json::json!("maryam")));
}

#[tokio::test]
async fn review_route_reports_unknown_ids() {
    let (service, _) = build_service();
    let router = onboarding_router_with_service(service);

    let response = router
        .oneshot(
            Request::patch("/api/v1/partner-onboarding/sub-999999/status")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-session-user", "maryam")
                .header("x-session-role", "moderator")
                .body(Body::from(
                    serde_json::to_vec(&serde_json::json!({ "status": "CONTACTED" })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
