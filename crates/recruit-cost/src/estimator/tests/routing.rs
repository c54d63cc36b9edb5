use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::estimator::router::estimate_router;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn ai_screening_route_returns_selected_currency() {
    let router = estimate_router(estimator_with_rate(15.7));

    let response = router
        .oneshot(post_json(
            "/api/v1/estimates/ai-screening",
            json!({
                "candidate_count": 100,
                "requests_per_candidate": 10,
                "markup_percent": 45,
                "currency": "USD"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["exchange_rate"]["source"], "live");
    assert_eq!(body["ai_screening"]["total"]["currency"], "USD");
    assert_eq!(body["ai_screening"]["total"]["display"], "11.60 USD");
    assert_eq!(body["ai_screening"]["per_candidate"]["display"], "0.12 USD");
}

#[tokio::test]
async fn recruiter_route_reports_capacity_advisory() {
    let router = estimate_router(estimator_with_rate(15.7));

    let response = router
        .oneshot(post_json(
            "/api/v1/estimates/recruiter",
            json!({
                "monthly_salary_egp": 12000,
                "team_size": 5,
                "processing_minutes_per_candidate": 5,
                "candidate_count": 50000
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["recruiter"]["capacity"]["status"], "exceeded");
    assert_eq!(body["recruiter"]["max_candidates_display"], 10560);
    assert_eq!(body["recruiter"]["hourly_wage"]["display"], "68.18 EGP (4.34 USD)");
    let total_egp = body["recruiter"]["total_cost"]["egp"]
        .as_f64()
        .expect("numeric total");
    assert!(close(total_egp, 60_000.0));
}

#[tokio::test]
async fn out_of_range_input_is_unprocessable() {
    let router = estimate_router(estimator_with_rate(15.7));

    let response = router
        .oneshot(post_json(
            "/api/v1/estimates/recruiter",
            json!({ "processing_minutes_per_candidate": 0 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["field"], "processing_minutes_per_candidate");
}

#[tokio::test]
async fn compare_route_applies_defaults_to_missing_sections() {
    let router = estimate_router(offline_estimator());

    let response = router
        .oneshot(post_json(
            "/api/v1/estimates/compare",
            json!({ "ai_screening": { "currency": "EGP" } }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["exchange_rate"]["source"], "fallback");
    assert_eq!(body["exchange_rate"]["egp_per_usd"], 15.7);
    assert_eq!(body["ai_screening"]["total"]["display"], "182.12 EGP");
    assert_eq!(body["recruiter"]["capacity"]["status"], "sufficient");
}

#[tokio::test]
async fn exchange_rate_route_surfaces_fallback_warning() {
    let router = estimate_router(offline_estimator());

    let response = router
        .oneshot(
            Request::get("/api/v1/exchange-rate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body["warning"],
        "Could not fetch exchange rates. Defaulting to 1 USD = 15.7 EGP."
    );
    assert!(body["failure_reason"]
        .as_str()
        .expect("reason present")
        .contains("network unreachable"));
}

#[tokio::test]
async fn formulas_route_lists_four_groups() {
    let router = estimate_router(estimator_with_rate(15.7));

    let response = router
        .oneshot(Request::get("/api/v1/formulas").body(Body::empty()).unwrap())
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let groups = body["groups"].as_array().expect("groups array");
    assert_eq!(groups.len(), 4);
    assert_eq!(groups[0]["title"], "AI Screening Cost");
}

#[tokio::test]
async fn negative_candidate_count_names_the_field() {
    let router = estimate_router(estimator_with_rate(15.7));

    let response = router
        .oneshot(post_json(
            "/api/v1/estimates/ai-screening",
            json!({ "candidate_count": -5 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["field"], "candidate_count");
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("-5"));
}

#[tokio::test]
async fn unsupported_currency_names_the_field() {
    let router = estimate_router(estimator_with_rate(15.7));

    let response = router
        .oneshot(post_json(
            "/api/v1/estimates/ai-screening",
            json!({ "currency": "EUR" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["field"], "currency");
}

#[tokio::test]
async fn compare_reports_nested_field_path() {
    let router = estimate_router(estimator_with_rate(15.7));

    let response = router
        .oneshot(post_json(
            "/api/v1/estimates/compare",
            json!({ "recruiter": { "team_size": 5_000_000_000u64 } }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["field"], "recruiter.team_size");
}

#[tokio::test]
async fn malformed_json_is_a_json_error_without_field() {
    let router = estimate_router(estimator_with_rate(15.7));

    let response = router
        .oneshot(
            Request::post("/api/v1/estimates/recruiter")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"team_size\":"))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["field"].is_null());
    assert!(body["error"].is_string());
}
