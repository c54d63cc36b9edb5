use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::formulas::formula_groups;
use super::inputs::{AiScreeningInputs, InputDomainViolation, RecruiterInputs};
use super::service::{ComparisonRequest, CostEstimator};
use super::views::RateView;
use crate::rates::RateSource;

/// Router builder exposing the estimator over HTTP.
pub fn estimate_router<S>(service: Arc<CostEstimator<S>>) -> Router
where
    S: RateSource + 'static,
{
    Router::new()
        .route("/api/v1/exchange-rate", get(exchange_rate_handler::<S>))
        .route("/api/v1/formulas", get(formulas_handler))
        .route(
            "/api/v1/estimates/ai-screening",
            post(ai_screening_handler::<S>),
        )
        .route("/api/v1/estimates/recruiter", post(recruiter_handler::<S>))
        .route("/api/v1/estimates/compare", post(compare_handler::<S>))
        .with_state(service)
}

fn violation_response(error: InputDomainViolation) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "field": error.field,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

const JSON_DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Field path serde reported for a body that parsed as JSON but did not fit the input type.
fn rejected_field(message: &str) -> Option<&str> {
    let detail = message.strip_prefix(JSON_DATA_ERROR_PREFIX)?;
    let (path, _) = detail.split_once(": ")?;
    if path.is_empty() || path == "." || path.contains(char::is_whitespace) {
        return None;
    }
    Some(path)
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let message = rejection.body_text();
    let payload = json!({
        "error": message,
        "field": rejected_field(&message),
    });
    (rejection.status(), axum::Json(payload)).into_response()
}

pub(crate) async fn exchange_rate_handler<S>(
    State(service): State<Arc<CostEstimator<S>>>,
) -> Response
where
    S: RateSource + 'static,
{
    let resolution = service.exchange_rate().await;
    (StatusCode::OK, axum::Json(RateView::from(&resolution))).into_response()
}

pub(crate) async fn formulas_handler() -> Response {
    let payload = json!({ "groups": formula_groups() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn ai_screening_handler<S>(
    State(service): State<Arc<CostEstimator<S>>>,
    payload: Result<axum::Json<AiScreeningInputs>, JsonRejection>,
) -> Response
where
    S: RateSource + 'static,
{
    let axum::Json(inputs) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    match service.ai_screening(inputs).await {
        Ok(estimate) => (StatusCode::OK, axum::Json(estimate.view())).into_response(),
        Err(error) => violation_response(error),
    }
}

pub(crate) async fn recruiter_handler<S>(
    State(service): State<Arc<CostEstimator<S>>>,
    payload: Result<axum::Json<RecruiterInputs>, JsonRejection>,
) -> Response
where
    S: RateSource + 'static,
{
    let axum::Json(inputs) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    match service.recruiter(inputs).await {
        Ok(estimate) => (StatusCode::OK, axum::Json(estimate.view())).into_response(),
        Err(error) => violation_response(error),
    }
}

pub(crate) async fn compare_handler<S>(
    State(service): State<Arc<CostEstimator<S>>>,
    payload: Result<axum::Json<ComparisonRequest>, JsonRejection>,
) -> Response
where
    S: RateSource + 'static,
{
    let axum::Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    match service.compare(request).await {
        Ok(comparison) => (StatusCode::OK, axum::Json(comparison.view())).into_response(),
        Err(error) => violation_response(error),
    }
}
