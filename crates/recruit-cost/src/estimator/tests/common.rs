use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::estimator::currency::ExchangeRate;
use crate::estimator::service::CostEstimator;
use crate::rates::{ExchangeRateProvider, FixedRateSource, RateFetchError, RateSource};

/// Source that always fails, standing in for an unreachable rate service.
#[derive(Debug, Default)]
pub(super) struct OfflineSource;

#[async_trait]
impl RateSource for OfflineSource {
    async fn fetch_usd_to_egp(&self) -> Result<ExchangeRate, RateFetchError> {
        Err(RateFetchError::Transport("network unreachable".to_string()))
    }

    fn describe(&self) -> String {
        "offline stub".to_string()
    }
}

pub(super) fn fixed_rate(value: f64) -> FixedRateSource {
    FixedRateSource(ExchangeRate::new(value).expect("valid rate"))
}

pub(super) fn estimator_with_rate(value: f64) -> Arc<CostEstimator<FixedRateSource>> {
    let provider = ExchangeRateProvider::new(fixed_rate(value));
    Arc::new(CostEstimator::new(provider))
}

pub(super) fn offline_estimator() -> Arc<CostEstimator<OfflineSource>> {
    Arc::new(CostEstimator::new(ExchangeRateProvider::new(OfflineSource)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
