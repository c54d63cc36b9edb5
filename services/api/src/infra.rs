use metrics_exporter_prometheus::PrometheusHandle;
use recruit_cost::config::ExchangeRateConfig;
use recruit_cost::estimator::CostEstimator;
use recruit_cost::rates::{ExchangeRateProvider, HttpRateSource};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn live_estimator(config: &ExchangeRateConfig) -> CostEstimator<HttpRateSource> {
    let source = HttpRateSource::new(config.endpoint.clone());
    CostEstimator::new(ExchangeRateProvider::with_cache_ttl(
        source,
        config.cache_ttl,
    ))
}
