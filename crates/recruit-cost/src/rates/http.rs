use super::{RateFetchError, RateSource};
use crate::estimator::currency::ExchangeRate;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Only `rates.EGP` is read; other currencies in the payload are ignored whatever their shape.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: QuotedRates,
}

#[derive(Debug, Deserialize)]
struct QuotedRates {
    #[serde(rename = "EGP")]
    egp: Option<f64>,
}

/// Queries a "latest rates, USD base" endpoint and reads `rates.EGP`.
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    client: Client,
    endpoint: String,
}

impl HttpRateSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn fetch_usd_to_egp(&self) -> Result<ExchangeRate, RateFetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| RateFetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateFetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| RateFetchError::Transport(err.to_string()))?;
        let payload: LatestRatesResponse = serde_json::from_slice(&body)
            .map_err(|err| RateFetchError::Malformed(err.to_string()))?;

        let egp = payload.rates.egp.ok_or(RateFetchError::MissingEgpRate)?;

        ExchangeRate::new(egp).map_err(RateFetchError::InvalidRate)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
