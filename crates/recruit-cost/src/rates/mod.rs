//! USD to EGP rate resolution with a fixed fallback.
//!
//! A [`RateSource`] performs the actual lookup and may fail. The
//! [`ExchangeRateProvider`] wraps a source, absorbs every failure into
//! [`RateResolution::Fallback`], and optionally reuses a recent live rate.

mod http;
mod provider;

pub use http::HttpRateSource;
pub use provider::{ExchangeRateProvider, RateResolution, FALLBACK_WARNING};

use crate::estimator::currency::{ExchangeRate, InvalidExchangeRate};
use async_trait::async_trait;

/// Reasons a live lookup did not produce a usable rate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateFetchError {
    #[error("rate service unreachable: {0}")]
    Transport(String),
    #[error("rate service responded with HTTP {0}")]
    Status(u16),
    #[error("rate service returned a malformed body: {0}")]
    Malformed(String),
    #[error("rate service response has no EGP rate")]
    MissingEgpRate,
    #[error(transparent)]
    InvalidRate(#[from] InvalidExchangeRate),
}

/// Lookup boundary so the provider can be exercised without the network.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_usd_to_egp(&self) -> Result<ExchangeRate, RateFetchError>;

    /// Short human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Source that always answers with the same rate; backs the CLI `--rate` override.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateSource(pub ExchangeRate);

#[async_trait]
impl RateSource for FixedRateSource {
    async fn fetch_usd_to_egp(&self) -> Result<ExchangeRate, RateFetchError> {
        Ok(self.0)
    }

    fn describe(&self) -> String {
        format!("fixed rate {}", self.0.egp_per_usd())
    }
}
