use super::{RateFetchError, RateSource};
use crate::estimator::currency::ExchangeRate;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const FALLBACK_WARNING: &str =
    "Could not fetch exchange rates. Defaulting to 1 USD = 15.7 EGP.";

/// Outcome of one rate resolution. Callers can tell a live rate from the fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum RateResolution {
    Live {
        rate: ExchangeRate,
        fetched_at: DateTime<Utc>,
        cached: bool,
    },
    Fallback {
        rate: ExchangeRate,
        reason: RateFetchError,
    },
}

impl RateResolution {
    pub fn rate(&self) -> ExchangeRate {
        match self {
            Self::Live { rate, .. } | Self::Fallback { rate, .. } => *rate,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.is_fallback().then_some(FALLBACK_WARNING)
    }
}

#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: ExchangeRate,
    fetched_at: DateTime<Utc>,
    stored: Instant,
}

/// Resolves the USD to EGP rate and never fails.
pub struct ExchangeRateProvider<S> {
    source: S,
    cache_ttl: Duration,
    cache: Mutex<Option<CachedRate>>,
}

impl<S: RateSource> ExchangeRateProvider<S> {
    pub fn new(source: S) -> Self {
        Self::with_cache_ttl(source, Duration::ZERO)
    }

    pub fn with_cache_ttl(source: S, cache_ttl: Duration) -> Self {
        Self {
            source,
            cache_ttl,
            cache: Mutex::new(None),
        }
    }

    pub async fn resolve(&self) -> RateResolution {
        if let Some(cached) = self.fresh_cached() {
            debug!(rate = cached.rate.egp_per_usd(), "reusing cached exchange rate");
            return RateResolution::Live {
                rate: cached.rate,
                fetched_at: cached.fetched_at,
                cached: true,
            };
        }

        match self.source.fetch_usd_to_egp().await {
            Ok(rate) => {
                let fetched_at = Utc::now();
                debug!(
                    rate = rate.egp_per_usd(),
                    source = %self.source.describe(),
                    "resolved live exchange rate"
                );
                self.store(CachedRate {
                    rate,
                    fetched_at,
                    stored: Instant::now(),
                });
                RateResolution::Live {
                    rate,
                    fetched_at,
                    cached: false,
                }
            }
            Err(reason) => {
                warn!(
                    source = %self.source.describe(),
                    error = %reason,
                    fallback = ExchangeRate::FALLBACK.egp_per_usd(),
                    "exchange rate lookup failed, using fallback"
                );
                RateResolution::Fallback {
                    rate: ExchangeRate::FALLBACK,
                    reason,
                }
            }
        }
    }

    fn fresh_cached(&self) -> Option<CachedRate> {
        if self.cache_ttl.is_zero() {
            return None;
        }
        let guard = self.cache.lock().ok()?;
        guard.filter(|cached| cached.stored.elapsed() < self.cache_ttl)
    }

    fn store(&self, entry: CachedRate) {
        if self.cache_ttl.is_zero() {
            return;
        }
        if let Ok(mut guard) = self.cache.lock() {
            *guard = Some(entry);
        }
    }
}
