use serde::{Deserialize, Serialize};
use std::fmt;

/// The two currencies the estimator reports in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Egp,
}

impl Currency {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Egp => "EGP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EGP" => Ok(Self::Egp),
            other => Err(format!("unsupported currency '{other}', expected USD or EGP")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("exchange rate must be a positive finite number, got {0}")]
pub struct InvalidExchangeRate(pub f64);

/// EGP per 1 USD. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    /// Used whenever the live lookup fails.
    pub const FALLBACK: ExchangeRate = ExchangeRate(15.7);

    pub fn new(egp_per_usd: f64) -> Result<Self, InvalidExchangeRate> {
        if egp_per_usd.is_finite() && egp_per_usd > 0.0 {
            Ok(Self(egp_per_usd))
        } else {
            Err(InvalidExchangeRate(egp_per_usd))
        }
    }

    pub const fn egp_per_usd(self) -> f64 {
        self.0
    }

    pub fn usd_to_egp(self, usd: f64) -> f64 {
        usd * self.0
    }

    pub fn egp_to_usd(self, egp: f64) -> f64 {
        egp / self.0
    }

    /// Express a USD amount in `currency`.
    pub fn express_usd(self, usd: f64, currency: Currency) -> Money {
        let amount = match currency {
            Currency::Usd => usd,
            Currency::Egp => self.usd_to_egp(usd),
        };
        Money { amount, currency }
    }
}

impl<'de> Deserialize<'de> for ExchangeRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        ExchangeRate::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A monetary amount tagged with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: Currency,
}

impl Money {
    pub fn display(&self) -> String {
        format!("{:.2} {}", self.amount, self.currency)
    }
}

/// An EGP-native amount with its USD equivalent at the resolved rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualAmount {
    pub egp: f64,
    pub usd: f64,
}

impl DualAmount {
    pub fn from_egp(egp: f64, rate: ExchangeRate) -> Self {
        Self {
            egp,
            usd: rate.egp_to_usd(egp),
        }
    }

    pub fn display(&self) -> String {
        format!("{:.2} EGP ({:.2} USD)", self.egp, self.usd)
    }
}
