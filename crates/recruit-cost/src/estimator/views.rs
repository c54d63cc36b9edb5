use super::ai::AiScreeningCost;
use super::currency::{DualAmount, Money};
use super::recruiter::{CapacityStatus, RecruiterCostBreakdown};
use crate::rates::RateResolution;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSourceKind {
    Live,
    Cached,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct RateView {
    pub egp_per_usd: f64,
    pub source: RateSourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl From<&RateResolution> for RateView {
    fn from(resolution: &RateResolution) -> Self {
        match resolution {
            RateResolution::Live {
                rate,
                fetched_at,
                cached,
            } => Self {
                egp_per_usd: rate.egp_per_usd(),
                source: if *cached {
                    RateSourceKind::Cached
                } else {
                    RateSourceKind::Live
                },
                fetched_at: Some(*fetched_at),
                warning: None,
                failure_reason: None,
            },
            RateResolution::Fallback { rate, reason } => Self {
                egp_per_usd: rate.egp_per_usd(),
                source: RateSourceKind::Fallback,
                fetched_at: None,
                warning: resolution.warning(),
                failure_reason: Some(reason.to_string()),
            },
        }
    }
}

/// Money with its two-decimal rendering alongside the raw value.
#[derive(Debug, Clone, Serialize)]
pub struct MoneyView {
    #[serde(flatten)]
    pub money: Money,
    pub display: String,
}

impl From<Money> for MoneyView {
    fn from(money: Money) -> Self {
        Self {
            display: money.display(),
            money,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DualAmountView {
    #[serde(flatten)]
    pub amount: DualAmount,
    pub display: String,
}

impl From<DualAmount> for DualAmountView {
    fn from(amount: DualAmount) -> Self {
        Self {
            display: amount.display(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AiScreeningView {
    pub candidate_count: u32,
    pub requests_per_candidate: u32,
    pub markup_percent: u32,
    pub per_candidate: MoneyView,
    pub total: MoneyView,
}

impl From<&AiScreeningCost> for AiScreeningView {
    fn from(cost: &AiScreeningCost) -> Self {
        Self {
            candidate_count: cost.inputs.candidate_count,
            requests_per_candidate: cost.inputs.requests_per_candidate,
            markup_percent: cost.inputs.markup_percent,
            per_candidate: cost.per_candidate.into(),
            total: cost.total.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecruiterView {
    pub team_size: u32,
    pub candidate_count: u32,
    pub hourly_wage: DualAmountView,
    pub cost_per_candidate: DualAmountView,
    pub max_candidates_processed: f64,
    pub max_candidates_display: u64,
    pub billed_candidates: f64,
    pub billed_candidates_display: u64,
    pub total_cost: DualAmountView,
    pub total_team_salary: DualAmountView,
    pub capacity: CapacityStatus,
    pub advisory: String,
}

impl From<&RecruiterCostBreakdown> for RecruiterView {
    fn from(breakdown: &RecruiterCostBreakdown) -> Self {
        Self {
            team_size: breakdown.inputs.team_size,
            candidate_count: breakdown.inputs.candidate_count,
            hourly_wage: breakdown.hourly_wage.into(),
            cost_per_candidate: breakdown.cost_per_candidate.into(),
            max_candidates_processed: breakdown.max_candidates_processed,
            max_candidates_display: rounded_count(breakdown.max_candidates_processed),
            billed_candidates: breakdown.billed_candidates,
            billed_candidates_display: rounded_count(breakdown.billed_candidates),
            total_cost: breakdown.total_cost.into(),
            total_team_salary: breakdown.total_team_salary.into(),
            capacity: breakdown.capacity,
            advisory: breakdown.advisory(),
        }
    }
}

fn rounded_count(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

#[derive(Debug, Clone, Serialize)]
pub struct AiScreeningEstimateView {
    pub exchange_rate: RateView,
    pub ai_screening: AiScreeningView,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecruiterEstimateView {
    pub exchange_rate: RateView,
    pub recruiter: RecruiterView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub exchange_rate: RateView,
    pub ai_screening: AiScreeningView,
    pub recruiter: RecruiterView,
}
