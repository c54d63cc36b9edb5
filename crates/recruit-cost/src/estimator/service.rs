use super::ai::{compute_ai_screening_cost, AiScreeningCost};
use super::inputs::{AiScreeningInputs, InputDomainViolation, RecruiterInputs};
use super::recruiter::{compute_recruiter_cost, RecruiterCostBreakdown};
use super::views::{AiScreeningEstimateView, ComparisonView, RateView, RecruiterEstimateView};
use crate::rates::{ExchangeRateProvider, RateResolution, RateSource};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AiScreeningEstimate {
    pub rate: RateResolution,
    pub cost: AiScreeningCost,
}

impl AiScreeningEstimate {
    pub fn view(&self) -> AiScreeningEstimateView {
        AiScreeningEstimateView {
            exchange_rate: RateView::from(&self.rate),
            ai_screening: (&self.cost).into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecruiterEstimate {
    pub rate: RateResolution,
    pub breakdown: RecruiterCostBreakdown,
}

impl RecruiterEstimate {
    pub fn view(&self) -> RecruiterEstimateView {
        RecruiterEstimateView {
            exchange_rate: RateView::from(&self.rate),
            recruiter: (&self.breakdown).into(),
        }
    }
}

/// Both models evaluated against a single rate resolution.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub rate: RateResolution,
    pub ai_screening: AiScreeningCost,
    pub recruiter: RecruiterCostBreakdown,
}

impl Comparison {
    pub fn view(&self) -> ComparisonView {
        ComparisonView {
            exchange_rate: RateView::from(&self.rate),
            ai_screening: (&self.ai_screening).into(),
            recruiter: (&self.recruiter).into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ComparisonRequest {
    pub ai_screening: AiScreeningInputs,
    pub recruiter: RecruiterInputs,
}

/// Runs one evaluation cycle: validate, resolve the rate once, apply the models.
pub struct CostEstimator<S> {
    rates: ExchangeRateProvider<S>,
}

impl<S: RateSource> CostEstimator<S> {
    pub fn new(rates: ExchangeRateProvider<S>) -> Self {
        Self { rates }
    }

    pub async fn exchange_rate(&self) -> RateResolution {
        self.rates.resolve().await
    }

    pub async fn ai_screening(
        &self,
        inputs: AiScreeningInputs,
    ) -> Result<AiScreeningEstimate, InputDomainViolation> {
        inputs.validate()?;
        let rate = self.rates.resolve().await;
        let cost = compute_ai_screening_cost(&inputs, rate.rate())?;

        info!(
            candidates = inputs.candidate_count,
            currency = %inputs.currency,
            total = cost.total.amount,
            "ai screening estimate computed"
        );

        Ok(AiScreeningEstimate { rate, cost })
    }

    pub async fn recruiter(
        &self,
        inputs: RecruiterInputs,
    ) -> Result<RecruiterEstimate, InputDomainViolation> {
        inputs.validate()?;
        let rate = self.rates.resolve().await;
        let breakdown = compute_recruiter_cost(&inputs, rate.rate())?;

        info!(
            candidates = inputs.candidate_count,
            team_size = inputs.team_size,
            capacity_exceeded = breakdown.capacity.is_exceeded(),
            total_egp = breakdown.total_cost.egp,
            "recruiter estimate computed"
        );

        Ok(RecruiterEstimate { rate, breakdown })
    }

    pub async fn compare(
        &self,
        request: ComparisonRequest,
    ) -> Result<Comparison, InputDomainViolation> {
        request.ai_screening.validate()?;
        request.recruiter.validate()?;

        let rate = self.rates.resolve().await;
        let ai_screening = compute_ai_screening_cost(&request.ai_screening, rate.rate())?;
        let recruiter = compute_recruiter_cost(&request.recruiter, rate.rate())?;

        Ok(Comparison {
            rate,
            ai_screening,
            recruiter,
        })
    }
}
