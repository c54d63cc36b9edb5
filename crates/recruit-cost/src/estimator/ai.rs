use super::currency::{ExchangeRate, Money};
use super::inputs::{AiScreeningInputs, InputDomainViolation};
use serde::Serialize;

/// Price of a single model request in USD.
pub const COST_PER_REQUEST_USD: f64 = 0.008;

/// AI screening cost in the currency the caller selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiScreeningCost {
    pub inputs: AiScreeningInputs,
    pub base_cost_per_candidate_usd: f64,
    pub per_candidate: Money,
    pub total: Money,
}

pub fn compute_ai_screening_cost(
    inputs: &AiScreeningInputs,
    rate: ExchangeRate,
) -> Result<AiScreeningCost, InputDomainViolation> {
    inputs.validate()?;

    let base_cost_per_candidate_usd =
        f64::from(inputs.requests_per_candidate) * COST_PER_REQUEST_USD;
    let markup_factor = 1.0 + f64::from(inputs.markup_percent) / 100.0;
    let final_cost_per_candidate_usd = base_cost_per_candidate_usd * markup_factor;
    let total_cost_usd = final_cost_per_candidate_usd * f64::from(inputs.candidate_count);

    Ok(AiScreeningCost {
        inputs: *inputs,
        base_cost_per_candidate_usd,
        per_candidate: rate.express_usd(final_cost_per_candidate_usd, inputs.currency),
        total: rate.express_usd(total_cost_usd, inputs.currency),
    })
}
