//! Cost models for AI screening and human recruiter screening.
//!
//! Both models are pure functions of validated inputs and a resolved exchange rate.
//! [`CostEstimator`] ties them to the rate provider for one evaluation cycle and
//! [`estimate_router`] exposes the same operations over HTTP.

pub mod ai;
pub mod currency;
pub mod formulas;
pub mod inputs;
pub mod recruiter;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use ai::{compute_ai_screening_cost, AiScreeningCost, COST_PER_REQUEST_USD};
pub use currency::{Currency, DualAmount, ExchangeRate, InvalidExchangeRate, Money};
pub use formulas::{formula_groups, FormulaGroup};
pub use inputs::{AiScreeningInputs, InputDomainViolation, RecruiterInputs};
pub use recruiter::{
    compute_recruiter_cost, CapacityStatus, RecruiterCostBreakdown, WORKING_HOURS_PER_MONTH,
    WORKING_MINUTES_PER_MONTH,
};
pub use router::estimate_router;
pub use service::{
    AiScreeningEstimate, Comparison, ComparisonRequest, CostEstimator, RecruiterEstimate,
};
