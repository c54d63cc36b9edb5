use super::currency::{DualAmount, ExchangeRate};
use super::inputs::{InputDomainViolation, RecruiterInputs};
use serde::Serialize;

pub const WORKDAYS_PER_MONTH: u32 = 22;
pub const WORKING_HOURS_PER_DAY: u32 = 8;
pub const WORKING_HOURS_PER_MONTH: u32 = WORKDAYS_PER_MONTH * WORKING_HOURS_PER_DAY;
pub const WORKING_MINUTES_PER_MONTH: u32 = WORKING_HOURS_PER_MONTH * 60;

/// Whether a recruiting team can absorb the requested candidate volume in one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CapacityStatus {
    Sufficient,
    /// Costs cover only the serviceable candidates; `shortfall` were left unprocessed.
    Exceeded { shortfall: f64 },
}

impl CapacityStatus {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }
}

/// Full cost picture for a human recruiting team. Every amount is EGP-native with a USD twin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecruiterCostBreakdown {
    pub inputs: RecruiterInputs,
    pub hourly_wage: DualAmount,
    pub cost_per_candidate: DualAmount,
    /// Real-valued monthly throughput of the whole team; round only for display.
    pub max_candidates_processed: f64,
    pub billed_candidates: f64,
    pub total_cost: DualAmount,
    pub total_team_salary: DualAmount,
    pub capacity: CapacityStatus,
}

impl RecruiterCostBreakdown {
    pub fn advisory(&self) -> String {
        match self.capacity {
            CapacityStatus::Sufficient => format!(
                "The team of {} can process all {} candidates this month (capacity {:.0}).",
                self.inputs.team_size, self.inputs.candidate_count, self.max_candidates_processed
            ),
            CapacityStatus::Exceeded { shortfall } => format!(
                "Capacity exceeded: the team of {} can process at most {:.0} candidates per month, \
                 {} requested ({:.0} over). Costs cover the {:.0} serviceable candidates only.",
                self.inputs.team_size,
                self.max_candidates_processed,
                self.inputs.candidate_count,
                shortfall,
                self.billed_candidates
            ),
        }
    }
}

pub fn compute_recruiter_cost(
    inputs: &RecruiterInputs,
    rate: ExchangeRate,
) -> Result<RecruiterCostBreakdown, InputDomainViolation> {
    inputs.validate()?;

    let salary = f64::from(inputs.monthly_salary_egp);
    let minutes_per_candidate = f64::from(inputs.processing_minutes_per_candidate);
    let requested = f64::from(inputs.candidate_count);

    let hourly_wage_egp = salary / f64::from(WORKING_HOURS_PER_MONTH);
    let max_candidates_processed =
        f64::from(inputs.team_size) * f64::from(WORKING_MINUTES_PER_MONTH) / minutes_per_candidate;
    let cost_per_candidate_egp = hourly_wage_egp * (minutes_per_candidate / 60.0);

    let (billed_candidates, capacity) = if requested > max_candidates_processed {
        (
            max_candidates_processed,
            CapacityStatus::Exceeded {
                shortfall: requested - max_candidates_processed,
            },
        )
    } else {
        (requested, CapacityStatus::Sufficient)
    };

    let total_cost_egp = cost_per_candidate_egp * billed_candidates;
    let total_team_salary_egp = salary * f64::from(inputs.team_size);

    Ok(RecruiterCostBreakdown {
        inputs: *inputs,
        hourly_wage: DualAmount::from_egp(hourly_wage_egp, rate),
        cost_per_candidate: DualAmount::from_egp(cost_per_candidate_egp, rate),
        max_candidates_processed,
        billed_candidates,
        total_cost: DualAmount::from_egp(total_cost_egp, rate),
        total_team_salary: DualAmount::from_egp(total_team_salary_egp, rate),
        capacity,
    })
}
