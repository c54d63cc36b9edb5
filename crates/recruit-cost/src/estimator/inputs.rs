use super::currency::Currency;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const CANDIDATE_COUNT_RANGE: RangeInclusive<u32> = 1..=50_000;
pub const REQUESTS_PER_CANDIDATE_RANGE: RangeInclusive<u32> = 5..=20;
pub const MARKUP_PERCENT_RANGE: RangeInclusive<u32> = 0..=100;
pub const MONTHLY_SALARY_EGP_RANGE: RangeInclusive<u32> = 5_000..=30_000;
pub const TEAM_SIZE_RANGE: RangeInclusive<u32> = 1..=20;
pub const PROCESSING_MINUTES_RANGE: RangeInclusive<u32> = 1..=30;

/// An input outside its declared range. Raised instead of clamping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must be between {min} and {max}, got {value}")]
pub struct InputDomainViolation {
    pub field: &'static str,
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

fn check(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), InputDomainViolation> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(InputDomainViolation {
            field,
            value: i64::from(value),
            min: i64::from(*range.start()),
            max: i64::from(*range.end()),
        })
    }
}

/// Parameters for the AI screening model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiScreeningInputs {
    pub candidate_count: u32,
    pub requests_per_candidate: u32,
    pub markup_percent: u32,
    pub currency: Currency,
}

impl Default for AiScreeningInputs {
    fn default() -> Self {
        Self {
            candidate_count: 100,
            requests_per_candidate: 10,
            markup_percent: 45,
            currency: Currency::Usd,
        }
    }
}

impl AiScreeningInputs {
    pub fn validate(&self) -> Result<(), InputDomainViolation> {
        check("candidate_count", self.candidate_count, &CANDIDATE_COUNT_RANGE)?;
        check(
            "requests_per_candidate",
            self.requests_per_candidate,
            &REQUESTS_PER_CANDIDATE_RANGE,
        )?;
        check("markup_percent", self.markup_percent, &MARKUP_PERCENT_RANGE)
    }
}

/// Parameters for the human recruiter model. Salary is EGP per recruiter per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecruiterInputs {
    pub monthly_salary_egp: u32,
    pub team_size: u32,
    pub processing_minutes_per_candidate: u32,
    pub candidate_count: u32,
}

impl Default for RecruiterInputs {
    fn default() -> Self {
        Self {
            monthly_salary_egp: 12_000,
            team_size: 5,
            processing_minutes_per_candidate: 5,
            candidate_count: 100,
        }
    }
}

impl RecruiterInputs {
    pub fn validate(&self) -> Result<(), InputDomainViolation> {
        check(
            "monthly_salary_egp",
            self.monthly_salary_egp,
            &MONTHLY_SALARY_EGP_RANGE,
        )?;
        check("team_size", self.team_size, &TEAM_SIZE_RANGE)?;
        check(
            "processing_minutes_per_candidate",
            self.processing_minutes_per_candidate,
            &PROCESSING_MINUTES_RANGE,
        )?;
        check("candidate_count", self.candidate_count, &CANDIDATE_COUNT_RANGE)
    }
}
