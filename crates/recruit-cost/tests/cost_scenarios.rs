use recruit_cost::estimator::{
    compute_ai_screening_cost, compute_recruiter_cost, AiScreeningInputs, CapacityStatus,
    Currency, ExchangeRate, RecruiterInputs, COST_PER_REQUEST_USD, WORKING_HOURS_PER_MONTH,
};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

fn ai_inputs(currency: Currency) -> AiScreeningInputs {
    AiScreeningInputs {
        candidate_count: 100,
        requests_per_candidate: 10,
        markup_percent: 45,
        currency,
    }
}

#[test]
fn ai_screening_in_usd_matches_worked_example() {
    let cost = compute_ai_screening_cost(&ai_inputs(Currency::Usd), ExchangeRate::FALLBACK)
        .expect("valid inputs");

    assert_close(cost.per_candidate.amount, 0.116, 1e-12);
    assert_close(cost.total.amount, 11.6, 1e-9);
    assert_eq!(cost.per_candidate.currency, Currency::Usd);
    assert_eq!(cost.total.display(), "11.60 USD");
}

#[test]
fn ai_screening_in_egp_matches_worked_example() {
    let cost = compute_ai_screening_cost(&ai_inputs(Currency::Egp), ExchangeRate::FALLBACK)
        .expect("valid inputs");

    assert_close(cost.per_candidate.amount, 1.8212, 1e-9);
    assert_close(cost.total.amount, 182.12, 1e-9);
    assert_eq!(cost.total.currency, Currency::Egp);
}

#[test]
fn ai_total_is_per_candidate_times_count_in_both_currencies() {
    let rate = ExchangeRate::new(49.1).expect("valid rate");
    for candidates in [1, 7, 100, 4_321, 50_000] {
        for currency in [Currency::Usd, Currency::Egp] {
            let inputs = AiScreeningInputs {
                candidate_count: candidates,
                requests_per_candidate: 13,
                markup_percent: 35,
                currency,
            };
            let cost = compute_ai_screening_cost(&inputs, rate).expect("valid inputs");
            assert_close(
                cost.total.amount,
                cost.per_candidate.amount * f64::from(candidates),
                1e-6,
            );
        }
    }
}

#[test]
fn egp_figures_convert_back_to_usd() {
    let rate = ExchangeRate::new(47.85).expect("valid rate");
    let usd = compute_ai_screening_cost(&ai_inputs(Currency::Usd), rate).expect("valid");
    let egp = compute_ai_screening_cost(&ai_inputs(Currency::Egp), rate).expect("valid");

    assert_close(rate.egp_to_usd(egp.total.amount), usd.total.amount, 1e-9);
    assert_close(
        usd.per_candidate.amount,
        f64::from(10u32) * COST_PER_REQUEST_USD * 1.45,
        1e-12,
    );
}

#[test]
fn recruiter_team_over_capacity_matches_worked_example() {
    let inputs = RecruiterInputs {
        monthly_salary_egp: 12_000,
        team_size: 5,
        processing_minutes_per_candidate: 5,
        candidate_count: 50_000,
    };

    let breakdown = compute_recruiter_cost(&inputs, ExchangeRate::FALLBACK).expect("valid");

    assert_close(breakdown.hourly_wage.egp, 68.18, 0.005);
    assert_close(
        breakdown.hourly_wage.egp * f64::from(WORKING_HOURS_PER_MONTH),
        12_000.0,
        1e-9,
    );
    assert_close(breakdown.max_candidates_processed, 10_560.0, 1e-9);
    assert_close(breakdown.billed_candidates, 10_560.0, 1e-9);
    assert_close(breakdown.cost_per_candidate.egp, 5.68, 0.005);
    assert_close(breakdown.total_cost.egp, 60_000.0, 1e-6);
    assert_close(breakdown.total_team_salary.egp, 60_000.0, 1e-9);
    assert!(breakdown.capacity.is_exceeded());
}

#[test]
fn recruiter_team_within_capacity_bills_everyone() {
    let inputs = RecruiterInputs {
        monthly_salary_egp: 20_000,
        team_size: 2,
        processing_minutes_per_candidate: 15,
        candidate_count: 1_408,
    };

    let breakdown = compute_recruiter_cost(&inputs, ExchangeRate::FALLBACK).expect("valid");

    assert_close(breakdown.max_candidates_processed, 1_408.0, 1e-9);
    assert_eq!(breakdown.capacity, CapacityStatus::Sufficient);
    assert_close(breakdown.billed_candidates, 1_408.0, 1e-9);
    assert_close(
        breakdown.total_cost.egp,
        breakdown.cost_per_candidate.egp * 1_408.0,
        1e-6,
    );
}

#[test]
fn worked_example_candidate_count_is_outside_the_domain() {
    let inputs = RecruiterInputs {
        monthly_salary_egp: 12_000,
        team_size: 5,
        processing_minutes_per_candidate: 5,
        candidate_count: 100_000,
    };

    let err = compute_recruiter_cost(&inputs, ExchangeRate::FALLBACK)
        .expect_err("100000 candidates is over the cap");

    assert_eq!(err.field, "candidate_count");
    assert_eq!(err.value, 100_000);
}
