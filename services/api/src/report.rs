use clap::{Args, Subcommand};
use recruit_cost::config::AppConfig;
use recruit_cost::error::AppError;
use recruit_cost::estimator::{
    formula_groups, AiScreeningCost, AiScreeningInputs, ComparisonRequest, CostEstimator,
    Currency, ExchangeRate, RecruiterCostBreakdown, RecruiterInputs,
};
use recruit_cost::rates::{
    ExchangeRateProvider, FixedRateSource, HttpRateSource, RateResolution, RateSource,
};
use std::fmt::Write as _;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Use this EGP-per-USD rate instead of querying the rate service
    #[arg(long, global = true, value_parser = parse_rate)]
    pub(crate) rate: Option<ExchangeRate>,
    #[command(subcommand)]
    pub(crate) command: EstimateCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum EstimateCommand {
    /// Cost of screening candidates with the AI pipeline
    AiScreening(AiScreeningArgs),
    /// Cost and monthly capacity of a human recruiting team
    Recruiter(RecruiterArgs),
    /// Both estimates side by side against one exchange rate
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
pub(crate) struct AiScreeningArgs {
    /// Number of candidates to screen
    #[arg(long, default_value_t = 100)]
    candidates: u32,
    /// Model requests issued per candidate
    #[arg(long, default_value_t = 10)]
    requests: u32,
    /// Markup applied over the raw request cost, in percent
    #[arg(long, default_value_t = 45)]
    markup: u32,
    /// Currency for the reported amounts (USD or EGP)
    #[arg(long, default_value_t = Currency::Usd)]
    currency: Currency,
}

impl AiScreeningArgs {
    pub(crate) fn inputs(&self) -> AiScreeningInputs {
        AiScreeningInputs {
            candidate_count: self.candidates,
            requests_per_candidate: self.requests,
            markup_percent: self.markup,
            currency: self.currency,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RecruiterArgs {
    /// Monthly salary per recruiter in EGP
    #[arg(long, default_value_t = 12_000)]
    salary: u32,
    /// Number of recruiters in the team
    #[arg(long, default_value_t = 5)]
    team_size: u32,
    /// Processing time per candidate in minutes
    #[arg(long, default_value_t = 5)]
    minutes: u32,
    /// Number of candidates to process
    #[arg(long, default_value_t = 100)]
    candidates: u32,
}

impl RecruiterArgs {
    pub(crate) fn inputs(&self) -> RecruiterInputs {
        RecruiterInputs {
            monthly_salary_egp: self.salary,
            team_size: self.team_size,
            processing_minutes_per_candidate: self.minutes,
            candidate_count: self.candidates,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Number of candidates, shared by both models
    #[arg(long, default_value_t = 100)]
    candidates: u32,
    #[arg(long, default_value_t = 10)]
    requests: u32,
    #[arg(long, default_value_t = 45)]
    markup: u32,
    #[arg(long, default_value_t = Currency::Usd)]
    currency: Currency,
    #[arg(long, default_value_t = 12_000)]
    salary: u32,
    #[arg(long, default_value_t = 5)]
    team_size: u32,
    #[arg(long, default_value_t = 5)]
    minutes: u32,
}

impl CompareArgs {
    fn request(&self) -> ComparisonRequest {
        ComparisonRequest {
            ai_screening: AiScreeningInputs {
                candidate_count: self.candidates,
                requests_per_candidate: self.requests,
                markup_percent: self.markup,
                currency: self.currency,
            },
            recruiter: RecruiterInputs {
                monthly_salary_egp: self.salary,
                team_size: self.team_size,
                processing_minutes_per_candidate: self.minutes,
                candidate_count: self.candidates,
            },
        }
    }
}

fn parse_rate(raw: &str) -> Result<ExchangeRate, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    ExchangeRate::new(value).map_err(|err| err.to_string())
}

pub(crate) async fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs { rate, command } = args;

    match rate {
        Some(rate) => execute(FixedRateSource(rate), command).await,
        None => {
            let config = AppConfig::load()?;
            execute(HttpRateSource::new(config.exchange.endpoint), command).await
        }
    }
}

async fn execute<S: RateSource>(source: S, command: EstimateCommand) -> Result<(), AppError> {
    let estimator = CostEstimator::new(ExchangeRateProvider::new(source));

    let output = match command {
        EstimateCommand::AiScreening(args) => {
            let estimate = estimator.ai_screening(args.inputs()).await?;
            let mut out = render_rate(&estimate.rate);
            out.push_str(&render_ai_screening(&estimate.cost));
            out
        }
        EstimateCommand::Recruiter(args) => {
            let estimate = estimator.recruiter(args.inputs()).await?;
            let mut out = render_rate(&estimate.rate);
            out.push_str(&render_recruiter(&estimate.breakdown));
            out
        }
        EstimateCommand::Compare(args) => {
            let comparison = estimator.compare(args.request()).await?;
            let mut out = render_rate(&comparison.rate);
            out.push_str(&render_ai_screening(&comparison.ai_screening));
            out.push_str(&render_recruiter(&comparison.recruiter));
            out
        }
    };

    print!("{output}");
    Ok(())
}

pub(crate) fn run_formulas() {
    print!("{}", render_formulas());
}

pub(crate) fn render_rate(resolution: &RateResolution) -> String {
    let mut out = String::new();
    if let Some(warning) = resolution.warning() {
        let _ = writeln!(out, "Warning: {warning}");
    }
    if let RateResolution::Fallback { reason, .. } = resolution {
        let _ = writeln!(out, "Reason: {reason}");
    }
    let _ = writeln!(
        out,
        "Exchange rate: 1 USD = {:.2} EGP",
        resolution.rate().egp_per_usd()
    );
    out
}

pub(crate) fn render_ai_screening(cost: &AiScreeningCost) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nAI Screening Cost");
    let _ = writeln!(
        out,
        "- Cost per Candidate (with {}% markup): {}",
        cost.inputs.markup_percent,
        cost.per_candidate.display()
    );
    let _ = writeln!(
        out,
        "- Total Cost for {} Candidates: {}",
        cost.inputs.candidate_count,
        cost.total.display()
    );
    out
}

pub(crate) fn render_recruiter(breakdown: &RecruiterCostBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nHuman Recruiter Cost");
    let _ = writeln!(
        out,
        "- Hourly Wage per Recruiter: {}",
        breakdown.hourly_wage.display()
    );
    let _ = writeln!(
        out,
        "- Cost per Candidate: {}",
        breakdown.cost_per_candidate.display()
    );
    let _ = writeln!(
        out,
        "- Maximum Candidates per Month ({} recruiters): {:.0}",
        breakdown.inputs.team_size, breakdown.max_candidates_processed
    );
    let _ = writeln!(
        out,
        "- Total Cost for {:.0} Candidates: {}",
        breakdown.billed_candidates,
        breakdown.total_cost.display()
    );
    let _ = writeln!(
        out,
        "- Total Salary for {} Recruiters: {}",
        breakdown.inputs.team_size,
        breakdown.total_team_salary.display()
    );
    let _ = writeln!(out, "{}", breakdown.advisory());
    out
}

pub(crate) fn render_formulas() -> String {
    let mut out = String::new();
    for group in formula_groups() {
        let _ = writeln!(out, "{}", group.title);
        for line in group.lines {
            let _ = writeln!(out, "  {line}");
        }
        out.push('\n');
    }
    out
}
