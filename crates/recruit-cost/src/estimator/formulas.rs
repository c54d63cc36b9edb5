use serde::Serialize;

/// One titled block of the formula reference.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormulaGroup {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const FORMULA_GROUPS: &[FormulaGroup] = &[
    FormulaGroup {
        title: "AI Screening Cost",
        lines: &[
            "Cost per Request = 0.008 USD",
            "Base Cost per Candidate = Requests per Candidate x Cost per Request",
            "Final Cost per Candidate = Base Cost per Candidate x (1 + Markup % / 100)",
            "Total Cost = Final Cost per Candidate x Number of Candidates",
            "EGP amounts = USD amounts x Exchange Rate",
        ],
    },
    FormulaGroup {
        title: "Recruiter Hourly Wage",
        lines: &[
            "Working Hours per Month = 22 Workdays x 8 Hours = 176",
            "Hourly Wage (EGP) = Monthly Salary (EGP) / 176",
        ],
    },
    FormulaGroup {
        title: "Team Capacity",
        lines: &[
            "Working Minutes per Month = 176 x 60 = 10560",
            "Max Candidates Processed = (Team Size x 10560) / Processing Minutes per Candidate",
            "Billed Candidates = min(Number of Candidates, Max Candidates Processed)",
        ],
    },
    FormulaGroup {
        title: "Recruiter Cost per Candidate and Total",
        lines: &[
            "Processing Time (hours) = Processing Minutes per Candidate / 60",
            "Cost per Candidate (EGP) = Hourly Wage x Processing Time (hours)",
            "Total Cost (EGP) = Cost per Candidate x Billed Candidates",
            "Total Team Salary (EGP) = Monthly Salary x Team Size",
            "USD amounts = EGP amounts / Exchange Rate",
        ],
    },
];

pub fn formula_groups() -> &'static [FormulaGroup] {
    FORMULA_GROUPS
}
