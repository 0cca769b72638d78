use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use mortgage_core::affordability::{self, AffordabilityPolicy, BorrowerProfile};
use mortgage_core::amortisation::{self, LoanRequest};

use crate::commands::affordability::PolicyArg;
use crate::input;

/// Arguments for the combined pricing and screening pass
#[derive(Args)]
pub struct QuoteArgs {
    /// Path to JSON input file with `loan` and `borrower` objects
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal before the down payment
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Up-front down payment (defaults to 0)
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g., 6 for 6%)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long, alias = "years")]
    pub term_years: Option<u32>,

    /// Monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Monthly expenses
    #[arg(long)]
    pub expenses: Option<Decimal>,

    /// Affordability policy
    #[arg(long, default_value = "absolute-headroom")]
    pub policy: PolicyArg,
}

/// JSON request body pairing the loan with the borrower's budget.
#[derive(Deserialize)]
struct QuoteRequest {
    loan: LoanRequest,
    borrower: BorrowerProfile,
    #[serde(default)]
    policy: AffordabilityPolicy,
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: QuoteRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        QuoteRequest {
            loan: LoanRequest {
                principal: args.principal
                    .ok_or("--principal is required (or provide --input)")?,
                down_payment: args.down_payment.unwrap_or(Decimal::ZERO),
                annual_rate_pct: args.annual_rate
                    .ok_or("--annual-rate is required (or provide --input)")?,
                term_years: args.term_years
                    .ok_or("--term-years is required (or provide --input)")?,
            },
            borrower: BorrowerProfile {
                monthly_income: args.income
                    .ok_or("--income is required (or provide --input)")?,
                monthly_expenses: args.expenses
                    .ok_or("--expenses is required (or provide --input)")?,
            },
            policy: args.policy.into(),
        }
    };

    let pricing = amortisation::price_loan(&request.loan)?;
    let assessment = affordability::assess_affordability(
        &request.borrower,
        pricing.result.monthly_payment,
        request.policy,
    )?;

    Ok(serde_json::json!({
        "loan": serde_json::to_value(pricing)?,
        "affordability": serde_json::to_value(assessment)?,
    }))
}
