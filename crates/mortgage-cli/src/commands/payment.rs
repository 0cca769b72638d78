use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_core::amortisation::{self, LoanRequest};

use crate::input;

/// Arguments for loan pricing
#[derive(Args)]
pub struct PaymentArgs {
    /// Path to JSON input file (overrides individual flags)
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
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: LoanRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanRequest {
            principal: args.principal
                .ok_or("--principal is required (or provide --input)")?,
            down_payment: args.down_payment.unwrap_or(Decimal::ZERO),
            annual_rate_pct: args.annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            term_years: args.term_years
                .ok_or("--term-years is required (or provide --input)")?,
        }
    };

    let result = amortisation::price_loan(&request)?;
    Ok(serde_json::to_value(result)?)
}
