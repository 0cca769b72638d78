use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use mortgage_core::affordability::{self, AffordabilityPolicy, BorrowerProfile};

use crate::input;

/// Arguments for budget screening
#[derive(Args)]
pub struct AffordabilityArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Monthly expenses
    #[arg(long)]
    pub expenses: Option<Decimal>,

    /// Monthly payment to screen
    #[arg(long)]
    pub payment: Option<Decimal>,

    /// Affordability policy
    #[arg(long, default_value = "absolute-headroom")]
    pub policy: PolicyArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    AbsoluteHeadroom,
    DisposableRatio,
}

impl From<PolicyArg> for AffordabilityPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::AbsoluteHeadroom => AffordabilityPolicy::AbsoluteHeadroom,
            PolicyArg::DisposableRatio => AffordabilityPolicy::DisposableRatio,
        }
    }
}

/// JSON request body: borrower fields plus the payment under screening.
#[derive(Deserialize)]
struct AffordabilityRequest {
    #[serde(flatten)]
    profile: BorrowerProfile,
    payment: Decimal,
    #[serde(default)]
    policy: AffordabilityPolicy,
}

pub fn run_affordability(args: AffordabilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: AffordabilityRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        AffordabilityRequest {
            profile: BorrowerProfile {
                monthly_income: args.income
                    .ok_or("--income is required (or provide --input)")?,
                monthly_expenses: args.expenses
                    .ok_or("--expenses is required (or provide --input)")?,
            },
            payment: args.payment
                .ok_or("--payment is required (or provide --input)")?,
            policy: args.policy.into(),
        }
    };

    let result =
        affordability::assess_affordability(&request.profile, request.payment, request.policy)?;
    Ok(serde_json::to_value(result)?)
}
