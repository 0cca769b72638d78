//! Budget-affordability screening for a computed mortgage payment.
//!
//! Two screening policies are available: an absolute-headroom check that
//! compares the payment against disposable income directly, and a burden
//! grading of the payment as a share of disposable income. The caller
//! selects the policy per assessment. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MortgageError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Share of gross income conventionally set aside as savings.
const RECOMMENDED_SAVINGS_RATE: Decimal = dec!(0.2);

/// Payments below this share of disposable income are a low burden.
const LOW_BURDEN_CEILING: Decimal = dec!(0.3);

/// Payments below this share of disposable income remain manageable.
const MODERATE_BURDEN_CEILING: Decimal = dec!(0.5);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Monthly budget figures for the borrower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowerProfile {
    pub monthly_income: Money,
    pub monthly_expenses: Money,
}

impl BorrowerProfile {
    /// Income remaining after fixed expenses, before the mortgage payment.
    /// May be negative.
    pub fn disposable_income(&self) -> Money {
        self.monthly_income - self.monthly_expenses
    }
}

/// Rule set used to classify the payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordabilityPolicy {
    /// Compare the payment against disposable income head-on and report the
    /// literal gap when it falls short.
    #[default]
    AbsoluteHeadroom,
    /// Grade the payment as a share of disposable income.
    DisposableRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordabilityClass {
    Affordable,
    Shortfall,
    LowBurden,
    ModerateBurden,
    HighBurden,
}

/// Whether saving at the recommended rate would cover the payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsGoal {
    Reachable,
    Unreachable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityAssessment {
    pub policy: AffordabilityPolicy,
    pub disposable_income: Money,
    pub classification: AffordabilityClass,
    pub message: String,
    /// Extra amount needed each month to cover the payment. Only present
    /// under the absolute-headroom policy when the budget falls short.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortfall: Option<Money>,
    /// Payment as a share of disposable income. Only present under the
    /// ratio policy, and only when disposable income is positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_to_disposable: Option<Rate>,
    /// Suggested monthly savings: 20% of gross income.
    pub recommended_savings: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_goal: Option<SavingsGoal>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Assess whether `payment` fits the borrower's monthly budget under the
/// selected policy.
///
/// Never fails on a negative disposable income — the assessment reports it
/// and classifies accordingly.
pub fn assess_affordability(
    profile: &BorrowerProfile,
    payment: Money,
    policy: AffordabilityPolicy,
) -> MortgageResult<ComputationOutput<AffordabilityAssessment>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_inputs(profile, payment)?;

    let disposable = profile.disposable_income();
    if disposable < Decimal::ZERO {
        warnings.push("Expenses exceed income; disposable income is negative".into());
    }

    let recommended_savings = profile.monthly_income * RECOMMENDED_SAVINGS_RATE;

    let assessment = match policy {
        AffordabilityPolicy::AbsoluteHeadroom => {
            assess_absolute_headroom(disposable, payment, recommended_savings)
        }
        AffordabilityPolicy::DisposableRatio => {
            assess_disposable_ratio(disposable, payment, recommended_savings)
        }
    };

    let methodology = match policy {
        AffordabilityPolicy::AbsoluteHeadroom => "Absolute-Headroom Affordability Screen",
        AffordabilityPolicy::DisposableRatio => "Payment-to-Disposable Burden Ratio",
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "recommended_savings_rate": RECOMMENDED_SAVINGS_RATE.to_string(),
        "low_burden_ceiling": LOW_BURDEN_CEILING.to_string(),
        "moderate_burden_ceiling": MODERATE_BURDEN_CEILING.to_string(),
    });

    Ok(with_metadata(
        methodology,
        &assumptions,
        warnings,
        elapsed,
        assessment,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn assess_absolute_headroom(
    disposable: Money,
    payment: Money,
    recommended_savings: Money,
) -> AffordabilityAssessment {
    let (classification, message, shortfall) = if disposable >= payment {
        (
            AffordabilityClass::Affordable,
            "Disposable income covers the monthly payment comfortably.".to_string(),
            None,
        )
    } else {
        let gap = payment - disposable;
        (
            AffordabilityClass::Shortfall,
            format!(
                "An additional {} per month is needed to cover the payment.",
                gap.round_dp(2)
            ),
            Some(gap),
        )
    };

    let savings_goal = if recommended_savings < payment {
        SavingsGoal::Unreachable
    } else {
        SavingsGoal::Reachable
    };

    AffordabilityAssessment {
        policy: AffordabilityPolicy::AbsoluteHeadroom,
        disposable_income: disposable,
        classification,
        message,
        shortfall,
        payment_to_disposable: None,
        recommended_savings,
        savings_goal: Some(savings_goal),
    }
}

fn assess_disposable_ratio(
    disposable: Money,
    payment: Money,
    recommended_savings: Money,
) -> AffordabilityAssessment {
    // Non-positive disposable income would invert the ratio comparisons, so
    // it is graded as the highest burden outright.
    let (classification, message, ratio) = if disposable <= Decimal::ZERO {
        (
            AffordabilityClass::HighBurden,
            "Expenses leave no disposable income for a mortgage payment.".to_string(),
            None,
        )
    } else if payment < LOW_BURDEN_CEILING * disposable {
        (
            AffordabilityClass::LowBurden,
            "The payment fits comfortably within disposable income.".to_string(),
            Some(payment / disposable),
        )
    } else if payment < MODERATE_BURDEN_CEILING * disposable {
        (
            AffordabilityClass::ModerateBurden,
            "Manageable, but consider trimming monthly expenses.".to_string(),
            Some(payment / disposable),
        )
    } else {
        (
            AffordabilityClass::HighBurden,
            "Reconsider the down payment or a smaller loan.".to_string(),
            Some(payment / disposable),
        )
    };

    AffordabilityAssessment {
        policy: AffordabilityPolicy::DisposableRatio,
        disposable_income: disposable,
        classification,
        message,
        shortfall: None,
        payment_to_disposable: ratio,
        recommended_savings,
        savings_goal: None,
    }
}

fn validate_inputs(profile: &BorrowerProfile, payment: Money) -> MortgageResult<()> {
    if profile.monthly_income < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "monthly_income".into(),
            reason: "Income cannot be negative".into(),
        });
    }
    if profile.monthly_expenses < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "monthly_expenses".into(),
            reason: "Expenses cannot be negative".into(),
        });
    }
    if payment < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "payment".into(),
            reason: "Payment cannot be negative".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
