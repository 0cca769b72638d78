//! Fixed-rate loan amortisation: level monthly payment and lifetime cost.
//!
//! Implements the standard annuity formula in its numerically milder form
//! `P·r / (1 − (1+r)^−n)`, with integer powers computed by iterative
//! multiplication. All math in `rust_decimal::Decimal`.

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

const MONTHS_PER_YEAR: u32 = 12;

/// Divisor taking an annual percentage to a monthly decimal rate (100 × 12).
const ANNUAL_PCT_TO_MONTHLY: Decimal = dec!(1200);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// A fixed-rate loan as quoted: gross principal, up-front down payment,
/// annual percentage rate, and term in whole years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: Money,
    /// Paid up front and deducted from the principal before amortisation.
    #[serde(default)]
    pub down_payment: Money,
    /// Annual interest rate as a percentage (e.g., 6 for 6%).
    pub annual_rate_pct: Rate,
    pub term_years: u32,
}

impl LoanRequest {
    /// Balance actually amortised: principal minus down payment.
    pub fn financed_amount(&self) -> Money {
        self.principal - self.down_payment
    }

    /// Monthly decimal rate: annual percentage / 100 / 12.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_pct / ANNUAL_PCT_TO_MONTHLY
    }

    pub fn term_months(&self) -> u32 {
        self.term_years * MONTHS_PER_YEAR
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPricing {
    pub financed_amount: Money,
    pub monthly_rate: Rate,
    pub term_months: u32,
    pub monthly_payment: Money,
    /// Sum of all payments over the term.
    pub total_cost: Money,
    /// Total cost minus the financed amount.
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Level monthly payment that fully amortises `financed` over `periods`
/// months at `periodic_rate` per month.
///
/// Pure and referentially transparent. The only input rejected here is
/// `periods == 0`, where `Decimal` division would abort; everything else is
/// the caller's domain to validate — a negative amount or rate propagates
/// into the arithmetic unchecked, exactly as supplied.
pub fn monthly_payment(
    financed: Money,
    periodic_rate: Rate,
    periods: u32,
) -> MortgageResult<Money> {
    if periods == 0 {
        return Err(MortgageError::InvalidInput {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if periodic_rate.is_zero() {
        return Ok(financed / Decimal::from(periods));
    }

    let annuity_factor =
        Decimal::ONE - iterative_pow_recip(Decimal::ONE + periodic_rate, periods);
    if annuity_factor.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    Ok(financed * periodic_rate / annuity_factor)
}

/// Price a quoted loan: validate the request, normalise units, and report
/// the monthly payment alongside lifetime cost figures.
pub fn price_loan(request: &LoanRequest) -> MortgageResult<ComputationOutput<LoanPricing>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_request(request)?;

    let financed = request.financed_amount();
    if financed < Decimal::ZERO {
        warnings.push(format!(
            "Down payment {} exceeds principal {}; financed amount is negative",
            request.down_payment, request.principal
        ));
    }

    let monthly_rate = request.monthly_rate();
    let term_months = request.term_months();
    let payment = monthly_payment(financed, monthly_rate, term_months)?;
    let total_cost = payment * Decimal::from(term_months);

    let pricing = LoanPricing {
        financed_amount: financed,
        monthly_rate,
        term_months,
        monthly_payment: payment,
        total_cost,
        total_interest: total_cost - financed,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "compounding": "monthly",
        "rate_basis": "annual percentage / 1200",
        "payment_structure": "level (annuity)",
    });

    Ok(with_metadata(
        "Fixed-Rate Level-Payment Amortisation",
        &assumptions,
        warnings,
        elapsed,
        pricing,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_request(request: &LoanRequest) -> MortgageResult<()> {
    if request.principal < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "principal".into(),
            reason: "Principal cannot be negative".into(),
        });
    }
    if request.down_payment < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "down_payment".into(),
            reason: "Down payment cannot be negative".into(),
        });
    }
    if request.annual_rate_pct < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if request.term_years == 0 {
        return Err(MortgageError::InvalidInput {
            field: "term_years".into(),
            reason: "Term must be at least one year".into(),
        });
    }
    Ok(())
}

/// Compute base^n via iterative multiplication.
fn iterative_pow(base: Decimal, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result *= base;
    }
    result
}

/// Compute 1 / base^n via iterative multiplication.
fn iterative_pow_recip(base: Decimal, n: u32) -> Decimal {
    let pow = iterative_pow(base, n);
    if pow.is_zero() {
        Decimal::ZERO
    } else {
        Decimal::ONE / pow
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = monthly_payment(dec!(100_000), Decimal::ZERO, 120).unwrap();
        assert_eq!(payment, dec!(100_000) / dec!(120));
    }

    #[test]
    fn test_benchmark_thirty_year_loan() {
        // 200k at 0.5% monthly over 360 months ≈ 1199.10
        let payment = monthly_payment(dec!(200_000), dec!(0.005), 360).unwrap();
        assert!((payment - dec!(1199.10)).abs() < dec!(0.01));
    }

    #[test]
    fn test_zero_periods_rejected() {
        let err = monthly_payment(dec!(100_000), dec!(0.005), 0).unwrap_err();
        match err {
            MortgageError::InvalidInput { field, .. } => assert_eq!(field, "periods"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_interest_inflates_total_cost() {
        let principal = dec!(50_000);
        let payment = monthly_payment(principal, dec!(0.004), 240).unwrap();
        assert!(payment > Decimal::ZERO);
        assert!(payment * dec!(240) > principal);
    }

    #[test]
    fn test_payment_monotonic_in_rate() {
        let low = monthly_payment(dec!(200_000), dec!(0.004), 360).unwrap();
        let mid = monthly_payment(dec!(200_000), dec!(0.005), 360).unwrap();
        let high = monthly_payment(dec!(200_000), dec!(0.006), 360).unwrap();
        assert!(low < mid);
        assert!(mid < high);
    }

    #[test]
    fn test_payment_monotonic_in_term() {
        let short = monthly_payment(dec!(200_000), dec!(0.005), 240).unwrap();
        let long = monthly_payment(dec!(200_000), dec!(0.005), 360).unwrap();
        assert!(short > long);
    }

    #[test]
    fn test_iterative_pow_matches_direct_multiplication() {
        assert_eq!(iterative_pow(dec!(1.01), 3), dec!(1.01) * dec!(1.01) * dec!(1.01));
        assert_eq!(iterative_pow(dec!(2), 0), Decimal::ONE);
    }
}
