use mortgage_core::affordability::{
    self, AffordabilityClass, AffordabilityPolicy, BorrowerProfile, SavingsGoal,
};
use mortgage_core::MortgageError;
use rust_decimal_macros::dec;

// ===========================================================================
// Absolute-headroom policy tests
// ===========================================================================

fn comfortable_borrower() -> BorrowerProfile {
    // 2000 of monthly headroom before the mortgage.
    BorrowerProfile {
        monthly_income: dec!(5_000),
        monthly_expenses: dec!(3_000),
    }
}

#[test]
fn test_headroom_affordable_but_goal_unreachable() {
    let result = affordability::assess_affordability(
        &comfortable_borrower(),
        dec!(1_500),
        AffordabilityPolicy::AbsoluteHeadroom,
    )
    .unwrap();
    let a = &result.result;

    // Disposable 2000 covers 1500, but the 20% savings target (1000) does not.
    assert_eq!(a.disposable_income, dec!(2_000));
    assert_eq!(a.classification, AffordabilityClass::Affordable);
    assert_eq!(a.recommended_savings, dec!(1_000));
    assert_eq!(a.savings_goal, Some(SavingsGoal::Unreachable));
}

#[test]
fn test_headroom_goal_reachable_for_modest_payment() {
    let result = affordability::assess_affordability(
        &comfortable_borrower(),
        dec!(900),
        AffordabilityPolicy::AbsoluteHeadroom,
    )
    .unwrap();
    let a = &result.result;

    assert_eq!(a.classification, AffordabilityClass::Affordable);
    assert_eq!(a.savings_goal, Some(SavingsGoal::Reachable));
}

#[test]
fn test_headroom_boundary_counts_as_affordable() {
    // Disposable income exactly equal to the payment.
    let result = affordability::assess_affordability(
        &comfortable_borrower(),
        dec!(2_000),
        AffordabilityPolicy::AbsoluteHeadroom,
    )
    .unwrap();
    assert_eq!(result.result.classification, AffordabilityClass::Affordable);
}

#[test]
fn test_headroom_shortfall_gap_is_literal() {
    let borrower = BorrowerProfile {
        monthly_income: dec!(4_000),
        monthly_expenses: dec!(3_000),
    };
    let result = affordability::assess_affordability(
        &borrower,
        dec!(1_500),
        AffordabilityPolicy::AbsoluteHeadroom,
    )
    .unwrap();
    let a = &result.result;

    // Gap = 1500 - (4000 - 3000) = 500
    assert_eq!(a.classification, AffordabilityClass::Shortfall);
    assert_eq!(a.shortfall, Some(dec!(500)));
    assert!(a.message.contains("500"));
}

// ===========================================================================
// Disposable-ratio policy tests
// ===========================================================================

fn frugal_borrower() -> BorrowerProfile {
    // 4000 of disposable income.
    BorrowerProfile {
        monthly_income: dec!(5_000),
        monthly_expenses: dec!(1_000),
    }
}

#[test]
fn test_ratio_low_burden() {
    let result = affordability::assess_affordability(
        &frugal_borrower(),
        dec!(1_000),
        AffordabilityPolicy::DisposableRatio,
    )
    .unwrap();
    let a = &result.result;

    // 1000 < 0.3 * 4000 = 1200
    assert_eq!(a.classification, AffordabilityClass::LowBurden);
    assert_eq!(a.payment_to_disposable, Some(dec!(0.25)));
}

#[test]
fn test_ratio_moderate_burden() {
    let result = affordability::assess_affordability(
        &frugal_borrower(),
        dec!(1_500),
        AffordabilityPolicy::DisposableRatio,
    )
    .unwrap();

    // 1200 <= 1500 < 0.5 * 4000 = 2000
    assert_eq!(
        result.result.classification,
        AffordabilityClass::ModerateBurden
    );
}

#[test]
fn test_ratio_high_burden_at_half_of_disposable() {
    // Exactly 0.5 * disposable is already a high burden.
    let result = affordability::assess_affordability(
        &frugal_borrower(),
        dec!(2_000),
        AffordabilityPolicy::DisposableRatio,
    )
    .unwrap();
    assert_eq!(result.result.classification, AffordabilityClass::HighBurden);
}

#[test]
fn test_ratio_zero_disposable_is_high_burden() {
    let borrower = BorrowerProfile {
        monthly_income: dec!(3_000),
        monthly_expenses: dec!(3_000),
    };
    let result = affordability::assess_affordability(
        &borrower,
        dec!(1),
        AffordabilityPolicy::DisposableRatio,
    )
    .unwrap();
    let a = &result.result;

    assert_eq!(a.classification, AffordabilityClass::HighBurden);
    assert_eq!(a.payment_to_disposable, None);
}

#[test]
fn test_ratio_negative_disposable_does_not_crash() {
    let borrower = BorrowerProfile {
        monthly_income: dec!(2_000),
        monthly_expenses: dec!(3_500),
    };
    let result = affordability::assess_affordability(
        &borrower,
        dec!(800),
        AffordabilityPolicy::DisposableRatio,
    )
    .unwrap();
    let a = &result.result;

    assert_eq!(a.disposable_income, dec!(-1_500));
    assert_eq!(a.classification, AffordabilityClass::HighBurden);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("disposable income is negative")));
}

// ===========================================================================
// Shared behaviour
// ===========================================================================

#[test]
fn test_assessment_is_referentially_transparent() {
    for policy in [
        AffordabilityPolicy::AbsoluteHeadroom,
        AffordabilityPolicy::DisposableRatio,
    ] {
        let first =
            affordability::assess_affordability(&comfortable_borrower(), dec!(1_500), policy)
                .unwrap();
        let second =
            affordability::assess_affordability(&comfortable_borrower(), dec!(1_500), policy)
                .unwrap();
        assert_eq!(first.result.classification, second.result.classification);
        assert_eq!(first.result.message, second.result.message);
    }
}

#[test]
fn test_recommended_savings_reported_under_both_policies() {
    for policy in [
        AffordabilityPolicy::AbsoluteHeadroom,
        AffordabilityPolicy::DisposableRatio,
    ] {
        let result =
            affordability::assess_affordability(&comfortable_borrower(), dec!(500), policy)
                .unwrap();
        assert_eq!(result.result.recommended_savings, dec!(1_000));
    }
}

#[test]
fn test_negative_payment_rejected() {
    let err = affordability::assess_affordability(
        &comfortable_borrower(),
        dec!(-1),
        AffordabilityPolicy::default(),
    )
    .unwrap_err();
    match err {
        MortgageError::InvalidInput { field, .. } => assert_eq!(field, "payment"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_negative_expenses_rejected() {
    let borrower = BorrowerProfile {
        monthly_income: dec!(1_000),
        monthly_expenses: dec!(-10),
    };
    let err =
        affordability::assess_affordability(&borrower, dec!(100), AffordabilityPolicy::default())
            .unwrap_err();
    match err {
        MortgageError::InvalidInput { field, .. } => assert_eq!(field, "monthly_expenses"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}
