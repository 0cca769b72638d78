use std::io::{self, Write};

use rust_decimal::Decimal;

use mortgage_core::affordability::{self, AffordabilityPolicy, BorrowerProfile, SavingsGoal};
use mortgage_core::amortisation::{self, LoanRequest};

/// Run the prompt-driven calculator session: gather the loan and budget
/// figures one at a time, re-prompting on invalid text, then print the
/// payment, lifetime cost, and guidance.
pub fn run_wizard() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Mortgage Calculator ===");

    let name = read_line("Name: ")?;
    let principal = read_amount("Loan amount: ")?;
    let down_payment = read_amount("Down payment: ")?;
    let annual_rate_pct = read_amount("Annual interest rate (%): ")?;
    let term_years = read_term("Loan term (years): ")?;

    let request = LoanRequest {
        principal,
        down_payment,
        annual_rate_pct,
        term_years,
    };
    let pricing = amortisation::price_loan(&request)?;
    let p = &pricing.result;

    println!();
    if name.is_empty() {
        println!("Monthly payment: {}", currency(p.monthly_payment));
    } else {
        println!(
            "Hello {name}, your monthly payment is {}.",
            currency(p.monthly_payment)
        );
    }
    println!(
        "Total cost over {term_years} years: {}",
        currency(p.total_cost)
    );
    for warning in &pricing.warnings {
        println!("Note: {warning}");
    }

    println!();
    let monthly_income = read_amount("Monthly salary: ")?;
    let monthly_expenses = read_amount("Monthly expenses: ")?;
    let policy = read_policy()?;

    let profile = BorrowerProfile {
        monthly_income,
        monthly_expenses,
    };
    let assessment = affordability::assess_affordability(&profile, p.monthly_payment, policy)?;
    let a = &assessment.result;

    println!();
    println!(
        "Disposable income each month: {}",
        currency(a.disposable_income)
    );
    println!("{}", a.message);
    println!(
        "Recommended monthly savings: {}",
        currency(a.recommended_savings)
    );
    match a.savings_goal {
        Some(SavingsGoal::Reachable) => {
            println!("Saving at that rate keeps a home within financial reach.");
        }
        Some(SavingsGoal::Unreachable) => {
            println!("Consider adjusting plans or exploring a lower price range.");
        }
        None => {}
    }
    if let Some(ratio) = a.payment_to_disposable {
        println!(
            "Payment-to-disposable ratio: {}%",
            (ratio * Decimal::ONE_HUNDRED).round_dp(1)
        );
    }

    Ok(())
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf)?;
    if n == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(buf.trim().to_string())
}

/// Prompt until a non-negative decimal amount is entered.
fn read_amount(prompt: &str) -> io::Result<Decimal> {
    loop {
        let raw = read_line(prompt)?;
        match raw.parse::<Decimal>() {
            Ok(value) if value >= Decimal::ZERO => return Ok(value),
            Ok(_) => println!("Enter a non-negative amount."),
            Err(_) => println!("Enter a number."),
        }
    }
}

/// Prompt until a positive whole number of years is entered.
fn read_term(prompt: &str) -> io::Result<u32> {
    loop {
        let raw = read_line(prompt)?;
        match raw.parse::<u32>() {
            Ok(years) if years > 0 => return Ok(years),
            _ => println!("Enter a whole number of years, at least 1."),
        }
    }
}

fn read_policy() -> io::Result<AffordabilityPolicy> {
    println!("Guidance policy: 1) absolute headroom  2) burden ratio");
    loop {
        let raw = read_line("Policy [1]: ")?;
        match raw.as_str() {
            "" | "1" => return Ok(AffordabilityPolicy::AbsoluteHeadroom),
            "2" => return Ok(AffordabilityPolicy::DisposableRatio),
            _ => println!("Enter 1 or 2."),
        }
    }
}

fn currency(value: Decimal) -> String {
    format!("{value:.2}")
}
