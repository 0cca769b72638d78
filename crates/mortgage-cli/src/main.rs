mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::affordability::AffordabilityArgs;
use commands::payment::PaymentArgs;
use commands::quote::QuoteArgs;

/// Fixed-rate mortgage payment and affordability calculations
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Fixed-rate mortgage payment and affordability calculations",
    long_about = "A CLI for pricing fixed-rate mortgages with decimal precision. \
                  Computes the level monthly payment and lifetime cost of a loan \
                  and screens the payment against a monthly budget under a \
                  selectable affordability policy."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a loan: level monthly payment and lifetime cost
    Payment(PaymentArgs),
    /// Screen a payment against a monthly budget
    Affordability(AffordabilityArgs),
    /// Price a loan and screen it against a budget in one pass
    Quote(QuoteArgs),
    /// Interactive prompt-driven session
    Wizard,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Affordability(args) => commands::affordability::run_affordability(args),
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::Wizard => {
            if let Err(e) = commands::wizard::run_wizard() {
                eprintln!("{}: {}", "error".red().bold(), e);
                process::exit(1);
            }
            return;
        }
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
