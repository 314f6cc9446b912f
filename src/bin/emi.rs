//! Loan EMI calculator
//!
//! Usage: cargo run --bin emi -- --principal 3000000 --rate 12 --years 10 [--schedule]

use anyhow::{ensure, Result};
use clap::Parser;

use cup_analysis::loan::{amortization_schedule, installments, loan_summary, MAX_TENOR_YEARS};

#[derive(Debug, Parser)]
#[command(name = "emi", about = "Equated monthly installment for a plant loan")]
struct Args {
    /// Loan principal in rupees
    #[arg(long)]
    principal: f64,

    /// Annual interest rate in percent (12 for 12%)
    #[arg(long)]
    rate: f64,

    /// Tenor in years
    #[arg(long)]
    years: u32,

    /// Print the month-by-month amortization schedule
    #[arg(long)]
    schedule: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    ensure!(args.principal.is_finite() && args.principal > 0.0, "principal must be positive");
    ensure!(args.rate.is_finite() && args.rate >= 0.0, "rate must not be negative");
    ensure!(args.years > 0, "years must be at least 1");
    ensure!(
        args.years <= MAX_TENOR_YEARS,
        "years must be at most {}",
        MAX_TENOR_YEARS
    );

    let summary = loan_summary(args.principal, args.rate, args.years);

    if args.json {
        if args.schedule {
            let schedule = amortization_schedule(args.principal, args.rate, args.years);
            let value = serde_json::json!({ "summary": summary, "schedule": schedule });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        return Ok(());
    }

    println!("Principal:      Rs {:.2}", summary.principal);
    println!("Rate:           {:.2}% p.a.", summary.annual_rate_percent);
    println!("Tenor:          {} years ({} installments)", summary.years, installments(summary.years));
    println!("EMI:            Rs {:.2}", summary.emi);
    println!("Total payment:  Rs {:.2}", summary.total_payment);
    println!("Total interest: Rs {:.2}", summary.total_interest);

    if args.schedule {
        println!();
        println!("{:>5} {:>16} {:>14} {:>14} {:>16}", "Month", "Opening", "Interest", "Principal", "Closing");
        println!("{}", "-".repeat(70));
        for row in amortization_schedule(args.principal, args.rate, args.years) {
            println!(
                "{:>5} {:>16.2} {:>14.2} {:>14.2} {:>16.2}",
                row.month, row.opening_balance, row.interest, row.principal, row.closing_balance
            );
        }
    }

    Ok(())
}
