//! Cup Analysis CLI
//!
//! Runs the ten-year projection for a parameter file (or the built-in default
//! plant) and prints the monthly, yearly and investment tables.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;

use cup_analysis::output::{write_monthly_csv_to_path, write_yearly_csv_to_path};
use cup_analysis::params::loader;
use cup_analysis::{analyze, AnalysisResult, BusinessParameters};

#[derive(Debug, Parser)]
#[command(name = "cup_analysis", version, about = "Ten-year business projection for a cup plant")]
struct Args {
    /// Business parameters JSON (camelCase fields); defaults to the built-in plant
    #[arg(long)]
    params: Option<PathBuf>,

    /// `month,capacity` CSV overriding the seasonal capacity table
    #[arg(long)]
    seasonal: Option<PathBuf>,

    /// Write year-1 monthly records to this CSV file
    #[arg(long)]
    monthly_csv: Option<PathBuf>,

    /// Write yearly projections to this CSV file
    #[arg(long)]
    yearly_csv: Option<PathBuf>,

    /// Print the full report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

/// JSON envelope for a CLI run
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReport<'a> {
    generated_at: DateTime<Utc>,
    parameters: &'a BusinessParameters,
    result: &'a AnalysisResult,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut params = match &args.params {
        Some(path) => loader::from_json_path(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => BusinessParameters::default_plant(),
    };

    if let Some(path) = &args.seasonal {
        params.seasonal_capacity = loader::load_seasonal_capacity(path, &params.seasonal_capacity)
            .with_context(|| format!("failed to load seasonal capacity from {}", path.display()))?;
    }

    let result = analyze(&params)?;

    if let Some(path) = &args.monthly_csv {
        write_monthly_csv_to_path(path, &result.monthly)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    if let Some(path) = &args.yearly_csv {
        write_yearly_csv_to_path(path, &result.yearly)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if args.json {
        let report = AnalysisReport {
            generated_at: Utc::now(),
            parameters: &params,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_tables(&params, &result);
    Ok(())
}

fn print_tables(params: &BusinessParameters, result: &AnalysisResult) {
    println!("Cup Plant Business Analysis");
    println!("===========================\n");
    println!("  Initial investment: {:.2} Cr", params.initial_investment_crores);
    println!(
        "  Machines: {} thermoforming, {} printers, {} sheetlines",
        params.production_setup.thermoforming_machines,
        params.production_setup.printers,
        params.production_setup.sheetlines
    );
    println!("  Base selling price: Rs {:.3}/cup", params.base_selling_price());
    println!();

    println!("Year 1 monthly (Rs lakhs):");
    println!(
        "{:>5} {:>4} {:>7} {:>12} {:>10} {:>10} {:>10}",
        "Month", "Days", "Cap%", "Cups (000)", "Revenue", "Cost", "Profit"
    );
    println!("{}", "-".repeat(64));
    for m in &result.monthly {
        println!(
            "{:>5} {:>4} {:>7.1} {:>12.1} {:>10.2} {:>10.2} {:>10.2}",
            m.month.label(),
            m.working_days,
            m.capacity_percent,
            m.cups_produced_thousands,
            m.revenue_lakhs,
            m.total_cost_lakhs,
            m.net_profit_lakhs,
        );
    }

    println!("\nTen-year projection (Rs crores):");
    println!(
        "{:>4} {:>10} {:>10} {:>10} {:>10} {:>8} {:>12}",
        "Year", "Revenue", "RawMat", "Fixed", "Net", "Margin%", "Cumulative"
    );
    println!("{}", "-".repeat(70));
    for y in &result.yearly {
        println!(
            "{:>4} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>8.2} {:>12.3}",
            y.year,
            y.annual_revenue_crores,
            y.raw_material_cost_crores,
            y.fixed_cost_crores,
            y.net_profit_crores,
            y.profit_margin_percent,
            y.cumulative_profit_crores,
        );
    }

    let summary = &result.summary;
    println!("\nSummary:");
    println!("  Total revenue: {:.3} Cr", summary.total_revenue_crores);
    println!("  Total profit:  {:.3} Cr", summary.total_profit_crores);
    println!("  Average ROI:   {:.2}% per year", summary.avg_roi_percent);
    if summary.payback_reached {
        println!("  Payback:       {} years", summary.payback_period_years);
    } else {
        println!(
            "  Payback:       beyond {} years",
            summary.payback_period_years
        );
    }
    println!("  Peak month:    {}", result.peak_month().month.label());
}
