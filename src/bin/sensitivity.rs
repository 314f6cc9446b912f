//! Sensitivity sweep around a base parameter set
//!
//! Varies price growth, raw material share and utilization one at a time and
//! reports total profit, ROI and payback for each variant.
//! Usage: cargo run --bin sensitivity -- [--params plant.json] [--json]

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use cup_analysis::params::loader;
use cup_analysis::scenario::{Scenario, ScenarioRunner};
use cup_analysis::BusinessParameters;

#[derive(Debug, Parser)]
#[command(name = "sensitivity", about = "One-at-a-time sensitivity sweep of the projection")]
struct Args {
    /// Base parameters JSON; defaults to the built-in plant
    #[arg(long)]
    params: Option<PathBuf>,

    /// Print JSON rows instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SensitivityRow {
    scenario: String,
    total_revenue_crores: Option<f64>,
    total_profit_crores: Option<f64>,
    avg_roi_percent: Option<f64>,
    payback_period_years: Option<u32>,
    payback_reached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = match &args.params {
        Some(path) => loader::from_json_path(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => BusinessParameters::default_plant(),
    };

    let runner = ScenarioRunner::new(base);
    let base_price_growth = runner.base().growth_rates.price;
    let base_raw = runner.base().raw_material_cost_percent;

    let mut scenarios: Vec<Scenario> = vec![runner.variant("base", |_| {})];
    scenarios.extend(runner.price_growth_sweep(&[
        base_price_growth - 0.02,
        base_price_growth + 0.02,
    ]));
    scenarios.extend(runner.raw_material_sweep(&[base_raw - 0.05, base_raw + 0.05]));
    scenarios.extend(runner.utilization_sweep(&[0.8, 1.2]));

    let start = Instant::now();
    let rows: Vec<SensitivityRow> = runner
        .run_batch(&scenarios)
        .into_iter()
        .map(|outcome| match outcome.result {
            Ok(result) => SensitivityRow {
                scenario: outcome.name,
                total_revenue_crores: Some(result.summary.total_revenue_crores),
                total_profit_crores: Some(result.summary.total_profit_crores),
                avg_roi_percent: Some(result.summary.avg_roi_percent),
                payback_period_years: Some(result.summary.payback_period_years),
                payback_reached: Some(result.summary.payback_reached),
                error: None,
            },
            Err(err) => SensitivityRow {
                scenario: outcome.name,
                total_revenue_crores: None,
                total_profit_crores: None,
                avg_roi_percent: None,
                payback_period_years: None,
                payback_reached: None,
                error: Some(err.to_string()),
            },
        })
        .collect();
    let elapsed = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<24} {:>12} {:>12} {:>8} {:>8}",
        "Scenario", "Revenue Cr", "Profit Cr", "ROI%", "Payback"
    );
    println!("{}", "-".repeat(68));
    for row in &rows {
        match (&row.error, row.total_revenue_crores, row.total_profit_crores, row.avg_roi_percent) {
            (None, Some(revenue), Some(profit), Some(roi)) => {
                let payback = match (row.payback_period_years, row.payback_reached) {
                    (Some(years), Some(true)) => years.to_string(),
                    (Some(years), _) => format!(">{}", years),
                    _ => "-".to_string(),
                };
                println!(
                    "{:<24} {:>12.3} {:>12.3} {:>8.2} {:>8}",
                    row.scenario, revenue, profit, roi, payback
                );
            }
            _ => println!(
                "{:<24} error: {}",
                row.scenario,
                row.error.as_deref().unwrap_or("unknown")
            ),
        }
    }
    println!("\n{} scenarios in {:?}", rows.len(), elapsed);

    Ok(())
}
