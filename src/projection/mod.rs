//! Ten-year projection pipeline: monthly simulation, yearly rollup, investment summary

mod engine;
mod monthly;
mod records;
mod summary;
mod yearly;

/// Length of the projection horizon in years
pub const PROJECTION_YEARS: usize = 10;

pub use engine::{analyze, AnalysisEngine};
pub use monthly::{
    avg_selling_price, daily_production, monthly_fixed_costs, rent_escalation_factor,
    simulate_months, RENT_ANCHOR_OFFSET,
};
pub use records::{
    AnalysisResult, InvestmentSummary, MonthlyRecord, YearlyProjection, LAKH, LAKHS_PER_CRORE,
};
pub use summary::{payback_period, summarize};
pub use yearly::{project_years, rollup_year};
