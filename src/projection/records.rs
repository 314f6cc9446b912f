//! Output records for projections
//!
//! Monthly figures are in lakhs (1e5 rupees), yearly figures in crores (1e7 rupees).

use serde::{Deserialize, Serialize};

use crate::params::Month;
use super::PROJECTION_YEARS;

/// Rupees per lakh
pub const LAKH: f64 = 100_000.0;

/// Lakhs per crore
pub const LAKHS_PER_CRORE: f64 = 100.0;

/// One month of one projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    pub month: Month,
    pub working_days: u32,
    /// Utilized capacity as a percentage (0-100)
    pub capacity_percent: f64,
    pub cups_produced_thousands: f64,
    pub revenue_lakhs: f64,
    pub raw_material_cost_lakhs: f64,
    pub fixed_cost_lakhs: f64,
    pub total_cost_lakhs: f64,
    pub net_profit_lakhs: f64,
}

/// Annual rollup of a projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    pub year: u32,
    /// Average cups per month, in thousands
    pub avg_monthly_cups_thousands: f64,
    pub annual_revenue_crores: f64,
    pub raw_material_cost_crores: f64,
    pub fixed_cost_crores: f64,
    pub total_cost_crores: f64,
    pub gross_profit_crores: f64,
    pub net_profit_crores: f64,
    /// Net profit over revenue, in percent
    pub profit_margin_percent: f64,
    /// Running net profit from year 1 through this year
    pub cumulative_profit_crores: f64,
    /// Rupees of net profit per thousand cups
    pub net_profit_per_thousand_cups: f64,
}

/// Investment recovery metrics over the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSummary {
    pub total_revenue_crores: f64,
    pub total_profit_crores: f64,
    /// Average annual ROI in percent of the initial investment
    pub avg_roi_percent: f64,
    /// Whole years to recover the investment; saturates at the horizon
    pub payback_period_years: u32,
    /// False when the investment is not recovered within the horizon, in which
    /// case `payback_period_years` holds the saturated horizon length
    pub payback_reached: bool,
}

/// Complete result of a ten-year analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Month-by-month detail for projection year 1
    pub monthly: [MonthlyRecord; 12],
    pub yearly: [YearlyProjection; PROJECTION_YEARS],
    pub summary: InvestmentSummary,
}

impl AnalysisResult {
    /// Projection for a 1-indexed year
    pub fn year(&self, year: u32) -> Option<&YearlyProjection> {
        (year as usize)
            .checked_sub(1)
            .and_then(|idx| self.yearly.get(idx))
    }

    /// Highest-revenue month of year 1
    pub fn peak_month(&self) -> &MonthlyRecord {
        let mut peak = &self.monthly[0];
        for record in &self.monthly[1..] {
            if record.revenue_lakhs > peak.revenue_lakhs {
                peak = record;
            }
        }
        peak
    }
}
