//! Validated entry point running the full monthly → yearly → summary pipeline

use log::debug;

use crate::error::AnalysisError;
use crate::params::{validate, BusinessParameters};
use super::monthly::simulate_months;
use super::records::{AnalysisResult, MonthlyRecord, YearlyProjection};
use super::summary::summarize;
use super::yearly::project_years;
use super::PROJECTION_YEARS;

/// Projection engine over a validated parameter set
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    params: BusinessParameters,
}

impl AnalysisEngine {
    /// Validate parameters and build an engine
    pub fn new(params: BusinessParameters) -> Result<Self, AnalysisError> {
        validate(&params)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &BusinessParameters {
        &self.params
    }

    /// Run the ten-year analysis
    pub fn run(&self) -> AnalysisResult {
        let monthly = simulate_months(&self.params, 1);
        let yearly = project_years(&self.params);
        let summary = summarize(&yearly, self.params.initial_investment_crores);

        debug!(
            "Analysis complete: revenue {:.4} Cr, profit {:.4} Cr, ROI {:.2}%, payback {} years (reached: {})",
            summary.total_revenue_crores,
            summary.total_profit_crores,
            summary.avg_roi_percent,
            summary.payback_period_years,
            summary.payback_reached
        );

        AnalysisResult {
            monthly,
            yearly,
            summary,
        }
    }

    /// Monthly detail for any year inside the horizon
    pub fn monthly_breakdown(&self, year: u32) -> Option<[MonthlyRecord; 12]> {
        if (1..=PROJECTION_YEARS as u32).contains(&year) {
            Some(simulate_months(&self.params, year))
        } else {
            None
        }
    }

    /// Annual projections only
    pub fn yearly(&self) -> [YearlyProjection; PROJECTION_YEARS] {
        project_years(&self.params)
    }
}

/// Validate and analyze a parameter record
pub fn analyze(params: &BusinessParameters) -> Result<AnalysisResult, AnalysisError> {
    validate(params)?;
    let engine = AnalysisEngine {
        params: params.clone(),
    };
    Ok(engine.run())
}
