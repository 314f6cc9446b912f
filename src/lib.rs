//! Cup Analysis - ten-year business projection engine for a paper-cup plant
//!
//! This library provides:
//! - Monthly production, revenue and cost simulation with seasonal capacity
//! - Yearly rollups with cumulative profit tracking
//! - Investment summary (average annual ROI, payback period)
//! - Loan EMI and amortization helpers
//! - Parallel scenario runs for sensitivity analysis

pub mod error;
pub mod params;
pub mod projection;
pub mod loan;
pub mod scenario;
pub mod output;

// Re-export commonly used types
pub use error::{AnalysisError, ParameterError};
pub use params::BusinessParameters;
pub use projection::{analyze, AnalysisEngine, AnalysisResult, InvestmentSummary, MonthlyRecord, YearlyProjection};
pub use scenario::ScenarioRunner;
