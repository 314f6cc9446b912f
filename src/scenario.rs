//! Scenario runner for sensitivity analysis
//!
//! Holds a base parameter set and runs labelled variants of it, in parallel,
//! without re-loading anything from disk.

use log::info;
use rayon::prelude::*;

use crate::error::AnalysisError;
use crate::params::{BusinessParameters, Month, MAX_SEASONAL_CAPACITY, MIN_SEASONAL_CAPACITY};
use crate::projection::{analyze, AnalysisResult};

/// A labelled parameter variant
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub params: BusinessParameters,
}

/// Outcome of one scenario in a batch
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<AnalysisResult, AnalysisError>,
}

/// Runs variations of a base parameter set
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(BusinessParameters::default_plant());
/// let scenarios = runner.price_growth_sweep(&[0.03, 0.05, 0.07]);
/// for outcome in runner.run_batch(&scenarios) { ... }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: BusinessParameters,
}

impl ScenarioRunner {
    pub fn new(base: BusinessParameters) -> Self {
        Self { base }
    }

    /// Analyze the base parameters
    pub fn run_base(&self) -> Result<AnalysisResult, AnalysisError> {
        analyze(&self.base)
    }

    pub fn run(&self, scenario: &Scenario) -> Result<AnalysisResult, AnalysisError> {
        analyze(&scenario.params)
    }

    /// Run scenarios in parallel; output order matches input order and an
    /// invalid scenario does not stop the others
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        info!("Running {} scenarios", scenarios.len());

        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                result: analyze(&scenario.params),
            })
            .collect()
    }

    /// Build a scenario by editing a copy of the base parameters
    pub fn variant<F>(&self, name: impl Into<String>, edit: F) -> Scenario
    where
        F: FnOnce(&mut BusinessParameters),
    {
        let mut params = self.base.clone();
        edit(&mut params);
        Scenario {
            name: name.into(),
            params,
        }
    }

    /// One scenario per annual price growth rate
    pub fn price_growth_sweep(&self, rates: &[f64]) -> Vec<Scenario> {
        rates
            .iter()
            .map(|&rate| {
                self.variant(format!("price growth {:.1}%", rate * 100.0), |p| {
                    p.growth_rates.price = rate;
                })
            })
            .collect()
    }

    /// One scenario per raw material share of revenue
    pub fn raw_material_sweep(&self, shares: &[f64]) -> Vec<Scenario> {
        shares
            .iter()
            .map(|&share| {
                self.variant(format!("raw material {:.1}%", share * 100.0), |p| {
                    p.raw_material_cost_percent = share;
                })
            })
            .collect()
    }

    /// One scenario per uniform scaling of every month's seasonal capacity,
    /// clamped to the valid capacity range
    pub fn utilization_sweep(&self, factors: &[f64]) -> Vec<Scenario> {
        factors
            .iter()
            .map(|&factor| {
                self.variant(format!("utilization x{:.2}", factor), |p| {
                    for month in Month::ALL {
                        let scaled = (p.seasonal_capacity.get(month) * factor)
                            .clamp(MIN_SEASONAL_CAPACITY, MAX_SEASONAL_CAPACITY);
                        p.seasonal_capacity.set(month, scaled);
                    }
                })
            })
            .collect()
    }

    pub fn base(&self) -> &BusinessParameters {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BusinessParameters {
        &mut self.base
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(BusinessParameters::default_plant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_growth_sweep_orders_profit() {
        let runner = ScenarioRunner::default();
        let scenarios = runner.price_growth_sweep(&[0.0, 0.05, 0.10]);
        let outcomes = runner.run_batch(&scenarios);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].name, "price growth 0.0%");

        let profits: Vec<f64> = outcomes
            .iter()
            .map(|o| o.result.as_ref().unwrap().summary.total_profit_crores)
            .collect();
        assert!(profits[0] < profits[1] && profits[1] < profits[2]);
    }

    #[test]
    fn test_invalid_scenario_does_not_abort_batch() {
        let runner = ScenarioRunner::default();
        let scenarios = runner.raw_material_sweep(&[0.5, 1.2, 0.6]);
        let outcomes = runner.run_batch(&scenarios);

        assert!(outcomes[0].result.is_ok());
        assert!(matches!(
            outcomes[1].result,
            Err(AnalysisError::InvalidParameters(_))
        ));
        assert!(outcomes[2].result.is_ok());
    }

    #[test]
    fn test_batch_matches_sequential_runs() {
        let runner = ScenarioRunner::default();
        let scenarios = runner.utilization_sweep(&[0.5, 1.0, 1.5]);

        for (scenario, outcome) in scenarios.iter().zip(runner.run_batch(&scenarios)) {
            assert_eq!(runner.run(scenario).unwrap(), outcome.result.unwrap());
        }
    }

    #[test]
    fn test_utilization_sweep_stays_in_range() {
        let runner = ScenarioRunner::default();
        for scenario in runner.utilization_sweep(&[0.05, 2.0]) {
            for month in Month::ALL {
                let fraction = scenario.params.seasonal_capacity.get(month);
                assert!((0.1..=1.0).contains(&fraction));
            }
        }
    }

    #[test]
    fn test_base_unchanged_by_variants() {
        let runner = ScenarioRunner::default();
        let _ = runner.price_growth_sweep(&[0.2]);
        assert_eq!(runner.base(), &BusinessParameters::default_plant());
        assert!(runner.run_base().is_ok());
    }
}
