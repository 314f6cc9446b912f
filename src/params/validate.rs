//! Domain checks run before a projection
//!
//! The simulator itself never fails; anything outside these ranges is
//! reported back as field-level errors instead of a silently wrong number.

use super::data::BusinessParameters;
use super::month::Month;
use crate::error::{AnalysisError, ParameterError};

/// Allowed deviation of `mixRatio.sudha + mixRatio.local` from 1
pub const MIX_RATIO_TOLERANCE: f64 = 1e-6;

/// Lowest and highest utilized capacity fraction for a month
pub const MIN_SEASONAL_CAPACITY: f64 = 0.1;
pub const MAX_SEASONAL_CAPACITY: f64 = 1.0;

/// Collects every violation rather than stopping at the first
#[derive(Default)]
struct Checker {
    errors: Vec<ParameterError>,
}

impl Checker {
    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(ParameterError::new(field, message));
    }

    /// Finite check; returns false when the value is unusable for further range checks
    fn finite(&mut self, field: &str, value: f64) -> bool {
        if value.is_finite() {
            true
        } else {
            self.fail(field, "must be a finite number");
            false
        }
    }

    fn positive(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && value <= 0.0 {
            self.fail(field, "must be greater than 0");
        }
    }

    fn non_negative(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && value < 0.0 {
            self.fail(field, "must not be negative");
        }
    }

    fn growth_rate(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && value <= -1.0 {
            self.fail(field, "must be greater than -1 (-100%)");
        }
    }
}

/// Validate a parameter record, listing every offending field
pub fn validate(params: &BusinessParameters) -> Result<(), AnalysisError> {
    let mut check = Checker::default();

    check.positive("initialInvestmentCrores", params.initial_investment_crores);

    let setup = &params.production_setup;
    if setup.thermoforming_machines == 0 {
        check.fail("productionSetup.thermoformingMachines", "must be at least 1");
    }
    if setup.printers == 0 {
        check.fail("productionSetup.printers", "must be at least 1");
    }
    if setup.sheetlines == 0 {
        check.fail("productionSetup.sheetlines", "must be at least 1");
    }

    check.positive("cupsPerDay.thermoforming", params.cups_per_day.thermoforming);
    check.positive("cupsPerDay.printing", params.cups_per_day.printing);

    check.non_negative("pricePerCup.sudha", params.price_per_cup.sudha);
    check.non_negative("pricePerCup.local", params.price_per_cup.local);

    let mix = &params.mix_ratio;
    let mut mix_ok = true;
    for (field, share) in [("mixRatio.sudha", mix.sudha), ("mixRatio.local", mix.local)] {
        if !check.finite(field, share) {
            mix_ok = false;
        } else if !(0.0..=1.0).contains(&share) {
            check.fail(field, "must be in [0, 1]");
            mix_ok = false;
        }
    }
    if mix_ok && (mix.sudha + mix.local - 1.0).abs() > MIX_RATIO_TOLERANCE {
        check.fail(
            "mixRatio",
            format!("sudha + local must equal 1, got {}", mix.sudha + mix.local),
        );
    }

    let raw = params.raw_material_cost_percent;
    if check.finite("rawMaterialCostPercent", raw) && !(raw > 0.0 && raw < 1.0) {
        check.fail("rawMaterialCostPercent", "must be in (0, 1)");
    }

    let costs = &params.fixed_costs_monthly;
    check.non_negative("fixedCostsMonthly.rent", costs.rent);
    check.non_negative("fixedCostsMonthly.electricity", costs.electricity);
    check.non_negative("fixedCostsMonthly.maintenance", costs.maintenance);
    check.non_negative("fixedCostsMonthly.manpower", costs.manpower);

    for month in Month::ALL {
        let field = format!("seasonalCapacity.{}", month.label().to_ascii_lowercase());
        let fraction = params.seasonal_capacity.get(month);
        if check.finite(&field, fraction)
            && !(MIN_SEASONAL_CAPACITY..=MAX_SEASONAL_CAPACITY).contains(&fraction)
        {
            check.fail(&field, "must be in [0.1, 1.0]");
        }
    }

    let growth = &params.growth_rates;
    check.growth_rate("growthRates.price", growth.price);
    check.growth_rate("growthRates.rawMaterial", growth.raw_material);
    check.growth_rate("growthRates.fixedCosts", growth.fixed_costs);
    for (idx, &rate) in growth.volume.iter().enumerate() {
        check.growth_rate(&format!("growthRates.volume[{}]", idx), rate);
    }

    check.non_negative("rentIncreaseRate", params.rent_increase_rate);

    if check.errors.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::InvalidParameters(check.errors))
    }
}
