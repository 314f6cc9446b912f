//! Business parameter record for a projection run

use serde::{Deserialize, Serialize};

use super::month::Month;

/// Machinery counts on the shop floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSetup {
    pub thermoforming_machines: u32,
    pub printers: u32,
    /// Sheet extrusion lines (informational, not part of the throughput formula)
    pub sheetlines: u32,
}

/// Per-machine daily throughput in cups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CupsPerDay {
    pub thermoforming: f64,
    pub printing: f64,
}

/// A value per product line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductLines {
    /// Branded "sudha" cups
    pub sudha: f64,
    /// Unbranded local cups
    pub local: f64,
}

/// Monthly fixed cost buckets in rupees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedCosts {
    pub rent: f64,
    pub electricity: f64,
    pub maintenance: f64,
    pub manpower: f64,
}

impl FixedCosts {
    /// Buckets that escalate with the general fixed-cost growth rate, in summation order
    pub fn non_rent(&self) -> [f64; 3] {
        [self.electricity, self.maintenance, self.manpower]
    }
}

/// Utilized fraction of theoretical capacity per calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalCapacity {
    pub jan: f64,
    pub feb: f64,
    pub mar: f64,
    pub apr: f64,
    pub may: f64,
    pub jun: f64,
    pub jul: f64,
    pub aug: f64,
    pub sep: f64,
    pub oct: f64,
    pub nov: f64,
    pub dec: f64,
}

impl SeasonalCapacity {
    /// Same fraction for every month
    pub fn flat(fraction: f64) -> Self {
        Self::from_array([fraction; 12])
    }

    pub fn from_array(values: [f64; 12]) -> Self {
        let [jan, feb, mar, apr, may, jun, jul, aug, sep, oct, nov, dec] = values;
        Self {
            jan,
            feb,
            mar,
            apr,
            may,
            jun,
            jul,
            aug,
            sep,
            oct,
            nov,
            dec,
        }
    }

    pub fn get(&self, month: Month) -> f64 {
        match month {
            Month::Jan => self.jan,
            Month::Feb => self.feb,
            Month::Mar => self.mar,
            Month::Apr => self.apr,
            Month::May => self.may,
            Month::Jun => self.jun,
            Month::Jul => self.jul,
            Month::Aug => self.aug,
            Month::Sep => self.sep,
            Month::Oct => self.oct,
            Month::Nov => self.nov,
            Month::Dec => self.dec,
        }
    }

    pub fn set(&mut self, month: Month, fraction: f64) {
        let slot = match month {
            Month::Jan => &mut self.jan,
            Month::Feb => &mut self.feb,
            Month::Mar => &mut self.mar,
            Month::Apr => &mut self.apr,
            Month::May => &mut self.may,
            Month::Jun => &mut self.jun,
            Month::Jul => &mut self.jul,
            Month::Aug => &mut self.aug,
            Month::Sep => &mut self.sep,
            Month::Oct => &mut self.oct,
            Month::Nov => &mut self.nov,
            Month::Dec => &mut self.dec,
        };
        *slot = fraction;
    }
}

/// Annual growth assumptions (fractions, e.g. 0.05 for 5%)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRates {
    /// Selling price growth, compounded from year 2
    pub price: f64,
    /// Volume growth per projection year (index 0 = year 1), not compounded
    pub volume: Vec<f64>,
    /// Raw material price growth; carried for callers, unused by the monthly formula
    pub raw_material: f64,
    /// Growth of the non-rent fixed cost buckets, compounded from year 2
    pub fixed_costs: f64,
}

impl GrowthRates {
    /// Volume growth for a 1-indexed year; missing entries mean no growth
    pub fn volume_for_year(&self, year: u32) -> f64 {
        (year as usize)
            .checked_sub(1)
            .and_then(|idx| self.volume.get(idx))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Full input record for one ten-year projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessParameters {
    pub initial_investment_crores: f64,
    pub production_setup: ProductionSetup,
    pub cups_per_day: CupsPerDay,
    /// Rupees per cup
    pub price_per_cup: ProductLines,
    /// Share of volume per product line; expected to sum to 1
    pub mix_ratio: ProductLines,
    /// Raw material as a fraction of revenue, in (0, 1)
    pub raw_material_cost_percent: f64,
    pub fixed_costs_monthly: FixedCosts,
    pub seasonal_capacity: SeasonalCapacity,
    pub growth_rates: GrowthRates,
    /// Linear rent step per fiscal year
    pub rent_increase_rate: f64,
}

impl BusinessParameters {
    /// Two-line plant used by the calculator when nothing else is supplied
    pub fn default_plant() -> Self {
        Self {
            initial_investment_crores: 3.0,
            production_setup: ProductionSetup {
                thermoforming_machines: 2,
                printers: 2,
                sheetlines: 1,
            },
            cups_per_day: CupsPerDay {
                thermoforming: 100_000.0,
                printing: 120_000.0,
            },
            price_per_cup: ProductLines {
                sudha: 1.2,
                local: 0.8,
            },
            mix_ratio: ProductLines {
                sudha: 0.6,
                local: 0.4,
            },
            raw_material_cost_percent: 0.55,
            fixed_costs_monthly: FixedCosts {
                rent: 150_000.0,
                electricity: 200_000.0,
                maintenance: 50_000.0,
                manpower: 300_000.0,
            },
            // Peak demand in the summer months, dip through the monsoon
            seasonal_capacity: SeasonalCapacity::from_array([
                0.70, 0.75, 0.85, 1.00, 1.00, 0.95, 0.80, 0.75, 0.80, 0.90, 0.85, 0.75,
            ]),
            growth_rates: GrowthRates {
                price: 0.05,
                volume: vec![0.0, 0.10, 0.10, 0.08, 0.08, 0.06, 0.06, 0.05, 0.05, 0.05],
                raw_material: 0.06,
                fixed_costs: 0.05,
            },
            rent_increase_rate: 0.10,
        }
    }

    /// Weighted price per cup before growth
    pub fn base_selling_price(&self) -> f64 {
        self.price_per_cup.sudha * self.mix_ratio.sudha
            + self.price_per_cup.local * self.mix_ratio.local
    }

    /// Daily output before volume growth: thermoforming and printing run as a
    /// two-stage line limited by the slower stage
    pub fn bottleneck_daily_capacity(&self) -> f64 {
        let thermoforming =
            self.cups_per_day.thermoforming * self.production_setup.thermoforming_machines as f64;
        let printing = self.cups_per_day.printing * self.production_setup.printers as f64;
        thermoforming.min(printing)
    }
}

impl Default for BusinessParameters {
    fn default() -> Self {
        Self::default_plant()
    }
}
