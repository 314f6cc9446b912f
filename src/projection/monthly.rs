//! Monthly production and profit for one projection year

use crate::params::{BusinessParameters, Month};
use super::records::{MonthlyRecord, LAKH};

/// Fractional-year offset anchoring rent steps to the October fiscal boundary
pub const RENT_ANCHOR_OFFSET: f64 = 9.0 / 12.0;

/// Rent multiplier for a 1-indexed projection year.
///
/// Linear in the rate: `1 + rate * max(0, year - 1 + 9/12)`, so year 1 already
/// carries three quarters of a step from the October revision.
pub fn rent_escalation_factor(rent_increase_rate: f64, year: u32) -> f64 {
    let elapsed = (year as f64 - 1.0 + RENT_ANCHOR_OFFSET).max(0.0);
    1.0 + rent_increase_rate * elapsed
}

/// Weighted selling price per cup for a year, compounded from year 2
pub fn avg_selling_price(params: &BusinessParameters, year: u32) -> f64 {
    params.base_selling_price() * compound(params.growth_rates.price, year)
}

/// Bottleneck daily output scaled by the year's volume growth
pub fn daily_production(params: &BusinessParameters, year: u32) -> f64 {
    let volume_multiplier = 1.0 + params.growth_rates.volume_for_year(year);
    params.bottleneck_daily_capacity() * volume_multiplier
}

/// Monthly fixed costs in rupees for a year
pub fn monthly_fixed_costs(params: &BusinessParameters, year: u32) -> f64 {
    let costs = &params.fixed_costs_monthly;
    let growth = compound(params.growth_rates.fixed_costs, year);

    let mut total = costs.rent * rent_escalation_factor(params.rent_increase_rate, year);
    for bucket in costs.non_rent() {
        total += bucket * growth;
    }
    total
}

/// Simulate the twelve months of a 1-indexed projection year, Jan..Dec
pub fn simulate_months(params: &BusinessParameters, year: u32) -> [MonthlyRecord; 12] {
    let price = avg_selling_price(params, year);
    let daily = daily_production(params, year);
    let fixed_cost_lakhs = monthly_fixed_costs(params, year) / LAKH;
    let raw_share = params.raw_material_cost_percent;

    Month::ALL.map(|month| {
        let capacity = params.seasonal_capacity.get(month);
        let working_days = month.working_days();

        let cups_produced_thousands = daily * capacity * working_days as f64 / 1000.0;
        let revenue_lakhs = cups_produced_thousands * price * 1000.0 / LAKH;
        let raw_material_cost_lakhs = revenue_lakhs * raw_share;
        let total_cost_lakhs = raw_material_cost_lakhs + fixed_cost_lakhs;

        MonthlyRecord {
            month,
            working_days,
            capacity_percent: capacity * 100.0,
            cups_produced_thousands,
            revenue_lakhs,
            raw_material_cost_lakhs,
            fixed_cost_lakhs,
            total_cost_lakhs,
            net_profit_lakhs: revenue_lakhs - total_cost_lakhs,
        }
    })
}

/// `(1 + rate)^(year - 1)`, exponent 0 in year 1
fn compound(rate: f64, year: u32) -> f64 {
    (1.0 + rate).powi(year.saturating_sub(1) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SeasonalCapacity;
    use approx::assert_relative_eq;

    #[test]
    fn test_rent_escalation_anchored_to_october() {
        assert_relative_eq!(rent_escalation_factor(0.10, 1), 1.075);
        assert_relative_eq!(rent_escalation_factor(0.10, 2), 1.175);
        assert_relative_eq!(rent_escalation_factor(0.10, 3), 1.275);
        assert_relative_eq!(rent_escalation_factor(0.10, 10), 1.975);
    }

    #[test]
    fn test_rent_escalation_floor_and_zero_rate() {
        // Year 0 would be -0.25 years elapsed; clamped to no escalation
        assert_eq!(rent_escalation_factor(0.10, 0), 1.0);
        assert_eq!(rent_escalation_factor(0.0, 7), 1.0);
    }

    #[test]
    fn test_price_growth_starts_after_year_one() {
        let params = BusinessParameters::default_plant();
        assert_relative_eq!(avg_selling_price(&params, 1), 1.04);
        assert_relative_eq!(avg_selling_price(&params, 2), 1.04 * 1.05);
        assert_relative_eq!(avg_selling_price(&params, 3), 1.04 * 1.05 * 1.05, epsilon = 1e-12);
    }

    #[test]
    fn test_volume_growth_is_per_year_not_compounded() {
        let params = BusinessParameters::default_plant();
        assert_relative_eq!(daily_production(&params, 1), 200_000.0);
        assert_relative_eq!(daily_production(&params, 2), 220_000.0);
        assert_relative_eq!(daily_production(&params, 3), 220_000.0);
        assert_relative_eq!(daily_production(&params, 4), 216_000.0);
    }

    #[test]
    fn test_short_volume_sequence_means_no_growth() {
        let mut params = BusinessParameters::default_plant();
        params.growth_rates.volume = vec![0.2];
        assert_relative_eq!(daily_production(&params, 1), 240_000.0);
        assert_relative_eq!(daily_production(&params, 5), 200_000.0);
    }

    #[test]
    fn test_monthly_fixed_costs() {
        let params = BusinessParameters::default_plant();
        // 150k * 1.075 + (200k + 50k + 300k)
        assert_relative_eq!(monthly_fixed_costs(&params, 1), 711_250.0);
        // 150k * 1.175 + 550k * 1.05
        assert_relative_eq!(monthly_fixed_costs(&params, 2), 176_250.0 + 577_500.0);
    }

    #[test]
    fn test_january_year_one() {
        let params = BusinessParameters::default_plant();
        let months = simulate_months(&params, 1);
        let jan = &months[0];

        assert_eq!(jan.month, Month::Jan);
        assert_eq!(jan.working_days, 26);
        assert_relative_eq!(jan.capacity_percent, 70.0);
        // 200k cups/day * 0.7 * 26 days
        assert_relative_eq!(jan.cups_produced_thousands, 3640.0);
        // 3.64M cups at 1.04
        assert_relative_eq!(jan.revenue_lakhs, 37.856, epsilon = 1e-9);
        assert_relative_eq!(jan.raw_material_cost_lakhs, 37.856 * 0.55, epsilon = 1e-9);
        assert_relative_eq!(jan.fixed_cost_lakhs, 7.1125);
        assert_relative_eq!(
            jan.net_profit_lakhs,
            37.856 - 37.856 * 0.55 - 7.1125,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_february_uses_shortened_month() {
        let mut params = BusinessParameters::default_plant();
        params.seasonal_capacity = SeasonalCapacity::flat(1.0);
        let months = simulate_months(&params, 1);
        assert_relative_eq!(months[1].cups_produced_thousands, 200.0 * 24.0);
        assert_relative_eq!(months[2].cups_produced_thousands, 200.0 * 26.0);
    }

    #[test]
    fn test_always_twelve_months_in_calendar_order() {
        let params = BusinessParameters::default_plant();
        for year in [1, 5, 10, 11] {
            let months = simulate_months(&params, year);
            assert_eq!(months.len(), 12);
            for (record, month) in months.iter().zip(Month::ALL) {
                assert_eq!(record.month, month);
            }
        }
    }

    #[test]
    fn test_cups_non_negative_across_capacity_range() {
        let mut params = BusinessParameters::default_plant();
        for fraction in [0.1, 0.35, 0.5, 0.99, 1.0] {
            params.seasonal_capacity = SeasonalCapacity::flat(fraction);
            for year in 1..=10 {
                for record in simulate_months(&params, year) {
                    assert!(record.cups_produced_thousands >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_total_cost_is_raw_plus_fixed() {
        let params = BusinessParameters::default_plant();
        for record in simulate_months(&params, 4) {
            assert_relative_eq!(
                record.total_cost_lakhs,
                record.raw_material_cost_lakhs + record.fixed_cost_lakhs
            );
            assert_relative_eq!(
                record.net_profit_lakhs,
                record.revenue_lakhs - record.total_cost_lakhs
            );
        }
    }
}
