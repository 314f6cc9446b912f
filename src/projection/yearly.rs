//! Ten-year rollup of the monthly simulation

use log::debug;

use crate::params::BusinessParameters;
use super::monthly::simulate_months;
use super::records::{MonthlyRecord, YearlyProjection, LAKHS_PER_CRORE};
use super::PROJECTION_YEARS;

/// Roll one year's months into an annual projection.
///
/// Raw material is recomputed from annual revenue rather than summed from the
/// monthly figures, so it may differ from the monthly sum in the last bits.
pub fn rollup_year(
    params: &BusinessParameters,
    year: u32,
    months: &[MonthlyRecord; 12],
    prior_cumulative_profit: f64,
) -> YearlyProjection {
    let total_cups_thousands: f64 = months.iter().map(|m| m.cups_produced_thousands).sum();
    let revenue_lakhs: f64 = months.iter().map(|m| m.revenue_lakhs).sum();
    let costs_lakhs: f64 = months.iter().map(|m| m.total_cost_lakhs).sum();

    let annual_revenue = revenue_lakhs / LAKHS_PER_CRORE;
    let annual_costs = costs_lakhs / LAKHS_PER_CRORE;
    let raw_material_cost = annual_revenue * params.raw_material_cost_percent;
    let net_profit = annual_revenue - annual_costs;

    let profit_margin = if annual_revenue != 0.0 {
        net_profit / annual_revenue * 100.0
    } else {
        0.0
    };

    // Crores to rupees over thousands of cups
    let net_profit_per_thousand_cups = if total_cups_thousands > 0.0 {
        net_profit * 1e7 / total_cups_thousands
    } else {
        0.0
    };

    YearlyProjection {
        year,
        avg_monthly_cups_thousands: total_cups_thousands / 12.0,
        annual_revenue_crores: annual_revenue,
        raw_material_cost_crores: raw_material_cost,
        fixed_cost_crores: annual_costs - raw_material_cost,
        total_cost_crores: annual_costs,
        gross_profit_crores: annual_revenue - raw_material_cost,
        net_profit_crores: net_profit,
        profit_margin_percent: profit_margin,
        cumulative_profit_crores: prior_cumulative_profit + net_profit,
        net_profit_per_thousand_cups,
    }
}

/// Project years 1..=10 in ascending order, carrying cumulative profit forward
pub fn project_years(params: &BusinessParameters) -> [YearlyProjection; PROJECTION_YEARS] {
    let mut cumulative_profit = 0.0;

    std::array::from_fn(|idx| {
        let year = idx as u32 + 1;
        let months = simulate_months(params, year);
        let projection = rollup_year(params, year, &months, cumulative_profit);
        cumulative_profit = projection.cumulative_profit_crores;

        debug!(
            "Year {}: revenue {:.4} Cr, net profit {:.4} Cr, cumulative {:.4} Cr",
            year, projection.annual_revenue_crores, projection.net_profit_crores, cumulative_profit
        );

        projection
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SeasonalCapacity;
    use approx::assert_relative_eq;

    #[test]
    fn test_ten_years_ascending() {
        let projections = project_years(&BusinessParameters::default_plant());
        assert_eq!(projections.len(), 10);
        for (idx, p) in projections.iter().enumerate() {
            assert_eq!(p.year, idx as u32 + 1);
        }
    }

    #[test]
    fn test_annual_revenue_is_monthly_sum_over_hundred() {
        let params = BusinessParameters::default_plant();
        let projections = project_years(&params);

        for p in &projections {
            let months = simulate_months(&params, p.year);
            let lakhs: f64 = months.iter().map(|m| m.revenue_lakhs).sum();
            assert_relative_eq!(lakhs / 100.0, p.annual_revenue_crores, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_cumulative_profit_accumulates() {
        let projections = project_years(&BusinessParameters::default_plant());

        assert_eq!(
            projections[0].cumulative_profit_crores,
            projections[0].net_profit_crores
        );
        for k in 1..projections.len() {
            assert_eq!(
                projections[k].cumulative_profit_crores,
                projections[k - 1].cumulative_profit_crores + projections[k].net_profit_crores
            );
        }
    }

    #[test]
    fn test_year_one_totals() {
        let params = BusinessParameters::default_plant();
        let p = &project_years(&params)[0];

        // Capacity-weighted working days: sum(capacity * days) over the year
        let weighted_days: f64 = crate::params::Month::ALL
            .iter()
            .map(|m| params.seasonal_capacity.get(*m) * m.working_days() as f64)
            .sum();
        let cups_thousands = 200.0 * weighted_days;
        let revenue_crores = cups_thousands * 1000.0 * 1.04 / 1e7;
        let fixed_crores = 12.0 * 711_250.0 / 1e7;

        assert_relative_eq!(p.avg_monthly_cups_thousands, cups_thousands / 12.0, max_relative = 1e-12);
        assert_relative_eq!(p.annual_revenue_crores, revenue_crores, max_relative = 1e-12);
        assert_relative_eq!(p.raw_material_cost_crores, revenue_crores * 0.55, max_relative = 1e-12);
        assert_relative_eq!(p.fixed_cost_crores, fixed_crores, max_relative = 1e-9);
        assert_relative_eq!(
            p.gross_profit_crores,
            revenue_crores * 0.45,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            p.net_profit_crores,
            revenue_crores * 0.45 - fixed_crores,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            p.profit_margin_percent,
            p.net_profit_crores / p.annual_revenue_crores * 100.0
        );
    }

    #[test]
    fn test_zero_price_gives_zero_margin() {
        let mut params = BusinessParameters::default_plant();
        params.price_per_cup.sudha = 0.0;
        params.price_per_cup.local = 0.0;

        for p in project_years(&params) {
            assert_eq!(p.annual_revenue_crores, 0.0);
            assert_eq!(p.profit_margin_percent, 0.0);
            assert!(p.net_profit_crores < 0.0);
        }
    }

    #[test]
    fn test_zero_capacity_gives_zero_margin_and_per_cup() {
        let mut params = BusinessParameters::default_plant();
        params.cups_per_day.thermoforming = 0.0;
        params.seasonal_capacity = SeasonalCapacity::flat(0.5);

        for p in project_years(&params) {
            assert_eq!(p.avg_monthly_cups_thousands, 0.0);
            assert_eq!(p.profit_margin_percent, 0.0);
            assert_eq!(p.net_profit_per_thousand_cups, 0.0);
            assert!(!p.profit_margin_percent.is_nan());
        }
    }

    #[test]
    fn test_net_profit_per_thousand_cups() {
        let params = BusinessParameters::default_plant();
        let p = &project_years(&params)[2];
        let cups_thousands = p.avg_monthly_cups_thousands * 12.0;
        assert_relative_eq!(
            p.net_profit_per_thousand_cups,
            p.net_profit_crores * 1e7 / cups_thousands,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_deterministic() {
        let params = BusinessParameters::default_plant();
        assert_eq!(project_years(&params), project_years(&params));
    }
}
