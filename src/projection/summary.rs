//! Investment recovery metrics over the projection horizon

use super::records::{InvestmentSummary, YearlyProjection};
use super::PROJECTION_YEARS;

/// Whole years until cumulative net profit covers the investment.
///
/// Returns `(years, reached)`. When the investment is never recovered the
/// counter runs to the end of the horizon, so a result of 10 is ambiguous
/// without the `reached` flag.
pub fn payback_period(
    projections: &[YearlyProjection; PROJECTION_YEARS],
    initial_investment: f64,
) -> (u32, bool) {
    let mut cumulative = -initial_investment;
    let mut years = 0;

    for projection in projections {
        cumulative += projection.net_profit_crores;
        years += 1;
        if cumulative >= 0.0 {
            return (years, true);
        }
    }

    (years, false)
}

/// Totals, average annual ROI and payback over the ten annual projections
pub fn summarize(
    projections: &[YearlyProjection; PROJECTION_YEARS],
    initial_investment: f64,
) -> InvestmentSummary {
    let total_revenue: f64 = projections.iter().map(|p| p.annual_revenue_crores).sum();
    let total_profit: f64 = projections.iter().map(|p| p.net_profit_crores).sum();

    let avg_roi = if initial_investment != 0.0 {
        (total_profit / initial_investment / PROJECTION_YEARS as f64) * 100.0
    } else {
        0.0
    };

    let (payback_period_years, payback_reached) = payback_period(projections, initial_investment);

    InvestmentSummary {
        total_revenue_crores: total_revenue,
        total_profit_crores: total_profit,
        avg_roi_percent: avg_roi,
        payback_period_years,
        payback_reached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(year: u32, revenue: f64, net_profit: f64) -> YearlyProjection {
        YearlyProjection {
            year,
            avg_monthly_cups_thousands: 0.0,
            annual_revenue_crores: revenue,
            raw_material_cost_crores: 0.0,
            fixed_cost_crores: 0.0,
            total_cost_crores: revenue - net_profit,
            gross_profit_crores: net_profit,
            net_profit_crores: net_profit,
            profit_margin_percent: 0.0,
            cumulative_profit_crores: 0.0,
            net_profit_per_thousand_cups: 0.0,
        }
    }

    fn flat_years(net_profit: f64) -> [YearlyProjection; PROJECTION_YEARS] {
        std::array::from_fn(|idx| year(idx as u32 + 1, 4.0, net_profit))
    }

    #[test]
    fn test_avg_roi_is_annualized() {
        // 10 Cr total profit on 5 Cr over ten years
        let summary = summarize(&flat_years(1.0), 5.0);
        assert_eq!(summary.total_profit_crores, 10.0);
        assert_eq!(summary.avg_roi_percent, 20.0);
        assert_eq!(summary.total_revenue_crores, 40.0);
    }

    #[test]
    fn test_payback_first_year_cumulative_non_negative() {
        let (years, reached) = payback_period(&flat_years(1.0), 5.0);
        assert_eq!(years, 5);
        assert!(reached);

        // Exactly zero counts as recovered
        let (years, reached) = payback_period(&flat_years(2.5), 5.0);
        assert_eq!(years, 2);
        assert!(reached);
    }

    #[test]
    fn test_payback_saturates_at_horizon() {
        let never = summarize(&flat_years(0.1), 5.0);
        assert_eq!(never.payback_period_years, 10);
        assert!(!never.payback_reached);

        let mut exactly_ten = flat_years(0.0);
        exactly_ten[9].net_profit_crores = 5.0;
        let last = summarize(&exactly_ten, 5.0);
        assert_eq!(last.payback_period_years, 10);
        assert!(last.payback_reached);
    }

    #[test]
    fn test_payback_counts_losses_before_recovery() {
        let mut projections = flat_years(2.0);
        projections[0].net_profit_crores = -1.0;
        // -5 -1 +2 +2 +2 = 0 after year 4
        assert_eq!(payback_period(&projections, 5.0), (4, true));

        projections[0].net_profit_crores = -3.0;
        // -5 -3 +2 +2 +2 +2 = 0 after year 5
        assert_eq!(payback_period(&projections, 5.0), (5, true));
    }

    #[test]
    fn test_payback_within_horizon_for_any_profile() {
        for net_profit in [-2.0, 0.0, 0.3, 1.0, 50.0] {
            for investment in [0.01, 5.0, 1_000.0] {
                let summary = summarize(&flat_years(net_profit), investment);
                assert!((1..=10).contains(&summary.payback_period_years));
            }
        }
    }

    #[test]
    fn test_zero_investment_guard() {
        let summary = summarize(&flat_years(1.0), 0.0);
        assert_eq!(summary.avg_roi_percent, 0.0);
        assert_eq!(summary.payback_period_years, 1);
    }
}
