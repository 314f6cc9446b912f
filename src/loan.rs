//! Loan financing helpers
//!
//! Reducing-balance amortization used to show the financing cost of the plant
//! investment. Independent of the year-over-year projection.

use serde::{Deserialize, Serialize};

/// Longest tenor the calculator front ends accept
pub const MAX_TENOR_YEARS: u32 = 100;

/// Number of monthly installments in a tenor of `years`
pub fn installments(years: u32) -> u64 {
    u64::from(years) * 12
}

/// Equated monthly installment for a reducing-balance loan.
///
/// # Arguments
/// * `principal` - Loan amount in rupees
/// * `annual_rate_percent` - Annual interest rate as a percentage (12.0 for 12%)
/// * `years` - Loan tenor in years
///
/// A zero rate repays the principal in equal parts; a zero tenor returns 0.
/// Very long tenors converge on the interest-only payment `principal * r`.
pub fn compute_emi(principal: f64, annual_rate_percent: f64, years: u32) -> f64 {
    let n = installments(years);
    if n == 0 {
        return 0.0;
    }

    let r = monthly_rate(annual_rate_percent);
    let growth = (1.0 + r).powf(n as f64);
    if r == 0.0 || growth == 1.0 {
        return principal / n as f64;
    }
    if !growth.is_finite() {
        return principal * r;
    }

    principal * r * growth / (growth - 1.0)
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 1200.0
}

/// Totals over the life of a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

pub fn loan_summary(principal: f64, annual_rate_percent: f64, years: u32) -> LoanSummary {
    let emi = compute_emi(principal, annual_rate_percent, years);
    let total_payment = emi * installments(years) as f64;

    LoanSummary {
        principal,
        annual_rate_percent,
        years,
        emi,
        total_payment,
        total_interest: total_payment - principal,
    }
}

/// One installment of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub month: u64,
    pub opening_balance: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Month-by-month split of each installment into interest and principal
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    years: u32,
) -> Vec<AmortizationRow> {
    let n = installments(years);
    let emi = compute_emi(principal, annual_rate_percent, years);
    let r = monthly_rate(annual_rate_percent);

    let mut balance = principal;
    let mut rows = Vec::with_capacity(n as usize);

    for month in 1..=n {
        let interest = balance * r;
        // Final installment clears whatever float residue is left
        let repaid = if month == n { balance } else { emi - interest };
        let closing = balance - repaid;

        rows.push(AmortizationRow {
            month,
            opening_balance: balance,
            interest,
            principal: repaid,
            closing_balance: closing,
        });
        balance = closing;
    }

    rows
}
