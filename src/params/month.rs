//! Calendar months, working-day table and the fiscal rent anchor

use serde::{Deserialize, Serialize};

/// Working days per calendar month (February shortened)
pub const WORKING_DAYS: [u32; 12] = [26, 24, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26];

/// Calendar month, Jan..Dec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based month index (Jan = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn working_days(self) -> u32 {
        WORKING_DAYS[self.index()]
    }

    /// Display label, e.g. "Jan"
    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Parse "jan", "Jan", "JANUARY", "1" style labels
    pub fn parse(label: &str) -> Option<Month> {
        let label = label.trim();
        if let Ok(number) = label.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| Month::ALL.get(idx).copied());
        }
        let lower = label.to_ascii_lowercase();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(&lower) || full_name(*m) == lower)
    }
}

fn full_name(month: Month) -> &'static str {
    match month {
        Month::Jan => "january",
        Month::Feb => "february",
        Month::Mar => "march",
        Month::Apr => "april",
        Month::May => "may",
        Month::Jun => "june",
        Month::Jul => "july",
        Month::Aug => "august",
        Month::Sep => "september",
        Month::Oct => "october",
        Month::Nov => "november",
        Month::Dec => "december",
    }
}
