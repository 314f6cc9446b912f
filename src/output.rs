//! CSV export of monthly and yearly tables

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::AnalysisError;
use crate::projection::{MonthlyRecord, YearlyProjection};

fn write_records<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write monthly records with a header row
pub fn write_monthly_csv<W: Write>(writer: W, records: &[MonthlyRecord]) -> Result<(), AnalysisError> {
    write_records(writer, records)
}

/// Write yearly projections with a header row
pub fn write_yearly_csv<W: Write>(
    writer: W,
    projections: &[YearlyProjection],
) -> Result<(), AnalysisError> {
    write_records(writer, projections)
}

pub fn write_monthly_csv_to_path(path: &Path, records: &[MonthlyRecord]) -> Result<(), AnalysisError> {
    write_monthly_csv(File::create(path)?, records)
}

pub fn write_yearly_csv_to_path(
    path: &Path,
    projections: &[YearlyProjection],
) -> Result<(), AnalysisError> {
    write_yearly_csv(File::create(path)?, projections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BusinessParameters;
    use crate::projection::analyze;

    #[test]
    fn test_monthly_csv_layout() {
        let result = analyze(&BusinessParameters::default_plant()).unwrap();
        let mut buf = Vec::new();
        write_monthly_csv(&mut buf, &result.monthly).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[0].starts_with("month,workingDays,capacityPercent,cupsProducedThousands,revenueLakhs"));
        assert!(lines[1].starts_with("Jan,26,70"));
        assert!(lines[12].starts_with("Dec,26,"));
    }

    #[test]
    fn test_yearly_csv_layout() {
        let result = analyze(&BusinessParameters::default_plant()).unwrap();
        let mut buf = Vec::new();
        write_yearly_csv(&mut buf, &result.yearly).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("year,avgMonthlyCupsThousands,annualRevenueCrores"));
        assert!(lines[0].ends_with("cumulativeProfitCrores,netProfitPerThousandCups"));
        assert!(lines[10].starts_with("10,"));
    }
}
