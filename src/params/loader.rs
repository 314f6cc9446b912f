//! JSON and CSV loaders for business parameters
//!
//! Parameters arrive as the calculator's camelCase JSON. The seasonal table can
//! be overridden separately from a `month,capacity` CSV.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use super::data::{BusinessParameters, SeasonalCapacity};
use super::month::Month;
use crate::error::{AnalysisError, ParameterError};
use crate::projection::PROJECTION_YEARS;

/// Raw CSV row of a seasonal capacity file
#[derive(Debug, Deserialize)]
struct SeasonalRow {
    month: String,
    capacity: f64,
}

const SEASONAL_KEYS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Required top-level keys and the keys each nested object must carry
const REQUIRED_FIELDS: [(&str, &[&str]); 10] = [
    ("initialInvestmentCrores", &[]),
    ("productionSetup", &["thermoformingMachines", "printers", "sheetlines"]),
    ("cupsPerDay", &["thermoforming", "printing"]),
    ("pricePerCup", &["sudha", "local"]),
    ("mixRatio", &["sudha", "local"]),
    ("rawMaterialCostPercent", &[]),
    ("fixedCostsMonthly", &["rent", "electricity", "maintenance", "manpower"]),
    ("seasonalCapacity", &SEASONAL_KEYS),
    ("growthRates", &["price", "volume", "rawMaterial", "fixedCosts"]),
    ("rentIncreaseRate", &[]),
];

/// Parse parameters from a JSON string
pub fn from_json_str(json: &str) -> Result<BusinessParameters, AnalysisError> {
    let value: Value = serde_json::from_str(json)?;
    let params = from_json_value(value)?;
    warn_short_volume_growth(&params);
    Ok(params)
}

/// Load parameters from a JSON file
pub fn from_json_path(path: &Path) -> Result<BusinessParameters, AnalysisError> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(file)?;
    let params = from_json_value(value)?;
    debug!("Loaded business parameters from {}", path.display());
    warn_short_volume_growth(&params);
    Ok(params)
}

/// Convert a parsed JSON document, reporting absent fields as parameter errors.
///
/// A missing object is reported once under its own name; a missing key inside
/// a present object is reported under its dotted path. Type mismatches are
/// left to serde and surface as `AnalysisError::Json`.
pub fn from_json_value(value: Value) -> Result<BusinessParameters, AnalysisError> {
    let missing = missing_fields(&value);
    if !missing.is_empty() {
        return Err(AnalysisError::InvalidParameters(missing));
    }
    Ok(serde_json::from_value(value)?)
}

fn missing_fields(value: &Value) -> Vec<ParameterError> {
    let Some(root) = value.as_object() else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    for (name, children) in REQUIRED_FIELDS {
        match root.get(name) {
            None | Some(Value::Null) => errors.push(ParameterError::new(name, "is required")),
            Some(Value::Object(nested)) => {
                for child in children.iter() {
                    if matches!(nested.get(*child), None | Some(Value::Null)) {
                        errors.push(ParameterError::new(
                            format!("{}.{}", name, child),
                            "is required",
                        ));
                    }
                }
            }
            Some(_) => {}
        }
    }
    errors
}

/// Read a `month,capacity` CSV on top of `base`; months not listed keep their base value
pub fn read_seasonal_capacity<R: Read>(
    reader: R,
    base: &SeasonalCapacity,
) -> Result<SeasonalCapacity, AnalysisError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut seasonal = base.clone();
    let mut seen = 0usize;

    for result in reader.deserialize() {
        let row: SeasonalRow = result?;
        let month = Month::parse(&row.month)
            .ok_or_else(|| AnalysisError::UnknownMonth(row.month.clone()))?;
        seasonal.set(month, row.capacity);
        seen += 1;
    }

    if seen < 12 {
        warn!(
            "Seasonal capacity file covers {} of 12 months, remaining months keep their base values",
            seen
        );
    }

    Ok(seasonal)
}

/// Load a seasonal capacity CSV file on top of `base`
pub fn load_seasonal_capacity(
    path: &Path,
    base: &SeasonalCapacity,
) -> Result<SeasonalCapacity, AnalysisError> {
    let file = File::open(path)?;
    read_seasonal_capacity(file, base)
}

fn warn_short_volume_growth(params: &BusinessParameters) {
    let supplied = params.growth_rates.volume.len();
    if supplied < PROJECTION_YEARS {
        warn!(
            "growthRates.volume has {} entries, years {}..{} project with no volume growth",
            supplied,
            supplied + 1,
            PROJECTION_YEARS
        );
    }
}
