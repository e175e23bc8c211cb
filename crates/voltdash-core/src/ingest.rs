//! CSV ingestion for the Electric Vehicle Population dataset.
//!
//! Columns are addressed by header name, so column order and extra columns
//! in the source do not matter. Missing or unparseable values fall back to
//! the defaults documented on [`Vehicle`].

use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::models::{CafvEligibility, GeoPoint, UNKNOWN, Vehicle};

/// Raw row as published; every column is optional text.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRow {
    #[serde(rename = "Model")]
    model: Option<String>,
    #[serde(rename = "Make")]
    make: Option<String>,
    #[serde(rename = "Electric Range")]
    electric_range: Option<String>,
    #[serde(rename = "Electric Utility")]
    utility: Option<String>,
    #[serde(rename = "Clean Alternative Fuel Vehicle (CAFV) Eligibility")]
    cafv: Option<String>,
    #[serde(rename = "Model Year")]
    model_year: Option<String>,
    #[serde(rename = "Vehicle Location")]
    location: Option<String>,
}

impl RawRow {
    fn into_vehicle(self, id: u64) -> Vehicle {
        Vehicle {
            id,
            model: text_or_unknown(self.model),
            range: parse_range(self.electric_range.as_deref()),
            utility: text_or_unknown(self.utility),
            cafv: non_empty(self.cafv)
                .map(|s| CafvEligibility::from(s.as_str()))
                .unwrap_or_default(),
            year: parse_year(self.model_year.as_deref()),
            make: text_or_unknown(self.make),
            location: non_empty(self.location).and_then(|s| s.parse::<GeoPoint>().ok()),
        }
    }
}

/// Parses CSV text into vehicles with sequential ids starting at 1.
///
/// # Errors
///
/// Returns `AppError::CsvError` for malformed documents, e.g. a row whose
/// field count differs from the header. A single bad row fails the whole
/// document.
///
/// # Examples
///
/// ```
/// use voltdash_core::ingest::parse_vehicles;
///
/// let csv = "Make,Model,Model Year,Electric Range\nTESLA,MODEL Y,2021,0\n";
/// let vehicles = parse_vehicles(csv).unwrap();
/// assert_eq!(vehicles.len(), 1);
/// assert_eq!(vehicles[0].id, 1);
/// assert_eq!(vehicles[0].utility, "Unknown");
/// ```
pub fn parse_vehicles(text: &str) -> Result<Vec<Vehicle>, AppError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let mut vehicles = Vec::new();
    for (index, row) in reader.deserialize::<RawRow>().enumerate() {
        let row = row?;
        vehicles.push(row.into_vehicle(index as u64 + 1));
    }

    debug!("Parsed {} vehicle rows", vehicles.len());
    Ok(vehicles)
}

/// Text is kept verbatim; blank values count as missing.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn text_or_unknown(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| UNKNOWN.to_string())
}

fn parse_number(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n > 0.0)
}

/// Electric range in whole miles; fractional values round up.
fn parse_range(value: Option<&str>) -> u32 {
    parse_number(value)
        .map(|n| n.ceil().min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

fn parse_year(value: Option<&str>) -> i32 {
    parse_number(value)
        .map(|n| n.trunc().min(i32::MAX as f64) as i32)
        .unwrap_or(0)
}
