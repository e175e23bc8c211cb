//! Export of vehicle records to JSON Lines, JSON or CSV.
//!
//! # Example
//!
//! ```
//! use voltdash_core::export::{ExportFormat, export_to_writer};
//!
//! let mut out = Vec::new();
//! let count = export_to_writer(&mut out, &[], ExportFormat::Json, None).unwrap();
//! assert_eq!(count, 0);
//! assert_eq!(String::from_utf8(out).unwrap(), "[\n]\n");
//! ```

use std::io::Write;

use crate::error::AppError;
use crate::models::Vehicle;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON Lines format (one JSON object per line).
    Jsonl,
    /// Standard JSON array format.
    Json,
    /// CSV format (comma-separated values).
    Csv,
}

const CSV_HEADER: [&str; 8] = [
    "id", "make", "model", "year", "range", "cafv", "utility", "location",
];

/// Writes vehicles to `writer`, returning the number of records written.
///
/// # Arguments
///
/// * `writer` - The output writer (e.g., stdout, file)
/// * `vehicles` - Records in the order they should appear
/// * `format` - The export format
/// * `limit` - Optional maximum number of records
pub fn export_to_writer<W: Write>(
    writer: &mut W,
    vehicles: &[Vehicle],
    format: ExportFormat,
    limit: Option<usize>,
) -> Result<u64, AppError> {
    let selected = &vehicles[..limit.unwrap_or(vehicles.len()).min(vehicles.len())];
    let mut count = 0u64;

    match format {
        ExportFormat::Jsonl => {
            for vehicle in selected {
                let json = serde_json::to_string(vehicle)?;
                writeln!(writer, "{}", json)?;
                count += 1;
            }
        }
        ExportFormat::Json => {
            writeln!(writer, "[")?;
            for (i, vehicle) in selected.iter().enumerate() {
                if i > 0 {
                    writeln!(writer, ",")?;
                }
                let json = serde_json::to_string_pretty(vehicle)?;
                for line in json.lines() {
                    writeln!(writer, "  {}", line)?;
                }
                count += 1;
            }
            writeln!(writer, "]")?;
        }
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut *writer);
            csv_writer.write_record(CSV_HEADER)?;
            for vehicle in selected {
                let location = vehicle
                    .location
                    .map(|p| p.to_string())
                    .unwrap_or_default();
                csv_writer.write_record([
                    vehicle.id.to_string().as_str(),
                    vehicle.make.as_str(),
                    vehicle.model.as_str(),
                    vehicle.year.to_string().as_str(),
                    vehicle.range.to_string().as_str(),
                    vehicle.cafv.as_str(),
                    vehicle.utility.as_str(),
                    location.as_str(),
                ])?;
                count += 1;
            }
            csv_writer.flush()?;
        }
    }

    writer.flush()?;
    Ok(count)
}
