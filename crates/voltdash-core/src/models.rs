//! Domain models for vehicle registrations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;

/// Placeholder used for missing text columns.
pub const UNKNOWN: &str = "Unknown";

/// A single electric-vehicle registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Sequential identifier, 1-based, in source row order.
    pub id: u64,
    pub model: String,
    /// Electric range in miles.
    pub range: u32,
    /// Electric utility serving the registration address.
    pub utility: String,
    pub cafv: CafvEligibility,
    /// Model year, `0` when unknown.
    pub year: i32,
    pub make: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl Vehicle {
    /// Returns true if the model year is known.
    pub fn has_year(&self) -> bool {
        self.year != 0
    }
}

/// Clean Alternative Fuel Vehicle eligibility.
///
/// The dataset publishes three values; anything else is kept verbatim so the
/// wire representation never loses information.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CafvEligibility {
    Eligible,
    NotEligibleLowRange,
    Unresearched,
    Other(String),
}

impl CafvEligibility {
    pub const ELIGIBLE: &'static str = "Clean Alternative Fuel Vehicle Eligible";
    pub const NOT_ELIGIBLE_LOW_RANGE: &'static str = "Not eligible due to low battery range";
    pub const UNRESEARCHED: &'static str =
        "Eligibility unknown as battery range has not been researched";

    /// Returns the dataset text for this category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Eligible => Self::ELIGIBLE,
            Self::NotEligibleLowRange => Self::NOT_ELIGIBLE_LOW_RANGE,
            Self::Unresearched => Self::UNRESEARCHED,
            Self::Other(text) => text,
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

impl Default for CafvEligibility {
    fn default() -> Self {
        Self::Other(UNKNOWN.to_string())
    }
}

impl From<&str> for CafvEligibility {
    fn from(s: &str) -> Self {
        match s {
            Self::ELIGIBLE => Self::Eligible,
            Self::NOT_ELIGIBLE_LOW_RANGE => Self::NotEligibleLowRange,
            Self::UNRESEARCHED => Self::Unresearched,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CafvEligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CafvEligibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CafvEligibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// A WGS84 coordinate pair.
///
/// Parsed from and rendered as WKT, e.g. `POINT (-122.30839 47.610365)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl FromStr for GeoPoint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::Generic(format!("Invalid WKT point: '{}'", s));

        let inner = s
            .trim()
            .strip_prefix("POINT")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let mut parts = inner.split_whitespace();
        let (Some(lon), Some(lat), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let longitude: f64 = lon.parse().map_err(|_| invalid())?;
        let latitude: f64 = lat.parse().map_err(|_| invalid())?;

        if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid());
        }

        Ok(Self {
            longitude,
            latitude,
        })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the decimal point on whole numbers: -122.0, not -122.
        write!(f, "POINT ({:?} {:?})", self.longitude, self.latitude)
    }
}

impl Serialize for GeoPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
