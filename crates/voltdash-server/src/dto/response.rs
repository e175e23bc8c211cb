//! Response DTOs for API endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use voltdash_core::Vehicle;
use voltdash_core::stats::{
    CafvCount, MakeCount, RangeBucketCount, UtilityCount, VehicleStats, YearCount,
};

// =============================================================================
// Health
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy", "loading", or "degraded")
    pub status: String,
    /// Server version
    pub version: String,
    /// Dataset load status
    pub dataset: ServiceStatus,
}

/// Status of the in-memory dataset.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    /// Whether the dataset loaded successfully
    pub healthy: bool,
    /// Optional message (e.g., error details)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of vehicle records held in memory
    pub records: usize,
    /// Where the dataset was loaded from
    pub source: String,
    /// When the load finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Vehicles
// =============================================================================

/// A single electric vehicle registration.
#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleResponse {
    /// Sequential record id, starting at 1
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "MODEL Y")]
    pub model: String,
    /// Electric range in miles (0 when not researched)
    #[schema(example = 291)]
    pub range: u32,
    #[schema(example = "PUGET SOUND ENERGY INC")]
    pub utility: String,
    /// Clean Alternative Fuel Vehicle eligibility text
    #[schema(example = "Clean Alternative Fuel Vehicle Eligible")]
    pub cafv: String,
    /// Model year (0 when unknown)
    #[schema(example = 2020)]
    pub year: i32,
    #[schema(example = "TESLA")]
    pub make: String,
    /// WKT point, e.g. "POINT (-122.3 47.6)"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: v.id,
            model: v.model.clone(),
            range: v.range,
            utility: v.utility.clone(),
            cafv: v.cafv.as_str().to_string(),
            year: v.year,
            make: v.make.clone(),
            location: v.location.map(|p| p.to_string()),
        }
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Aggregate statistics over all vehicle records.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of records
    pub total_vehicles: usize,
    /// Sum of the CAFV breakdown counts
    pub cafv_count: usize,
    /// Records eligible as Clean Alternative Fuel Vehicles
    pub cafv_eligible_count: usize,
    /// Records per eligibility text, in first-seen order
    pub cafv_breakdown: Vec<CafvCountDto>,
    /// Records per electric utility, in first-seen order
    pub utility_breakdown: Vec<UtilityCountDto>,
    /// Records per range bucket: 0-50, 51-100, 101-200, 200+
    pub range_distribution: Vec<RangeBucketDto>,
    /// Records per model year, ascending, excluding unknown years
    pub yearly_adoption: Vec<YearCountDto>,
    /// Records without a model year
    pub unknown_year_count: usize,
    /// Most frequent makes
    pub top_makes: Vec<MakeCountDto>,
    /// Mean electric range in miles, one decimal
    pub average_range: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CafvCountDto {
    #[serde(rename = "type")]
    #[schema(example = "Clean Alternative Fuel Vehicle Eligible")]
    pub cafv_type: String,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UtilityCountDto {
    pub utility: String,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RangeBucketDto {
    #[schema(example = "0-50")]
    pub range: String,
    pub value: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct YearCountDto {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MakeCountDto {
    pub make: String,
    pub count: usize,
}

impl From<CafvCount> for CafvCountDto {
    fn from(c: CafvCount) -> Self {
        Self {
            cafv_type: c.cafv_type,
            count: c.count,
        }
    }
}

impl From<UtilityCount> for UtilityCountDto {
    fn from(c: UtilityCount) -> Self {
        Self {
            utility: c.utility,
            count: c.count,
        }
    }
}

impl From<RangeBucketCount> for RangeBucketDto {
    fn from(c: RangeBucketCount) -> Self {
        Self {
            range: c.range,
            value: c.value,
        }
    }
}

impl From<YearCount> for YearCountDto {
    fn from(c: YearCount) -> Self {
        Self {
            year: c.year,
            count: c.count,
        }
    }
}

impl From<MakeCount> for MakeCountDto {
    fn from(c: MakeCount) -> Self {
        Self {
            make: c.make,
            count: c.count,
        }
    }
}

impl From<VehicleStats> for StatsResponse {
    fn from(s: VehicleStats) -> Self {
        Self {
            total_vehicles: s.total_vehicles,
            cafv_count: s.cafv_count,
            cafv_eligible_count: s.cafv_eligible_count,
            cafv_breakdown: s.cafv_breakdown.into_iter().map(Into::into).collect(),
            utility_breakdown: s.utility_breakdown.into_iter().map(Into::into).collect(),
            range_distribution: s.range_distribution.into_iter().map(Into::into).collect(),
            yearly_adoption: s.yearly_adoption.into_iter().map(Into::into).collect(),
            unknown_year_count: s.unknown_year_count,
            top_makes: s.top_makes.into_iter().map(Into::into).collect(),
            average_range: s.average_range,
        }
    }
}
