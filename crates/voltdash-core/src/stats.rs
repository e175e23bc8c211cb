//! Aggregate statistics over the vehicle list.
//!
//! Everything here is a pure function of the input slice; callers re-derive
//! statistics on every request rather than caching them.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::Vehicle;

/// Number of makes reported in [`VehicleStats::top_makes`].
pub const TOP_MAKES_LIMIT: usize = 10;

/// Electric range buckets, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeBucket {
    UpTo50,
    UpTo100,
    UpTo200,
    Over200,
}

impl RangeBucket {
    pub const ALL: [RangeBucket; 4] = [
        RangeBucket::UpTo50,
        RangeBucket::UpTo100,
        RangeBucket::UpTo200,
        RangeBucket::Over200,
    ];

    /// Returns the bucket a range (in miles) falls into.
    pub fn for_range(range: u32) -> Self {
        match range {
            0..=50 => Self::UpTo50,
            51..=100 => Self::UpTo100,
            101..=200 => Self::UpTo200,
            _ => Self::Over200,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UpTo50 => "0-50",
            Self::UpTo100 => "51-100",
            Self::UpTo200 => "101-200",
            Self::Over200 => "200+",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::UpTo50 => 0,
            Self::UpTo100 => 1,
            Self::UpTo200 => 2,
            Self::Over200 => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CafvCount {
    #[serde(rename = "type")]
    pub cafv_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtilityCount {
    pub utility: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeBucketCount {
    pub range: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MakeCount {
    pub make: String,
    pub count: usize,
}

/// Aggregate statistics for a vehicle list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleStats {
    pub total_vehicles: usize,
    /// Sum of all `cafv_breakdown` counts.
    pub cafv_count: usize,
    /// Vehicles in the "Clean Alternative Fuel Vehicle Eligible" category.
    pub cafv_eligible_count: usize,
    /// One entry per eligibility text, first-seen order.
    pub cafv_breakdown: Vec<CafvCount>,
    /// One entry per utility text, first-seen order.
    pub utility_breakdown: Vec<UtilityCount>,
    /// Always four entries, see [`RangeBucket::ALL`].
    pub range_distribution: Vec<RangeBucketCount>,
    /// Known model years, ascending.
    pub yearly_adoption: Vec<YearCount>,
    pub unknown_year_count: usize,
    pub top_makes: Vec<MakeCount>,
    /// Mean range in miles, one decimal.
    pub average_range: f64,
}

/// Computes all statistics in a handful of linear passes.
///
/// # Examples
///
/// ```
/// use voltdash_core::stats::compute_stats;
///
/// let stats = compute_stats(&[]);
/// assert_eq!(stats.total_vehicles, 0);
/// assert_eq!(stats.range_distribution.len(), 4);
/// ```
pub fn compute_stats(vehicles: &[Vehicle]) -> VehicleStats {
    let cafv_breakdown: Vec<CafvCount> = count_first_seen(vehicles.iter().map(|v| v.cafv.as_str()))
        .into_iter()
        .map(|(cafv_type, count)| CafvCount { cafv_type, count })
        .collect();

    let utility_breakdown = count_first_seen(vehicles.iter().map(|v| v.utility.as_str()))
        .into_iter()
        .map(|(utility, count)| UtilityCount { utility, count })
        .collect();

    let cafv_count = cafv_breakdown.iter().map(|c| c.count).sum();
    let cafv_eligible_count = vehicles.iter().filter(|v| v.cafv.is_eligible()).count();

    VehicleStats {
        total_vehicles: vehicles.len(),
        cafv_count,
        cafv_eligible_count,
        cafv_breakdown,
        utility_breakdown,
        range_distribution: range_distribution(vehicles),
        yearly_adoption: yearly_adoption(vehicles),
        unknown_year_count: vehicles.iter().filter(|v| !v.has_year()).count(),
        top_makes: top_makes(vehicles, TOP_MAKES_LIMIT),
        average_range: average_range(vehicles),
    }
}

/// Counts occurrences of each key, preserving the order keys first appear in.
fn count_first_seen<'a, I>(keys: I) -> Vec<(String, usize)>
where
    I: Iterator<Item = &'a str>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        match positions.get(key) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }

    counts
}

fn range_distribution(vehicles: &[Vehicle]) -> Vec<RangeBucketCount> {
    let mut buckets = [0usize; 4];
    for vehicle in vehicles {
        buckets[RangeBucket::for_range(vehicle.range).index()] += 1;
    }

    RangeBucket::ALL
        .iter()
        .map(|bucket| RangeBucketCount {
            range: bucket.label().to_string(),
            value: buckets[bucket.index()],
        })
        .collect()
}

fn yearly_adoption(vehicles: &[Vehicle]) -> Vec<YearCount> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for vehicle in vehicles.iter().filter(|v| v.has_year()) {
        *years.entry(vehicle.year).or_default() += 1;
    }

    years
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

fn top_makes(vehicles: &[Vehicle], limit: usize) -> Vec<MakeCount> {
    let mut makes: Vec<MakeCount> = count_first_seen(vehicles.iter().map(|v| v.make.as_str()))
        .into_iter()
        .map(|(make, count)| MakeCount { make, count })
        .collect();

    makes.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.make.cmp(&b.make)));
    makes.truncate(limit);
    makes
}

fn average_range(vehicles: &[Vehicle]) -> f64 {
    if vehicles.is_empty() {
        return 0.0;
    }

    let total: u64 = vehicles.iter().map(|v| u64::from(v.range)).sum();
    let mean = total as f64 / vehicles.len() as f64;
    (mean * 10.0).round() / 10.0
}
