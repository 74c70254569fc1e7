#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived view types produced by the aggregation core.
//!
//! One type per visualization. These are serialized to JSON for the
//! renderer and are separate from the raw record contract so the two can
//! evolve independently.

use serde::{Deserialize, Serialize};

/// Headline counters for the stat cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Total records in the set.
    pub total: u64,
    /// Persons injured. Crash-level counter sum, or the person-level
    /// keyword fallback count when that sum is zero.
    pub injured: f64,
    /// Persons killed, same two-tier policy as `injured`.
    pub killed: f64,
    /// Distinct non-empty `collision_id` values.
    pub unique_collisions: u64,
}

/// One entry in a categorical ranking (borough, vehicle type, factor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCount {
    /// Category label as it appears in the data.
    pub label: String,
    /// Number of occurrences.
    pub count: u64,
}

impl LabelCount {
    /// Creates a label/count pair.
    #[must_use]
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Month-bucketed series for the line chart. The three series are aligned
/// to `periods`, which is sorted ascending ("YYYY-MM" keys, so lexical
/// order is chronological order).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    /// Distinct "YYYY-MM" bucket keys, ascending.
    pub periods: Vec<String>,
    /// Crashes per bucket.
    pub crashes: Vec<u64>,
    /// Persons injured per bucket.
    pub injured: Vec<f64>,
    /// Persons killed per bucket.
    pub killed: Vec<f64>,
}

impl TimeSeries {
    /// Whether the series contains no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

/// Borough-by-month crash count grid for the heatmap.
///
/// `counts[b][p]` is the crash count for `boroughs[b]` in `periods[p]`.
/// Both axes are sorted ascending; cells with no crashes hold zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoroughHeatmap {
    /// Borough row labels, ascending.
    pub boroughs: Vec<String>,
    /// Distinct "YYYY-MM" column keys, ascending.
    pub periods: Vec<String>,
    /// Crash counts per borough row, aligned to `periods`.
    pub counts: Vec<Vec<u64>>,
}

/// One plotted crash location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Marker size derived from severity, clamped to [3, 20].
    pub weight: f64,
    /// Hover text: borough, date, injured/killed counts. Display only.
    pub label: String,
}

/// Everything the renderer needs for one record set, computed in a single
/// pass by the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    /// Stat card counters.
    pub summary: SummaryStats,
    /// Crashes by borough.
    pub boroughs: Vec<LabelCount>,
    /// Vehicle type distribution (both type slots, top 8).
    pub vehicle_types: Vec<LabelCount>,
    /// Top contributing factors (both factor slots, top 20).
    pub contributing_factors: Vec<LabelCount>,
    /// Crashes/injured/killed by month.
    pub monthly: TimeSeries,
    /// Crashes by borough and month.
    pub heatmap: BoroughHeatmap,
    /// Capped, bounds-checked map points.
    pub points: Vec<MapPoint>,
}
