#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the dashboard server.
//!
//! These are serialized to JSON for the REST API. The request side reuses
//! [`crash_dash_query::FilterSelection`] directly; this crate adds the
//! response envelopes and the filter vocabulary payload for the UI
//! dropdowns.

use crash_dash_dashboard_models::DashboardViews;
use crash_dash_query::InjuryFilter;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator as _;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Filter vocabularies for the UI dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Borough names.
    pub boroughs: Vec<String>,
    /// Selectable crash years, descending.
    pub years: Vec<i32>,
    /// Canonical vehicle type labels.
    pub vehicle_types: Vec<String>,
    /// Canonical contributing factor labels.
    pub contributing_factors: Vec<String>,
    /// Injury outcome classes.
    pub injury_types: Vec<String>,
}

/// First year of the upstream dataset.
pub const FIRST_DATA_YEAR: i32 = 2012;

const BOROUGHS: &[&str] = &["Brooklyn", "Queens", "Manhattan", "Bronx", "Staten Island"];

/// Canonical vehicle type labels. Matches the search parser's keyword
/// table targets so dropdowns and parsed free text agree.
const VEHICLE_TYPES: &[&str] = &[
    "Sedan",
    "Station Wagon/Sport Utility Vehicle",
    "Taxi",
    "Pick-up Truck",
    "Van",
    "Bus",
    "Truck",
    "Motorcycle",
    "Ambulance",
];

const CONTRIBUTING_FACTORS: &[&str] = &[
    "Driver Inattention/Distraction",
    "Failure To Yield Right-Of-Way",
    "Following Too Closely",
    "Unsafe Speed",
    "Backing Unsafely",
];

impl FilterOptions {
    /// Builds the vocabulary payload, with years spanning
    /// [`FIRST_DATA_YEAR`] through `latest_year` descending.
    #[must_use]
    pub fn for_latest_year(latest_year: i32) -> Self {
        let mut years: Vec<i32> = (FIRST_DATA_YEAR..=latest_year.max(FIRST_DATA_YEAR)).collect();
        years.reverse();
        Self {
            boroughs: BOROUGHS.iter().map(ToString::to_string).collect(),
            years,
            vehicle_types: VEHICLE_TYPES.iter().map(ToString::to_string).collect(),
            contributing_factors: CONTRIBUTING_FACTORS
                .iter()
                .map(ToString::to_string)
                .collect(),
            injury_types: InjuryFilter::iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Response envelope for the data endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    /// Records matched by the query after all filtering.
    pub record_count: u64,
    /// Derived views, absent when no records matched.
    pub views: Option<DashboardViews>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_are_descending_from_latest() {
        let options = FilterOptions::for_latest_year(2025);
        assert_eq!(options.years.first(), Some(&2025));
        assert_eq!(options.years.last(), Some(&FIRST_DATA_YEAR));
        assert!(options.years.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn injury_vocabulary_uses_display_names() {
        let options = FilterOptions::for_latest_year(2025);
        assert_eq!(options.injury_types, vec!["Injured", "Killed", "None"]);
    }
}
