#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Query model for the dashboard: the dropdown filter selection, the
//! free-text search parser, and the in-memory filter engine that reduces a
//! record set to the records one query matches.

pub mod filter;
pub mod search;

use crash_dash_collision_models::flex;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Injury outcome class selectable in the UI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString, AsRefStr,
)]
pub enum InjuryFilter {
    /// At least one person injured.
    Injured,
    /// At least one person killed.
    Killed,
    /// Neither injuries nor fatalities. Absent counters normalize to
    /// zero, so records with no counter fields fall in this class.
    #[serde(rename = "None")]
    #[strum(serialize = "None")]
    NoInjury,
}

/// One query as submitted by the UI: dropdown filters plus optional free
/// text. Unset dropdowns arrive as `null` or empty strings; both normalize
/// to `None` at the boundary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    /// Borough filter (exact name, case-insensitive match).
    #[serde(deserialize_with = "text_field")]
    pub borough: Option<String>,
    /// Crash year filter. Tolerates numeric strings.
    #[serde(deserialize_with = "year_field")]
    pub year: Option<i32>,
    /// Vehicle type filter, matched against both type slots.
    #[serde(deserialize_with = "text_field")]
    pub vehicle_type: Option<String>,
    /// Contributing factor filter, matched against both factor slots.
    #[serde(deserialize_with = "text_field")]
    pub contributing_factor: Option<String>,
    /// Injury outcome class.
    pub injury_type: Option<InjuryFilter>,
    /// Free-text query; parsed into filters and also used for substring
    /// search across text columns.
    #[serde(deserialize_with = "text_field")]
    pub search: Option<String>,
}

impl FilterSelection {
    /// Whether no filter and no search text is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.borough.is_none()
            && self.year.is_none()
            && self.vehicle_type.is_none()
            && self.contributing_factor.is_none()
            && self.injury_type.is_none()
            && self.search.is_none()
    }

    /// Fills each unset field from `other`. Explicit dropdown selections
    /// win over values parsed from search text.
    pub fn merge_missing_from(&mut self, other: Self) {
        if self.borough.is_none() {
            self.borough = other.borough;
        }
        if self.year.is_none() {
            self.year = other.year;
        }
        if self.vehicle_type.is_none() {
            self.vehicle_type = other.vehicle_type;
        }
        if self.contributing_factor.is_none() {
            self.contributing_factor = other.contributing_factor;
        }
        if self.injury_type.is_none() {
            self.injury_type = other.injury_type;
        }
    }
}

/// Deserializes a text filter field, mapping empty/whitespace strings and
/// `null` to `None`.
fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Deserializes the year field, tolerating numbers, numeric strings, empty
/// strings, and `null`.
#[allow(clippy::cast_possible_truncation)]
fn year_field<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(flex::number).map(|y| y as i32))
}
