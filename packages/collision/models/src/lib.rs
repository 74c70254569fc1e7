#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Collision record contract and loose-field normalization.
//!
//! [`CollisionRecord`] mirrors the NYC Motor Vehicle Collisions dataset
//! field names exactly; every field is optional because no column is
//! reliably populated. Loosely-typed fields (counters, coordinates,
//! identifiers) are normalized once at the deserialization boundary by the
//! [`flex`] module rather than inspected ad hoc by each consumer.

pub mod dates;
pub mod flex;

use chrono::{Datelike as _, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One collision record as returned by the record-fetch collaborator.
///
/// The record set is immutable for the lifetime of one rendering pass:
/// aggregators borrow slices of records and produce new derived structures,
/// never mutating the input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionRecord {
    /// Opaque collision identifier, used only for distinctness counting.
    #[serde(default, deserialize_with = "flex::id")]
    pub collision_id: Option<String>,
    /// Crash date-time string; parse with [`Self::crash_datetime`].
    #[serde(default, alias = "crash_date")]
    pub crash_datetime: Option<String>,
    /// Persons injured in the crash. Normalized from number, numeric
    /// string, empty string, or `null`.
    #[serde(default, deserialize_with = "flex::numeric")]
    pub number_of_persons_injured: Option<f64>,
    /// Persons killed in the crash. Same normalization as injuries.
    #[serde(default, deserialize_with = "flex::numeric")]
    pub number_of_persons_killed: Option<f64>,
    /// Person-level outcome text (only in person-level record variants);
    /// fallback injury/fatality signal when crash-level counters are zero.
    #[serde(default)]
    pub person_injury: Option<String>,
    /// Borough name, display text only.
    #[serde(default)]
    pub borough: Option<String>,
    /// First vehicle type slot.
    #[serde(default)]
    pub vehicle_type_code_1: Option<String>,
    /// Second vehicle type slot.
    #[serde(default)]
    pub vehicle_type_code_2: Option<String>,
    /// Contributing factor attributed to the first vehicle.
    #[serde(default)]
    pub contributing_factor_vehicle_1: Option<String>,
    /// Contributing factor attributed to the second vehicle.
    #[serde(default)]
    pub contributing_factor_vehicle_2: Option<String>,
    /// Street the crash occurred on.
    #[serde(default)]
    pub on_street_name: Option<String>,
    /// Nearest cross street.
    #[serde(default)]
    pub cross_street_name: Option<String>,
    /// Off-street location (parking lot, driveway).
    #[serde(default)]
    pub off_street_name: Option<String>,
    /// Latitude (WGS84), normalized from number or numeric string.
    #[serde(default, deserialize_with = "flex::numeric")]
    pub latitude: Option<f64>,
    /// Longitude (WGS84), normalized from number or numeric string.
    #[serde(default, deserialize_with = "flex::numeric")]
    pub longitude: Option<f64>,
}

impl CollisionRecord {
    /// Parsed crash datetime, `None` when missing or unparseable.
    #[must_use]
    pub fn crash_datetime(&self) -> Option<NaiveDateTime> {
        self.crash_datetime
            .as_deref()
            .and_then(dates::parse_crash_datetime)
    }

    /// Calendar year of the crash, `None` without a usable date.
    #[must_use]
    pub fn crash_year(&self) -> Option<i32> {
        self.crash_datetime().map(|dt| dt.year())
    }

    /// Injured count with absence normalized to zero.
    #[must_use]
    pub fn injured(&self) -> f64 {
        self.number_of_persons_injured.unwrap_or(0.0)
    }

    /// Killed count with absence normalized to zero.
    #[must_use]
    pub fn killed(&self) -> f64 {
        self.number_of_persons_killed.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_loose_field_shapes() {
        let record: CollisionRecord = serde_json::from_value(json!({
            "collision_id": 4455123,
            "crash_datetime": "2022-03-05T14:30:00",
            "number_of_persons_injured": "2",
            "number_of_persons_killed": null,
            "borough": "BROOKLYN",
            "latitude": "40.6782",
            "longitude": -73.9442
        }))
        .unwrap();

        assert_eq!(record.collision_id.as_deref(), Some("4455123"));
        assert_eq!(record.number_of_persons_injured, Some(2.0));
        assert_eq!(record.number_of_persons_killed, None);
        assert_eq!(record.latitude, Some(40.6782));
        assert_eq!(record.longitude, Some(-73.9442));
    }

    #[test]
    fn empty_strings_normalize_to_absent() {
        let record: CollisionRecord = serde_json::from_value(json!({
            "number_of_persons_injured": "",
            "number_of_persons_killed": "n/a",
            "latitude": ""
        }))
        .unwrap();

        assert_eq!(record.number_of_persons_injured, None);
        assert_eq!(record.number_of_persons_killed, None);
        assert_eq!(record.latitude, None);
        assert!((record.injured() - 0.0).abs() < f64::EPSILON);
        assert!((record.killed() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn crash_date_alias_is_accepted() {
        let record: CollisionRecord =
            serde_json::from_value(json!({ "crash_date": "2022-03-05" })).unwrap();
        assert_eq!(record.crash_year(), Some(2022));
    }

    #[test]
    fn missing_fields_default_to_absent() {
        let record: CollisionRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record.collision_id, None);
        assert_eq!(record.crash_datetime(), None);
        assert_eq!(record.crash_year(), None);
    }
}
