//! In-memory filter engine.
//!
//! Reduces one record set to the records matching a [`FilterSelection`].
//! Dropdown filters compare case-insensitively; free text does a
//! case-insensitive substring scan across the text columns. Paired fields
//! (vehicle type slots, contributing factor slots) match on either slot.

use crash_dash_collision_models::CollisionRecord;

use crate::{FilterSelection, InjuryFilter};

/// Applies the selection to `records`, returning matching records in input
/// order. An empty selection matches everything.
#[must_use]
pub fn apply(records: &[CollisionRecord], selection: &FilterSelection) -> Vec<CollisionRecord> {
    let needle = selection
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    records
        .iter()
        .filter(|record| matches(record, selection, needle.as_deref()))
        .cloned()
        .collect()
}

fn matches(record: &CollisionRecord, selection: &FilterSelection, needle: Option<&str>) -> bool {
    if let Some(borough) = &selection.borough
        && !field_eq(record.borough.as_deref(), borough)
    {
        return false;
    }

    if let Some(year) = selection.year
        && record.crash_year() != Some(year)
    {
        return false;
    }

    if let Some(vehicle) = &selection.vehicle_type
        && !field_eq(record.vehicle_type_code_1.as_deref(), vehicle)
        && !field_eq(record.vehicle_type_code_2.as_deref(), vehicle)
    {
        return false;
    }

    if let Some(factor) = &selection.contributing_factor
        && !field_eq(record.contributing_factor_vehicle_1.as_deref(), factor)
        && !field_eq(record.contributing_factor_vehicle_2.as_deref(), factor)
    {
        return false;
    }

    if let Some(injury) = selection.injury_type {
        let ok = match injury {
            InjuryFilter::Injured => record.injured() > 0.0,
            InjuryFilter::Killed => record.killed() > 0.0,
            InjuryFilter::NoInjury => {
                record.injured().abs() < f64::EPSILON && record.killed().abs() < f64::EPSILON
            }
        };
        if !ok {
            return false;
        }
    }

    if let Some(needle) = needle
        && !text_columns(record)
            .into_iter()
            .flatten()
            .any(|column| column.to_lowercase().contains(needle))
    {
        return false;
    }

    true
}

fn field_eq(field: Option<&str>, filter: &str) -> bool {
    field.is_some_and(|value| value.eq_ignore_ascii_case(filter))
}

fn text_columns(record: &CollisionRecord) -> [Option<&str>; 8] {
    [
        record.borough.as_deref(),
        record.vehicle_type_code_1.as_deref(),
        record.vehicle_type_code_2.as_deref(),
        record.contributing_factor_vehicle_1.as_deref(),
        record.contributing_factor_vehicle_2.as_deref(),
        record.on_street_name.as_deref(),
        record.cross_street_name.as_deref(),
        record.off_street_name.as_deref(),
    ]
}
