#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation core: turns one immutable collision record set into the
//! derived series each visualization consumes.
//!
//! Every aggregator is a pure function of the record slice; none of them
//! depend on another's output and none of them can fail. Malformed fields
//! degrade to documented defaults (absent numbers count as zero, undated
//! records leave the time series, bad coordinates leave the map) instead
//! of surfacing errors.

pub mod categorical;
pub mod geo;
pub mod heatmap;
pub mod summary;
pub mod temporal;

use crash_dash_collision_models::CollisionRecord;
use crash_dash_dashboard_models::DashboardViews;

use categorical::{CategoricalOptions, EXCLUDED_LABELS};

/// Borough ranking size.
pub const BOROUGH_TOP_N: usize = 8;
/// Vehicle type ranking size.
pub const VEHICLE_TYPE_TOP_N: usize = 8;
/// Contributing factor ranking size.
pub const FACTOR_TOP_N: usize = 20;

/// Computes every derived view for one record set.
///
/// Returns `None` for an empty set; consumers render their empty state.
/// This is a normal terminal condition, not an error. Re-running over the
/// same slice yields identical output.
#[must_use]
pub fn compose(records: &[CollisionRecord]) -> Option<DashboardViews> {
    if records.is_empty() {
        return None;
    }

    let views = DashboardViews {
        summary: summary::summarize(records),
        boroughs: categorical::aggregate(
            records,
            &CategoricalOptions {
                top_n: BOROUGH_TOP_N,
                excluded: &[],
            },
            |r| [r.borough.as_deref(), None],
        ),
        vehicle_types: categorical::aggregate(
            records,
            &CategoricalOptions {
                top_n: VEHICLE_TYPE_TOP_N,
                excluded: EXCLUDED_LABELS,
            },
            |r| {
                [
                    r.vehicle_type_code_1.as_deref(),
                    r.vehicle_type_code_2.as_deref(),
                ]
            },
        ),
        contributing_factors: categorical::aggregate(
            records,
            &CategoricalOptions {
                top_n: FACTOR_TOP_N,
                excluded: EXCLUDED_LABELS,
            },
            |r| {
                [
                    r.contributing_factor_vehicle_1.as_deref(),
                    r.contributing_factor_vehicle_2.as_deref(),
                ]
            },
        ),
        monthly: temporal::aggregate(records),
        heatmap: heatmap::aggregate(records),
        points: geo::select(records),
    };

    log::debug!(
        "Composed views over {} records: {} boroughs, {} vehicle types, {} factors, {} months, {} points",
        records.len(),
        views.boroughs.len(),
        views.vehicle_types.len(),
        views.contributing_factors.len(),
        views.monthly.periods.len(),
        views.points.len()
    );
    Some(views)
}
