//! Calendar-month bucketing for the time-series chart.
//!
//! Records without a parseable crash datetime are excluded from all three
//! series rather than counted into a zero bucket. Bucket keys are
//! zero-padded "YYYY-MM" strings, so the `BTreeMap` iteration order is both
//! lexical and chronological; consumers rely on that x-axis ordering.

use std::collections::BTreeMap;

use chrono::Datelike as _;
use crash_dash_collision_models::CollisionRecord;
use crash_dash_dashboard_models::TimeSeries;

#[derive(Default)]
struct Bucket {
    crashes: u64,
    injured: f64,
    killed: f64,
}

/// Buckets records into calendar months, summing crash counts and the
/// normalized injured/killed counters per bucket.
#[must_use]
pub fn aggregate(records: &[CollisionRecord]) -> TimeSeries {
    let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();

    for record in records {
        let Some(dt) = record.crash_datetime() else {
            continue;
        };
        let key = format!("{:04}-{:02}", dt.year(), dt.month());
        let bucket = buckets.entry(key).or_default();
        bucket.crashes += 1;
        bucket.injured += record.injured();
        bucket.killed += record.killed();
    }

    let mut series = TimeSeries::default();
    for (period, bucket) in buckets {
        series.periods.push(period);
        series.crashes.push(bucket.crashes);
        series.injured.push(bucket.injured);
        series.killed.push(bucket.killed);
    }
    series
}
