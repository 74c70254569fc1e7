//! Borough-by-month cross-aggregation for the heatmap.
//!
//! Produces a dense grid: borough rows, "YYYY-MM" columns, per-cell crash
//! counts with zero fill. A record contributes only when it carries both a
//! non-empty borough and a parseable crash datetime; records missing
//! either dimension are excluded, not counted into a default row or
//! column. Both axes are sorted ascending, so column order matches the
//! time-series x-axis.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike as _;
use crash_dash_collision_models::CollisionRecord;
use crash_dash_dashboard_models::BoroughHeatmap;

/// Buckets records by (borough, calendar month) and lays the counts out as
/// a grid aligned to the sorted axis labels.
#[must_use]
pub fn aggregate(records: &[CollisionRecord]) -> BoroughHeatmap {
    let mut periods: BTreeSet<String> = BTreeSet::new();
    let mut cells: BTreeMap<&str, BTreeMap<String, u64>> = BTreeMap::new();

    for record in records {
        let Some(borough) = record.borough.as_deref().filter(|b| !b.is_empty()) else {
            continue;
        };
        let Some(dt) = record.crash_datetime() else {
            continue;
        };
        let period = format!("{:04}-{:02}", dt.year(), dt.month());
        periods.insert(period.clone());
        *cells.entry(borough).or_default().entry(period).or_insert(0) += 1;
    }

    let periods: Vec<String> = periods.into_iter().collect();
    let mut heatmap = BoroughHeatmap {
        boroughs: Vec::with_capacity(cells.len()),
        counts: Vec::with_capacity(cells.len()),
        periods,
    };
    for (borough, by_period) in cells {
        let row = heatmap
            .periods
            .iter()
            .map(|p| by_period.get(p).copied().unwrap_or(0))
            .collect();
        heatmap.boroughs.push(borough.to_string());
        heatmap.counts.push(row);
    }
    heatmap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(borough: Option<&str>, datetime: Option<&str>) -> CollisionRecord {
        CollisionRecord {
            borough: borough.map(str::to_string),
            crash_datetime: datetime.map(str::to_string),
            ..CollisionRecord::default()
        }
    }

    #[test]
    fn grid_is_dense_with_zero_fill() {
        let records = vec![
            record(Some("QUEENS"), Some("2022-03-05")),
            record(Some("BROOKLYN"), Some("2022-04-01")),
            record(Some("BROOKLYN"), Some("2022-03-20")),
            record(Some("BROOKLYN"), Some("2022-03-21")),
        ];
        let heatmap = aggregate(&records);
        assert_eq!(heatmap.boroughs, vec!["BROOKLYN", "QUEENS"]);
        assert_eq!(heatmap.periods, vec!["2022-03", "2022-04"]);
        // Queens has no April crashes; the cell is zero, not missing.
        assert_eq!(heatmap.counts, vec![vec![2, 1], vec![1, 0]]);
    }

    #[test]
    fn axes_are_strictly_ascending() {
        let records = vec![
            record(Some("QUEENS"), Some("2023-01-01")),
            record(Some("BRONX"), Some("2021-12-31")),
            record(Some("MANHATTAN"), Some("2022-06-15")),
        ];
        let heatmap = aggregate(&records);
        assert!(heatmap.boroughs.windows(2).all(|w| w[0] < w[1]));
        assert!(heatmap.periods.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn records_missing_either_dimension_are_excluded() {
        let records = vec![
            record(Some("QUEENS"), Some("2022-03-05")),
            record(None, Some("2022-03-05")),
            record(Some(""), Some("2022-03-05")),
            record(Some("BRONX"), None),
            record(Some("BRONX"), Some("garbage")),
        ];
        let heatmap = aggregate(&records);
        assert_eq!(heatmap.boroughs, vec!["QUEENS"]);
        assert_eq!(heatmap.counts, vec![vec![1]]);
    }

    #[test]
    fn rows_align_with_the_period_axis() {
        let records = vec![
            record(Some("QUEENS"), Some("2022-01-01")),
            record(Some("BRONX"), Some("2022-02-01")),
        ];
        let heatmap = aggregate(&records);
        for row in &heatmap.counts {
            assert_eq!(row.len(), heatmap.periods.len());
        }
        let total: u64 = heatmap.counts.iter().flatten().sum();
        assert_eq!(total, 2);
    }
}
