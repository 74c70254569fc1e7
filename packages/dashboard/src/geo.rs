//! Map point selection.
//!
//! Filters records to the NYC metro bounding box, caps the result size to
//! bound rendering cost, and derives a per-point marker weight from
//! severity. Records with missing, unparseable, or out-of-bounds
//! coordinates are silently dropped.

use crash_dash_collision_models::CollisionRecord;
use crash_dash_dashboard_models::MapPoint;

/// Hard cap on plotted points, first-N in input order.
pub const MAX_POINTS: usize = 5000;

/// NYC metro envelope.
const LAT_RANGE: std::ops::RangeInclusive<f64> = 40.5..=40.9;
const LON_RANGE: std::ops::RangeInclusive<f64> = -74.3..=-73.7;

/// Marker weight bounds.
const MIN_WEIGHT: f64 = 3.0;
const MAX_WEIGHT: f64 = 20.0;

/// Selects plottable records and derives their marker weight and hover
/// label.
#[must_use]
pub fn select(records: &[CollisionRecord]) -> Vec<MapPoint> {
    let mut points = Vec::new();

    for record in records {
        if points.len() == MAX_POINTS {
            break;
        }
        let (Some(latitude), Some(longitude)) = (record.latitude, record.longitude) else {
            continue;
        };
        if !LAT_RANGE.contains(&latitude) || !LON_RANGE.contains(&longitude) {
            continue;
        }

        let injured = record.injured();
        let killed = record.killed();
        let weight = injured
            .mul_add(2.0, killed.mul_add(10.0, 5.0))
            .clamp(MIN_WEIGHT, MAX_WEIGHT);

        let borough = record
            .borough
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or("Unknown");
        let date = record.crash_datetime().map_or_else(
            || "Unknown date".to_string(),
            |dt| dt.format("%Y-%m-%d").to_string(),
        );

        points.push(MapPoint {
            latitude,
            longitude,
            weight,
            label: format!("{borough}\nDate: {date}\nInjured: {injured}, Killed: {killed}"),
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lat: Option<f64>, lon: Option<f64>) -> CollisionRecord {
        CollisionRecord {
            latitude: lat,
            longitude: lon,
            ..CollisionRecord::default()
        }
    }

    #[test]
    fn drops_missing_and_out_of_bounds_coordinates() {
        let records = vec![
            record(Some(40.7), Some(-73.9)),
            record(None, Some(-73.9)),
            record(Some(40.7), None),
            // Valid numbers, outside the NYC envelope.
            record(Some(41.5), Some(-73.9)),
            record(Some(40.7), Some(-75.0)),
            record(Some(0.0), Some(0.0)),
        ];
        let points = select(&records);
        assert_eq!(points.len(), 1);
        assert!(LAT_RANGE.contains(&points[0].latitude));
        assert!(LON_RANGE.contains(&points[0].longitude));
    }

    #[test]
    fn bounding_box_edges_are_inclusive() {
        let records = vec![
            record(Some(40.5), Some(-74.3)),
            record(Some(40.9), Some(-73.7)),
        ];
        assert_eq!(select(&records).len(), 2);
    }

    #[test]
    fn caps_at_first_5000_in_input_order() {
        let mut records: Vec<CollisionRecord> = (0..5010)
            .map(|_| record(Some(40.7), Some(-73.9)))
            .collect();
        records[0].borough = Some("BRONX".to_string());
        let points = select(&records);
        assert_eq!(points.len(), MAX_POINTS);
        assert!(points[0].label.starts_with("BRONX"));
    }

    #[test]
    fn weight_combines_severity_and_clamps() {
        let mut base = record(Some(40.7), Some(-73.9));
        // No casualties: 5 + 0 + 0 = 5.
        assert!((select(std::slice::from_ref(&base))[0].weight - 5.0).abs() < f64::EPSILON);

        // 2 injured, 1 killed: 5 + 4 + 10 = 19.
        base.number_of_persons_injured = Some(2.0);
        base.number_of_persons_killed = Some(1.0);
        assert!((select(std::slice::from_ref(&base))[0].weight - 19.0).abs() < f64::EPSILON);

        // Mass-casualty record clamps to 20.
        base.number_of_persons_killed = Some(10.0);
        assert!((select(std::slice::from_ref(&base))[0].weight - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn label_defaults_for_missing_borough_and_date() {
        let points = select(&[record(Some(40.7), Some(-73.9))]);
        assert_eq!(points[0].label, "Unknown\nDate: Unknown date\nInjured: 0, Killed: 0");
    }

    #[test]
    fn label_formats_known_fields() {
        let r = CollisionRecord {
            borough: Some("QUEENS".to_string()),
            crash_datetime: Some("2022-03-05T14:30:00".to_string()),
            number_of_persons_injured: Some(2.0),
            latitude: Some(40.7),
            longitude: Some(-73.8),
            ..CollisionRecord::default()
        };
        let points = select(&[r]);
        assert_eq!(points[0].label, "QUEENS\nDate: 2022-03-05\nInjured: 2, Killed: 0");
    }
}
