//! Categorical ranking.
//!
//! Counts occurrences of a label field (or a pair of label fields, each
//! contributing independently to the same label space) across the record
//! set, then returns the top-N labels by count.

use std::collections::HashMap;

use crash_dash_collision_models::CollisionRecord;
use crash_dash_dashboard_models::LabelCount;

/// Placeholder labels dropped from every categorical ranking.
pub const EXCLUDED_LABELS: &[&str] = &["Unknown", "Unspecified"];

/// Options for one categorical aggregation pass.
#[derive(Debug, Clone, Copy)]
pub struct CategoricalOptions<'a> {
    /// Maximum entries in the output, applied after sorting.
    pub top_n: usize,
    /// Labels excluded before counting (exact match).
    pub excluded: &'a [&'a str],
}

struct Tally {
    count: u64,
    first_seen: usize,
}

/// Counts labels yielded by `selector` across `records` and returns them
/// sorted by count descending, truncated to `top_n`.
///
/// Ties break by first-encounter order in the input, so output is stable
/// with respect to input traversal order. Absent and empty labels are
/// dropped, as are labels in the exclusion set.
#[must_use]
pub fn aggregate<'r, F>(
    records: &'r [CollisionRecord],
    options: &CategoricalOptions<'_>,
    selector: F,
) -> Vec<LabelCount>
where
    F: Fn(&'r CollisionRecord) -> [Option<&'r str>; 2],
{
    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    let mut next_index = 0;

    for record in records {
        for label in selector(record).into_iter().flatten() {
            if label.is_empty() || options.excluded.contains(&label) {
                continue;
            }
            tallies
                .entry(label)
                .and_modify(|tally| tally.count += 1)
                .or_insert_with(|| {
                    let tally = Tally {
                        count: 1,
                        first_seen: next_index,
                    };
                    next_index += 1;
                    tally
                });
        }
    }

    let mut entries: Vec<(&str, Tally)> = tallies.into_iter().collect();
    entries.sort_by(|(_, a), (_, b)| {
        b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen))
    });
    entries.truncate(options.top_n);

    entries
        .into_iter()
        .map(|(label, tally)| LabelCount::new(label, tally.count))
        .collect()
}
