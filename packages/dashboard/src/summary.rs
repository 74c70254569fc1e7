//! Headline counters.
//!
//! Injured and killed totals use a two-tier policy: sum the crash-level
//! counter fields, and when that sum is zero fall back to counting records
//! whose person-level `person_injury` text matches an outcome keyword.
//! The dataset ships in two variants (crash-level counters vs. person-level
//! outcome strings) and the fallback is a deliberate heuristic for the
//! latter; a set with a genuinely zero sum and no matching keywords yields
//! zero either way.

use std::collections::HashSet;

use crash_dash_collision_models::CollisionRecord;
use crash_dash_dashboard_models::SummaryStats;

const INJURED_KEYWORDS: &[&str] = &["injur"];
const KILLED_KEYWORDS: &[&str] = &["kill", "death"];

/// Computes the stat-card counters for one record set.
#[must_use]
pub fn summarize(records: &[CollisionRecord]) -> SummaryStats {
    let unique: HashSet<&str> = records
        .iter()
        .filter_map(|r| r.collision_id.as_deref())
        .filter(|id| !id.is_empty())
        .collect();

    SummaryStats {
        total: records.len() as u64,
        injured: tiered_count(records, |r| r.number_of_persons_injured, INJURED_KEYWORDS),
        killed: tiered_count(records, |r| r.number_of_persons_killed, KILLED_KEYWORDS),
        unique_collisions: unique.len() as u64,
    }
}

/// Sums the crash-level counter; falls back to a case-insensitive
/// substring count over `person_injury` when the sum is zero.
fn tiered_count<F>(records: &[CollisionRecord], counter: F, keywords: &[&str]) -> f64
where
    F: Fn(&CollisionRecord) -> Option<f64>,
{
    let sum: f64 = records.iter().filter_map(&counter).sum();
    if sum.abs() > f64::EPSILON {
        return sum;
    }

    let matches = records
        .iter()
        .filter_map(|r| r.person_injury.as_deref())
        .map(str::to_lowercase)
        .filter(|status| keywords.iter().any(|kw| status.contains(kw)))
        .count();
    matches as f64
}
