use crate::records::domain::{AchievementRecord, AchievementStatus, Category, Level};
use crate::scoring::{classify_position, PositionCategory};
use serde::Serialize;
use std::collections::BTreeMap;

fn zero_filled<K, F>(
    keys: &[K],
    unknown: Option<K>,
    records: &[AchievementRecord],
    status: Option<AchievementStatus>,
    key_of: F,
) -> BTreeMap<K, usize>
where
    K: Ord + Copy,
    F: Fn(&AchievementRecord) -> K,
{
    let mut counts: BTreeMap<K, usize> = keys.iter().map(|key| (*key, 0)).collect();

    for record in records
        .iter()
        .filter(|record| status.map_or(true, |wanted| record.status == wanted))
    {
        let key = key_of(record);
        match counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                // Only the reserved bucket may appear beyond the declared keys.
                let bucket = unknown.unwrap_or(key);
                *counts.entry(bucket).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Per-category counts. The four named categories are always present in
/// declaration order; `Unknown` appears only when something landed there.
pub fn count_by_category(
    records: &[AchievementRecord],
    status: Option<AchievementStatus>,
) -> BTreeMap<Category, usize> {
    zero_filled(
        &Category::ordered(),
        Some(Category::Unknown),
        records,
        status,
        |record| record.category,
    )
}

/// Per-level counts in severity order, zero-filled.
pub fn count_by_level(
    records: &[AchievementRecord],
    status: Option<AchievementStatus>,
) -> BTreeMap<Level, usize> {
    zero_filled(
        &Level::ordered(),
        Some(Level::Unknown),
        records,
        status,
        |record| record.level,
    )
}

/// Positions chart buckets, all four always present.
pub fn count_by_position(
    records: &[AchievementRecord],
    status: Option<AchievementStatus>,
) -> BTreeMap<PositionCategory, usize> {
    zero_filled(
        &PositionCategory::ordered(),
        None,
        records,
        status,
        |record| classify_position(&record.position),
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl StatusBreakdown {
    /// Approved share of all records as a percentage; zero for an empty set.
    pub fn approval_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.approved as f64 / self.total as f64 * 100.0
        }
    }
}

pub fn count_by_status(records: &[AchievementRecord]) -> StatusBreakdown {
    records
        .iter()
        .fold(StatusBreakdown::default(), |mut breakdown, record| {
            breakdown.total += 1;
            match record.status {
                AchievementStatus::Approved => breakdown.approved += 1,
                AchievementStatus::Pending => breakdown.pending += 1,
                AchievementStatus::Rejected => breakdown.rejected += 1,
            }
            breakdown
        })
}
