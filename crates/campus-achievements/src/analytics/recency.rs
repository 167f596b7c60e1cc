use crate::records::domain::AchievementRecord;
use chrono::NaiveDate;
use serde::Deserialize;

/// Date column used to order records by recency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    EventDate,
    Submitted,
    Approved,
}

impl DateField {
    pub fn value(self, record: &AchievementRecord) -> Option<NaiveDate> {
        match self {
            Self::EventDate => Some(record.date),
            Self::Submitted => Some(record.submitted_date),
            Self::Approved => record.approved_date,
        }
    }
}

/// Newest `n` records by `field`. Records without the field sort last.
pub fn most_recent(
    records: &[AchievementRecord],
    field: DateField,
    n: usize,
) -> Vec<&AchievementRecord> {
    let mut ordered: Vec<&AchievementRecord> = records.iter().collect();
    // `None` orders below any date, so a descending sort leaves it at the end.
    ordered.sort_by(|a, b| field.value(b).cmp(&field.value(a)));
    ordered.truncate(n);
    ordered
}
