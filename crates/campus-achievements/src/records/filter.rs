use super::domain::{AchievementRecord, AchievementStatus, Category, Level};
use serde::Deserialize;

/// Review-table filters. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordFilter {
    #[serde(default)]
    pub status: Option<AchievementStatus>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub level: Option<Level>,
    /// Case-insensitive substring of the student or event name.
    #[serde(default)]
    pub search: Option<String>,
}

impl RecordFilter {
    pub fn matches(&self, record: &AchievementRecord) -> bool {
        let status_ok = self.status.map_or(true, |status| record.status == status);
        let category_ok = self
            .category
            .map_or(true, |category| record.category == category);
        let level_ok = self.level.map_or(true, |level| record.level == level);
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                record.student_name.to_lowercase().contains(&needle)
                    || record.event_name.to_lowercase().contains(&needle)
            }
        };

        status_ok && category_ok && level_ok && search_ok
    }

    pub fn apply<'a>(&self, records: &'a [AchievementRecord]) -> Vec<&'a AchievementRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}
