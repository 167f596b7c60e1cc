use crate::records::domain::AchievementRecord;
use chrono::Datelike;
use serde::Serialize;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyActivity {
    pub month: u32,
    pub label: &'static str,
    pub submissions: usize,
    pub approvals: usize,
}

/// Twelve monthly buckets for `year`: submissions by submitted date and
/// approvals by approval date.
pub fn monthly_activity(records: &[AchievementRecord], year: i32) -> Vec<MonthlyActivity> {
    let mut months: Vec<MonthlyActivity> = MONTH_LABELS
        .into_iter()
        .enumerate()
        .map(|(index, label)| MonthlyActivity {
            month: index as u32 + 1,
            label,
            submissions: 0,
            approvals: 0,
        })
        .collect();

    for record in records {
        if record.submitted_date.year() == year {
            months[record.submitted_date.month0() as usize].submissions += 1;
        }
        if let Some(approved_on) = record.approved_date.filter(|date| date.year() == year) {
            months[approved_on.month0() as usize].approvals += 1;
        }
    }

    months
}
