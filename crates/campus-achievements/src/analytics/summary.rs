use super::distribution::{count_by_category, count_by_level, count_by_position, count_by_status};
use super::grouping::{top_departments, top_students_by_count};
use super::monthly::monthly_activity;
use super::recency::{most_recent, DateField};
use super::views::{AnalyticsSummary, DashboardSummary, StudentPortfolio};
use crate::records::domain::{AchievementRecord, AchievementStatus, StudentId};
use crate::scoring;

const RECENT_LIMIT: usize = 5;
const TOP_LIMIT: usize = 5;

impl DashboardSummary {
    pub fn build(records: &[AchievementRecord]) -> Self {
        let status = count_by_status(records);
        let approved: Vec<AchievementRecord> = records
            .iter()
            .filter(|record| record.is_approved())
            .cloned()
            .collect();
        let awards = approved
            .iter()
            .filter(|record| scoring::score(record).is_award)
            .count();

        Self {
            total: status.total,
            participations: status.approved,
            awards,
            pending: status.pending,
            categories: count_by_category(records, None),
            levels: count_by_level(records, None),
            recent_submissions: most_recent(records, DateField::Submitted, RECENT_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            recent_approvals: most_recent(&approved, DateField::Approved, RECENT_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl AnalyticsSummary {
    pub fn build(records: &[AchievementRecord], year: i32) -> Self {
        let status = count_by_status(records);
        let approved = Some(AchievementStatus::Approved);

        Self {
            year,
            approval_rate: status.approval_rate(),
            status,
            categories: count_by_category(records, approved),
            levels: count_by_level(records, approved),
            positions: count_by_position(records, approved),
            top_departments: top_departments(records, TOP_LIMIT),
            top_students: top_students_by_count(records, TOP_LIMIT),
            monthly: monthly_activity(records, year),
        }
    }
}

impl StudentPortfolio {
    /// `None` when the student has no records at all.
    pub fn build(records: &[AchievementRecord], student_id: &StudentId) -> Option<Self> {
        let owned: Vec<&AchievementRecord> = records
            .iter()
            .filter(|record| &record.student_id == student_id)
            .collect();
        let first = owned.first()?;

        let approved: Vec<AchievementRecord> = owned
            .iter()
            .filter(|record| record.is_approved())
            .map(|record| (*record).clone())
            .collect();

        let (awards, points) = approved.iter().map(scoring::score).fold(
            (0usize, 0.0f64),
            |(awards, points), card| (awards + usize::from(card.is_award), points + card.points),
        );

        let achievements = most_recent(&approved, DateField::EventDate, approved.len())
            .into_iter()
            .cloned()
            .collect();

        Some(Self {
            student_id: student_id.clone(),
            student_name: first.student_name.clone(),
            department: first.department.clone(),
            submissions: owned.len(),
            awards,
            points,
            achievements,
        })
    }
}
