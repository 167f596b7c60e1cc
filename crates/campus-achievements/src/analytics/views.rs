use super::distribution::StatusBreakdown;
use super::grouping::{KeyCount, StudentCount};
use super::monthly::MonthlyActivity;
use crate::records::domain::{AchievementRecord, Category, Level, StudentId};
use crate::scoring::PositionCategory;
use serde::Serialize;
use std::collections::BTreeMap;

/// Headline cards and charts for the landing dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub participations: usize,
    pub awards: usize,
    pub pending: usize,
    pub categories: BTreeMap<Category, usize>,
    pub levels: BTreeMap<Level, usize>,
    pub recent_submissions: Vec<AchievementRecord>,
    pub recent_approvals: Vec<AchievementRecord>,
}

/// Charts for the analytics page. Distributions cover approved records only.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub year: i32,
    pub status: StatusBreakdown,
    pub approval_rate: f64,
    pub categories: BTreeMap<Category, usize>,
    pub levels: BTreeMap<Level, usize>,
    pub positions: BTreeMap<PositionCategory, usize>,
    pub top_departments: Vec<KeyCount<String>>,
    pub top_students: Vec<StudentCount>,
    pub monthly: Vec<MonthlyActivity>,
}

/// A student's approved achievements with their leaderboard totals.
#[derive(Debug, Clone, Serialize)]
pub struct StudentPortfolio {
    pub student_id: StudentId,
    pub student_name: String,
    pub department: String,
    pub submissions: usize,
    pub awards: usize,
    pub points: f64,
    pub achievements: Vec<AchievementRecord>,
}
