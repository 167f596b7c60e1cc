//! Derived views over a record collection: rankings, distributions, top-N
//! lists and the composed dashboard, analytics and portfolio summaries.
//!
//! Every function here is pure and recomputes from the slice it is given.

mod distribution;
mod grouping;
mod monthly;
mod ranking;
mod recency;
mod summary;
pub mod views;

pub use distribution::{
    count_by_category, count_by_level, count_by_position, count_by_status, StatusBreakdown,
};
pub use grouping::{top_departments, top_n, top_students_by_count, KeyCount, StudentCount};
pub use monthly::{monthly_activity, MonthlyActivity};
pub use ranking::{leaderboard, rank_students, Leaderboard, LeaderboardEntry, StudentStat};
pub use recency::{most_recent, DateField};
pub use views::{AnalyticsSummary, DashboardSummary, StudentPortfolio};
