use super::directory::StudentDirectory;
use super::domain::{
    AchievementId, AchievementRecord, AchievementStatus, Category, Level,
};
use crate::notifications::Announcement;
use chrono::NaiveDate;

struct SampleRow {
    event_name: &'static str,
    category: Category,
    level: Level,
    position: &'static str,
    date: &'static str,
    student_name: &'static str,
    department: &'static str,
    status: AchievementStatus,
    submitted: &'static str,
    approval: Option<(&'static str, &'static str)>,
}

const SAMPLE_ROWS: [SampleRow; 10] = [
    SampleRow {
        event_name: "Cricket Tournament",
        category: Category::Sports,
        level: Level::State,
        position: "Winner",
        date: "2025-11-15",
        student_name: "Rahul Sharma",
        department: "Computer Science",
        status: AchievementStatus::Approved,
        submitted: "2025-11-16",
        approval: Some(("2025-11-18", "Dr. Mehta")),
    },
    SampleRow {
        event_name: "Coding Hackathon",
        category: Category::Technical,
        level: Level::National,
        position: "Runner-up",
        date: "2025-10-22",
        student_name: "Rahul Sharma",
        department: "Computer Science",
        status: AchievementStatus::Approved,
        submitted: "2025-10-23",
        approval: Some(("2025-10-25", "Prof. Singh")),
    },
    SampleRow {
        event_name: "Cultural Fest Dance",
        category: Category::Cultural,
        level: Level::District,
        position: "1st Place",
        date: "2025-09-10",
        student_name: "Rahul Sharma",
        department: "Computer Science",
        status: AchievementStatus::Approved,
        submitted: "2025-09-11",
        approval: Some(("2025-09-13", "Dr. Mehta")),
    },
    SampleRow {
        event_name: "Basketball Championship",
        category: Category::Sports,
        level: Level::College,
        position: "Winner",
        date: "2025-08-05",
        student_name: "Priya Patel",
        department: "Electronics",
        status: AchievementStatus::Approved,
        submitted: "2025-08-06",
        approval: Some(("2025-08-08", "Prof. Singh")),
    },
    SampleRow {
        event_name: "Web Development Contest",
        category: Category::Technical,
        level: Level::State,
        position: "2nd Place",
        date: "2025-07-18",
        student_name: "Priya Patel",
        department: "Electronics",
        status: AchievementStatus::Pending,
        submitted: "2025-07-19",
        approval: None,
    },
    SampleRow {
        event_name: "Singing Competition",
        category: Category::Cultural,
        level: Level::National,
        position: "Finalist",
        date: "2025-12-01",
        student_name: "Ankit Verma",
        department: "Mechanical",
        status: AchievementStatus::Pending,
        submitted: "2025-12-02",
        approval: None,
    },
    SampleRow {
        event_name: "Robotics Challenge",
        category: Category::Technical,
        level: Level::National,
        position: "Winner",
        date: "2026-01-20",
        student_name: "Rahul Sharma",
        department: "Computer Science",
        status: AchievementStatus::Approved,
        submitted: "2026-01-21",
        approval: Some(("2026-01-23", "Dr. Mehta")),
    },
    SampleRow {
        event_name: "Debate Competition",
        category: Category::Cultural,
        level: Level::State,
        position: "Runner-up",
        date: "2026-02-10",
        student_name: "Priya Patel",
        department: "Electronics",
        status: AchievementStatus::Rejected,
        submitted: "2026-02-11",
        approval: None,
    },
    SampleRow {
        event_name: "Science Olympiad",
        category: Category::Academic,
        level: Level::International,
        position: "Gold Medal",
        date: "2026-01-05",
        student_name: "Ankit Verma",
        department: "Mechanical",
        status: AchievementStatus::Approved,
        submitted: "2026-01-06",
        approval: Some(("2026-01-08", "Prof. Singh")),
    },
    SampleRow {
        event_name: "Chess Tournament",
        category: Category::Sports,
        level: Level::District,
        position: "Winner",
        date: "2026-02-15",
        student_name: "Rahul Sharma",
        department: "Computer Science",
        status: AchievementStatus::Pending,
        submitted: "2026-02-16",
        approval: None,
    },
];

fn sample_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_default()
}

/// The demo dataset: ten records across three students, resolved through `directory`.
pub fn sample_records(directory: &StudentDirectory) -> Vec<AchievementRecord> {
    SAMPLE_ROWS
        .iter()
        .enumerate()
        .map(|(index, row)| AchievementRecord {
            id: AchievementId(format!("ach-{:06}", index + 1)),
            event_name: row.event_name.to_string(),
            category: row.category,
            level: row.level,
            position: row.position.to_string(),
            date: sample_date(row.date),
            student_id: directory.resolve(row.student_name),
            student_name: row.student_name.to_string(),
            department: row.department.to_string(),
            status: row.status,
            submitted_date: sample_date(row.submitted),
            approved_date: row.approval.map(|(date, _)| sample_date(date)),
            approved_by: row.approval.map(|(_, reviewer)| reviewer.to_string()),
            certificate: None,
        })
        .collect()
}

/// Standing announcements shown alongside the derived notification feed.
pub fn sample_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "info-1".to_string(),
            title: "System Update".to_string(),
            message: "New features have been added to the achievement management system"
                .to_string(),
            timestamp: sample_date("2026-01-15"),
            read: false,
        },
        Announcement {
            id: "info-2".to_string(),
            title: "Reminder".to_string(),
            message: "Verify your achievements before the end of the semester".to_string(),
            timestamp: sample_date("2026-01-10"),
            read: true,
        },
    ]
}
