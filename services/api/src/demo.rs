use crate::infra::{build_service, SessionService};
use campus_achievements::analytics::{leaderboard, AnalyticsSummary, DashboardSummary, Leaderboard};
use campus_achievements::config::AppConfig;
use campus_achievements::error::AppError;
use campus_achievements::notifications::NotificationFilter;
use campus_achievements::records::{
    AchievementRecord, AchievementStatus, Category, Level, NewAchievement, RecordFilter,
};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct LeaderboardArgs {
    /// Number of students to list (defaults to APP_LEADERBOARD_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Load records from a CSV export instead of the sample dataset
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Load records from a CSV export instead of the sample dataset
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyticsArgs {
    /// Year for the monthly activity chart (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Load records from a CSV export instead of the sample dataset
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Load records from a CSV export instead of the sample dataset
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Date stamped on submissions and reviews (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn load(csv: Option<PathBuf>) -> Result<(AppConfig, SessionService), AppError> {
    let mut config = AppConfig::load()?;
    if csv.is_some() {
        config.records.csv_path = csv;
    }
    let service = build_service(config.records.csv_path.as_deref(), config.review.clone())?;
    Ok((config, service))
}

pub(crate) fn run_leaderboard(args: LeaderboardArgs) -> Result<(), AppError> {
    let (config, service) = load(args.csv)?;
    let limit = args.limit.unwrap_or(config.review.leaderboard_limit);
    let records = service.snapshot()?;

    render_leaderboard(&leaderboard(&records, limit));
    Ok(())
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let (_, service) = load(args.csv)?;
    let records = service.snapshot()?;

    render_dashboard(&DashboardSummary::build(&records));
    Ok(())
}

pub(crate) fn run_analytics(args: AnalyticsArgs) -> Result<(), AppError> {
    let (_, service) = load(args.csv)?;
    let year = args.year.unwrap_or_else(|| Local::now().year());
    let records = service.snapshot()?;

    render_analytics(&AnalyticsSummary::build(&records, year));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let (config, service) = load(args.csv)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!("Student achievement tracker demo ({today})");
    let records = service.snapshot()?;
    render_dashboard(&DashboardSummary::build(&records));

    println!("\nSubmitting a new achievement");
    let submission = NewAchievement {
        student_name: "Priya Patel".to_string(),
        department: "Information Technology".to_string(),
        event_name: "Inter-University Hackathon".to_string(),
        category: Category::Technical,
        level: Level::National,
        position: "1st Place".to_string(),
        date: today,
        certificate: None,
    };
    let submitted = match service.submit(submission, today) {
        Ok(record) => {
            println!("  {}", describe(&record));
            Some(record)
        }
        Err(err) => {
            println!("  Submission rejected: {}", err);
            None
        }
    };

    println!("\nReview queue");
    let queue = service
        .list(&RecordFilter {
            status: Some(AchievementStatus::Pending),
            ..RecordFilter::default()
        })?;
    for (index, record) in queue.iter().enumerate() {
        // Alternate approve and reject across the queue.
        let target = if index % 2 == 0 {
            AchievementStatus::Approved
        } else {
            AchievementStatus::Rejected
        };
        match service.transition(&record.id, target, None, today) {
            Ok(updated) => println!("  {} -> {}", record.id, updated.status),
            Err(err) => println!("  {} not reviewed: {}", record.id, err),
        }
    }

    if let Some(record) = submitted {
        match service.transition(&record.id, AchievementStatus::Rejected, None, today) {
            Ok(_) => println!("  {} unexpectedly reviewed twice", record.id),
            Err(err) => println!("  Second review of {} refused: {}", record.id, err),
        }
    }

    let records = service.snapshot()?;
    println!();
    render_leaderboard(&leaderboard(&records, config.review.leaderboard_limit));

    let feed = service.notifications()?;
    println!(
        "\nNotifications ({} total, {} unread)",
        feed.len(),
        feed.unread_count()
    );
    for item in feed.filter(NotificationFilter::Unread).into_iter().take(5) {
        println!("  [{}] {}: {}", item.timestamp, item.title, item.message);
    }

    Ok(())
}

fn describe(record: &AchievementRecord) -> String {
    format!(
        "{} {} ({}) - {} {} {} [{}]",
        record.id,
        record.student_name,
        record.department,
        record.event_name,
        record.level.label(),
        record.position,
        record.status
    )
}

pub(crate) fn render_leaderboard(board: &Leaderboard) {
    println!("Leaderboard ({} ranked students)", board.ranked_students);
    if board.ranked_students == 0 {
        println!("  No approved achievements yet");
        return;
    }
    for entry in board.entries() {
        println!(
            "  #{:<2} {:<20} {:<24} {:>6.1} pts  {} achievements, {} awards",
            entry.rank,
            entry.stat.student_name,
            entry.stat.department,
            entry.display_points,
            entry.stat.achievements,
            entry.stat.awards
        );
    }
}

pub(crate) fn render_dashboard(summary: &DashboardSummary) {
    println!("Dashboard");
    println!(
        "  Total: {}  Participations: {}  Awards: {}  Pending: {}",
        summary.total, summary.participations, summary.awards, summary.pending
    );
    println!("  By category:");
    for (category, count) in &summary.categories {
        println!("    {:<12} {}", category.label(), count);
    }
    println!("  By level:");
    for (level, count) in &summary.levels {
        println!("    {:<14} {}", level.label(), count);
    }
    println!("  Recent submissions:");
    for record in &summary.recent_submissions {
        println!("    {} {}", record.submitted_date, describe(record));
    }
    println!("  Recent approvals:");
    for record in &summary.recent_approvals {
        println!(
            "    {} {} by {}",
            record
                .approved_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            record.event_name,
            record.approved_by.as_deref().unwrap_or("-")
        );
    }
}

pub(crate) fn render_analytics(summary: &AnalyticsSummary) {
    println!("Analytics for {}", summary.year);
    println!(
        "  Records: {}  Approved: {}  Pending: {}  Rejected: {}  Approval rate: {:.1}%",
        summary.status.total,
        summary.status.approved,
        summary.status.pending,
        summary.status.rejected,
        summary.approval_rate
    );
    println!("  Approved by category:");
    for (category, count) in &summary.categories {
        println!("    {:<12} {}", category.label(), count);
    }
    println!("  Approved by level:");
    for (level, count) in &summary.levels {
        println!("    {:<14} {}", level.label(), count);
    }
    println!("  Approved by position:");
    for (position, count) in &summary.positions {
        println!("    {:<12} {}", position.label(), count);
    }
    println!("  Top departments:");
    for group in &summary.top_departments {
        println!("    {:<24} {}", group.key, group.count);
    }
    println!("  Top students:");
    for student in &summary.top_students {
        println!("    {:<20} {}", student.student_name, student.count);
    }
    println!("  Monthly activity (submissions / approvals):");
    for month in &summary.monthly {
        println!(
            "    {} {:>3} / {:<3}",
            month.label, month.submissions, month.approvals
        );
    }
}
