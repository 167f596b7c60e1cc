use campus_achievements::config::ReviewConfig;
use campus_achievements::error::AppError;
use campus_achievements::records::{
    sample_announcements, sample_records, AchievementService, InMemoryAchievementRepository,
    RecordImporter, StudentDirectory,
};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

pub(crate) type SessionService = AchievementService<InMemoryAchievementRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Seeds the session's record store from a CSV export, or from the sample
/// dataset and its announcements when no export is given.
pub(crate) fn build_service(
    csv_path: Option<&Path>,
    review: ReviewConfig,
) -> Result<SessionService, AppError> {
    let directory = Arc::new(StudentDirectory::new());

    let (records, announcements) = match csv_path {
        Some(path) => (RecordImporter::from_path(path, &directory)?, Vec::new()),
        None => (sample_records(&directory), sample_announcements()),
    };

    info!(
        records = records.len(),
        students = directory.len(),
        source = if csv_path.is_some() { "csv" } else { "sample" },
        "record store seeded"
    );

    let repository = Arc::new(InMemoryAchievementRepository::with_records(records)?);
    Ok(AchievementService::with_directory(repository, directory, review)
        .with_announcements(announcements))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
