use std::sync::{Arc, Barrier};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::config::ReviewConfig;
use crate::records::domain::{
    AchievementId, AchievementRecord, Category, Level, NewAchievement,
};
use crate::records::repository::{
    AchievementRepository, InMemoryAchievementRepository, RepositoryError,
};
use crate::records::{
    achievement_router, sample_announcements, sample_records, AchievementService,
    StudentDirectory,
};

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(super) fn review_config() -> ReviewConfig {
    ReviewConfig {
        default_reviewer: "Admin User".to_string(),
        leaderboard_limit: 10,
    }
}

pub(super) fn submission() -> NewAchievement {
    NewAchievement {
        student_name: "Neha Gupta".to_string(),
        department: "Electronics".to_string(),
        event_name: "Circuit Design Sprint".to_string(),
        category: Category::Technical,
        level: Level::District,
        position: "2nd Place".to_string(),
        date: date(2026, 3, 2),
        certificate: Some("neha-circuit.pdf".to_string()),
    }
}

pub(super) fn blank_event_submission() -> NewAchievement {
    let mut submission = submission();
    submission.event_name = "   ".to_string();
    submission
}

pub(super) fn build_service() -> (
    AchievementService<InMemoryAchievementRepository>,
    Arc<InMemoryAchievementRepository>,
) {
    let repository = Arc::new(InMemoryAchievementRepository::default());
    let service = AchievementService::new(repository.clone(), review_config());
    (service, repository)
}

/// Service seeded with the ten demo records and two announcements.
pub(super) fn seeded_service() -> AchievementService<InMemoryAchievementRepository> {
    let directory = Arc::new(StudentDirectory::new());
    let records = sample_records(&directory);
    let repository = Arc::new(
        InMemoryAchievementRepository::with_records(records).expect("sample ids are unique"),
    );
    AchievementService::with_directory(repository, directory, review_config())
        .with_announcements(sample_announcements())
}

pub(super) fn pending_id() -> AchievementId {
    AchievementId("ach-000005".to_string())
}

pub(super) fn approved_id() -> AchievementId {
    AchievementId("ach-000001".to_string())
}

pub(super) fn rejected_id() -> AchievementId {
    AchievementId("ach-000008".to_string())
}

pub(super) struct UnavailableRepository;

impl AchievementRepository for UnavailableRepository {
    fn insert(&self, _record: AchievementRecord) -> Result<AchievementRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn modify<F, E>(&self, _id: &AchievementId, _change: F) -> Result<AchievementRecord, E>
    where
        F: FnOnce(&AchievementRecord) -> Result<AchievementRecord, E>,
        E: From<RepositoryError>,
    {
        Err(RepositoryError::Unavailable("database offline".to_string()).into())
    }

    fn fetch(&self, _id: &AchievementId) -> Result<Option<AchievementRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<AchievementRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// In-memory store that holds each `modify` caller until `parties` callers
/// have arrived, so competing reviews reach the store together.
pub(super) struct GatedRepository {
    inner: InMemoryAchievementRepository,
    gate: Barrier,
}

impl GatedRepository {
    pub(super) fn new(parties: usize) -> Self {
        Self {
            inner: InMemoryAchievementRepository::default(),
            gate: Barrier::new(parties),
        }
    }
}

impl AchievementRepository for GatedRepository {
    fn insert(&self, record: AchievementRecord) -> Result<AchievementRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn modify<F, E>(&self, id: &AchievementId, change: F) -> Result<AchievementRecord, E>
    where
        F: FnOnce(&AchievementRecord) -> Result<AchievementRecord, E>,
        E: From<RepositoryError>,
    {
        self.gate.wait();
        self.inner.modify(id, change)
    }

    fn fetch(&self, id: &AchievementId) -> Result<Option<AchievementRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn all(&self) -> Result<Vec<AchievementRecord>, RepositoryError> {
        self.inner.all()
    }
}

pub(super) fn unavailable_service() -> Arc<AchievementService<UnavailableRepository>> {
    Arc::new(AchievementService::new(
        Arc::new(UnavailableRepository),
        review_config(),
    ))
}

pub(super) fn router_with_service(
    service: AchievementService<InMemoryAchievementRepository>,
) -> axum::Router {
    achievement_router(Arc::new(service))
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
