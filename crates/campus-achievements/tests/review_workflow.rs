//! End-to-end review scenarios through the public service facade and HTTP router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use campus_achievements::analytics::{rank_students, DashboardSummary};
use campus_achievements::config::ReviewConfig;
use campus_achievements::notifications::NotificationFilter;
use campus_achievements::records::{
    achievement_router, AchievementId, AchievementService, AchievementStatus, Category,
    InMemoryAchievementRepository, Level, NewAchievement, RecordImporter, StudentDirectory,
};

fn imported_service() -> AchievementService<InMemoryAchievementRepository> {
    let data = include_bytes!("../achievements_export.csv");
    let directory = Arc::new(StudentDirectory::new());
    let records = RecordImporter::from_reader(&data[..], &directory).expect("export imports");
    let repository = Arc::new(
        InMemoryAchievementRepository::with_records(records).expect("export ids are unique"),
    );
    AchievementService::with_directory(repository, directory, ReviewConfig::default())
}

fn on(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).expect("valid date")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json payload")
}

#[test]
fn submission_only_counts_after_approval() {
    let service = imported_service();
    let submission = NewAchievement {
        student_name: "Kabir Shah".to_string(),
        department: "Computer Science".to_string(),
        event_name: "Hack the Campus".to_string(),
        category: Category::Technical,
        level: Level::National,
        position: "Winner".to_string(),
        date: on(1),
        certificate: None,
    };

    let record = service.submit(submission, on(2)).expect("submission accepted");
    assert_eq!(record.id.0, "ach-000109");

    let kabir_points = |service: &AchievementService<InMemoryAchievementRepository>| {
        rank_students(&service.snapshot().expect("snapshot"))
            .into_iter()
            .find(|stat| stat.student_id == record.student_id)
            .map(|stat| stat.points)
    };
    assert_eq!(kabir_points(&service), Some(10.0));

    service
        .transition(&record.id, AchievementStatus::Approved, None, on(3))
        .expect("approval succeeds");
    assert_eq!(kabir_points(&service), Some(40.0));

    let dashboard = DashboardSummary::build(&service.snapshot().expect("snapshot"));
    assert_eq!(dashboard.participations, 6);
    assert_eq!(dashboard.recent_approvals[0].id, record.id);
    assert_eq!(
        dashboard.recent_approvals[0].approved_by.as_deref(),
        Some(ReviewConfig::DEFAULT_REVIEWER)
    );

    let feed = service.notifications().expect("feed builds");
    let approvals = feed.filter(NotificationFilter::Unread);
    assert_eq!(approvals[0].id, format!("approval-{}", record.id));
}

#[test]
fn rejected_submission_stays_off_the_leaderboard() {
    let service = imported_service();
    let id = AchievementId("ach-000106".to_string());

    let rejected = service
        .transition(&id, AchievementStatus::Rejected, None, on(3))
        .expect("rejection succeeds");

    assert_eq!(rejected.status, AchievementStatus::Rejected);
    let arjun = rank_students(&service.snapshot().expect("snapshot"))
        .into_iter()
        .find(|stat| stat.student_id == rejected.student_id)
        .expect("arjun ranked");
    assert_eq!(arjun.achievements, 2);
    assert!(service
        .transition(&id, AchievementStatus::Approved, None, on(4))
        .is_err());
}

#[tokio::test]
async fn http_round_trip_submit_approve_and_rank() {
    let router = achievement_router(Arc::new(imported_service()));

    let payload = json!({
        "studentName": "Arjun Nair",
        "department": "Electrical",
        "eventName": "Power Systems Quiz",
        "category": "Academic",
        "level": "International",
        "position": "Gold",
        "date": "2026-03-01"
    });
    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/achievements")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    let id = created["id"].as_str().expect("id assigned").to_string();
    assert_eq!(created["studentId"], json!("stu-0002"));

    let response = router
        .clone()
        .oneshot(
            Request::post(format!("/api/v1/achievements/{id}/approve"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"reviewer":"Dr. Mehta"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::get("/api/v1/leaderboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let board = json_body(response).await;
    assert_eq!(board["podium"][0]["student_name"], json!("Arjun Nair"));
    assert_eq!(board["podium"][0]["points"], json!(66.0));
    assert_eq!(board["podium"][0]["awards"], json!(1));
}

#[tokio::test]
async fn unknown_enum_spellings_are_accepted_on_submit() {
    let router = achievement_router(Arc::new(imported_service()));

    let payload = json!({
        "studentName": "Kabir Shah",
        "department": "Computer Science",
        "eventName": "Speedcubing",
        "category": "Hobby",
        "level": "Regional",
        "position": "Participant",
        "date": "2026-03-01"
    });
    let response = router
        .oneshot(
            Request::post("/api/v1/achievements")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["category"], json!("Unknown"));
    assert_eq!(created["level"], json!("Unknown"));
}
