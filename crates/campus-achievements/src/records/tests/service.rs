use super::common::*;
use crate::records::domain::{AchievementId, AchievementStatus, ValidationError};
use crate::records::repository::{AchievementRepository, RepositoryError};
use crate::records::review::{ReviewDecision, ReviewError};
use crate::records::{AchievementService, AchievementServiceError, RecordFilter};
use std::sync::Arc;

#[test]
fn submit_stores_a_trimmed_pending_record() {
    let (service, repository) = build_service();
    let mut submission = submission();
    submission.student_name = "  Neha Gupta ".to_string();

    let record = service
        .submit(submission, date(2026, 3, 3))
        .expect("submission accepted");

    assert_eq!(record.id, AchievementId("ach-000001".to_string()));
    assert_eq!(record.status, AchievementStatus::Pending);
    assert_eq!(record.student_name, "Neha Gupta");
    assert_eq!(record.submitted_date, date(2026, 3, 3));
    assert!(record.approved_date.is_none());
    assert!(record.approved_by.is_none());
    let stored = repository
        .fetch(&record.id)
        .expect("fetch succeeds")
        .expect("record stored");
    assert_eq!(stored, record);
}

#[test]
fn submit_rejects_blank_fields() {
    let (service, repository) = build_service();

    match service.submit(blank_event_submission(), date(2026, 3, 3)) {
        Err(AchievementServiceError::Validation(ValidationError::Blank { field })) => {
            assert_eq!(field, "eventName")
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(repository.all().expect("all succeeds").is_empty());
}

#[test]
fn seeded_service_continues_id_sequence_and_reuses_student_ids() {
    let service = seeded_service();
    let mut submission = submission();
    submission.student_name = "rahul   sharma".to_string();

    let record = service
        .submit(submission, date(2026, 3, 3))
        .expect("submission accepted");

    assert_eq!(record.id.0, "ach-000011");
    assert_eq!(record.student_id.0, "stu-0001");
}

#[test]
fn approve_stamps_reviewer_and_date() {
    let service = seeded_service();

    let updated = service
        .review(
            &pending_id(),
            &ReviewDecision::Approve {
                reviewer: "Dr. Mehta".to_string(),
            },
            date(2026, 3, 4),
        )
        .expect("pending record approves");

    assert_eq!(updated.status, AchievementStatus::Approved);
    assert_eq!(updated.approved_date, Some(date(2026, 3, 4)));
    assert_eq!(updated.approved_by.as_deref(), Some("Dr. Mehta"));
    assert_eq!(service.get(&pending_id()).expect("record exists"), updated);
}

#[test]
fn transition_without_reviewer_uses_configured_default() {
    let service = seeded_service();

    let updated = service
        .transition(
            &pending_id(),
            AchievementStatus::Approved,
            Some("  "),
            date(2026, 3, 4),
        )
        .expect("pending record approves");

    assert_eq!(updated.approved_by.as_deref(), Some("Admin User"));
}

#[test]
fn reject_leaves_approval_fields_absent() {
    let service = seeded_service();

    let updated = service
        .transition(&pending_id(), AchievementStatus::Rejected, None, date(2026, 3, 4))
        .expect("pending record rejects");

    assert_eq!(updated.status, AchievementStatus::Rejected);
    assert!(updated.approved_date.is_none());
    assert!(updated.approved_by.is_none());
}

#[test]
fn finalized_records_cannot_be_reviewed_again() {
    let service = seeded_service();
    let before = service.get(&approved_id()).expect("record exists");

    match service.transition(&approved_id(), AchievementStatus::Rejected, None, date(2026, 3, 4)) {
        Err(AchievementServiceError::Review(ReviewError::AlreadyFinalized { id, status })) => {
            assert_eq!(id, approved_id());
            assert_eq!(status, AchievementStatus::Approved);
        }
        other => panic!("expected already finalized, got {other:?}"),
    }
    assert_eq!(service.get(&approved_id()).expect("record exists"), before);

    assert!(matches!(
        service.transition(&rejected_id(), AchievementStatus::Approved, None, date(2026, 3, 4)),
        Err(AchievementServiceError::Review(ReviewError::AlreadyFinalized { .. }))
    ));
}

#[test]
fn competing_reviews_finalize_a_record_once() {
    let service = AchievementService::new(Arc::new(GatedRepository::new(2)), review_config());
    let id = service
        .submit(submission(), date(2026, 3, 3))
        .expect("submission stored")
        .id;

    let outcomes = std::thread::scope(|scope| {
        let approve = scope.spawn(|| {
            service.transition(&id, AchievementStatus::Approved, Some("Dr. Mehta"), date(2026, 3, 4))
        });
        let reject = scope
            .spawn(|| service.transition(&id, AchievementStatus::Rejected, None, date(2026, 3, 4)));
        [
            approve.join().expect("approve thread"),
            reject.join().expect("reject thread"),
        ]
    });

    let accepted: Vec<_> = outcomes.iter().filter_map(|outcome| outcome.as_ref().ok()).collect();
    assert_eq!(accepted.len(), 1);
    assert!(outcomes.iter().any(|outcome| matches!(
        outcome,
        Err(AchievementServiceError::Review(ReviewError::AlreadyFinalized { .. }))
    )));

    let stored = service.get(&id).expect("record exists");
    assert_eq!(&stored, accepted[0]);
}

#[test]
fn pending_is_not_a_review_target() {
    let service = seeded_service();

    assert!(matches!(
        service.transition(&pending_id(), AchievementStatus::Pending, None, date(2026, 3, 4)),
        Err(AchievementServiceError::Review(ReviewError::InvalidTarget(
            AchievementStatus::Pending
        )))
    ));
}

#[test]
fn review_of_missing_record_reports_not_found() {
    let service = seeded_service();

    assert!(matches!(
        service.review(
            &AchievementId("ach-999999".to_string()),
            &ReviewDecision::Reject,
            date(2026, 3, 4)
        ),
        Err(AchievementServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn repository_outage_propagates() {
    let service = unavailable_service();

    assert!(matches!(
        service.submit(submission(), date(2026, 3, 3)),
        Err(AchievementServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
    assert!(service.snapshot().is_err());
}

#[test]
fn list_applies_filters() {
    let service = seeded_service();

    let pending = service
        .list(&RecordFilter {
            status: Some(AchievementStatus::Pending),
            ..RecordFilter::default()
        })
        .expect("list succeeds");
    assert_eq!(pending.len(), 3);

    let searched = service
        .list(&RecordFilter {
            search: Some("PRIYA".to_string()),
            ..RecordFilter::default()
        })
        .expect("list succeeds");
    assert_eq!(searched.len(), 3);
    assert!(searched.iter().all(|record| record.student_name == "Priya Patel"));
}

#[test]
fn notification_state_survives_rederivation() {
    let service = seeded_service();

    let feed = service.notifications().expect("feed builds");
    assert_eq!(feed.len(), 19);
    assert_eq!(feed.unread_count(), 18);

    assert!(service
        .mark_notification_read("approval-ach-000001")
        .expect("mark succeeds"));
    assert!(!service
        .mark_notification_read("approval-ach-000005")
        .expect("mark succeeds"));
    assert!(service
        .dismiss_notification("info-1")
        .expect("dismiss succeeds"));

    let feed = service.notifications().expect("feed builds");
    assert_eq!(feed.len(), 18);
    assert_eq!(feed.unread_count(), 16);

    service
        .transition(&pending_id(), AchievementStatus::Approved, None, date(2026, 3, 4))
        .expect("pending record approves");
    let feed = service.notifications().expect("feed builds");
    assert_eq!(feed.items()[0].id, "approval-ach-000005");
    assert!(!feed.items()[0].read);

    assert_eq!(
        service
            .mark_all_notifications_read()
            .expect("mark all succeeds"),
        17
    );
    assert_eq!(service.notifications().expect("feed builds").unread_count(), 0);
    assert_eq!(
        service.get(&approved_id()).expect("record exists").status,
        AchievementStatus::Approved
    );
}

#[test]
fn services_can_share_a_repository() {
    let (service, repository) = build_service();
    let record = service
        .submit(submission(), date(2026, 3, 3))
        .expect("submission accepted");

    let second = crate::records::AchievementService::new(Arc::clone(&repository), review_config());
    assert_eq!(second.get(&record.id).expect("record visible"), record);
}
