use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tracing::{info, warn};

use super::directory::StudentDirectory;
use super::domain::{
    AchievementId, AchievementRecord, AchievementStatus, NewAchievement, ValidationError,
};
use super::filter::RecordFilter;
use super::repository::{AchievementRepository, RepositoryError};
use super::review::{transition_status, ReviewDecision, ReviewError};
use crate::config::ReviewConfig;
use crate::notifications::{Announcement, InboxState, NotificationFeed};

/// Service composing the record store, student directory and review workflow.
pub struct AchievementService<R> {
    repository: Arc<R>,
    directory: Arc<StudentDirectory>,
    config: ReviewConfig,
    sequence: AtomicU64,
    announcements: Vec<Announcement>,
    inbox: Mutex<InboxState>,
}

impl<R> AchievementService<R>
where
    R: AchievementRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ReviewConfig) -> Self {
        Self::with_directory(repository, Arc::new(StudentDirectory::new()), config)
    }

    /// Builds a service over records already resolved through `directory`.
    ///
    /// The id sequence resumes after the highest numeric suffix in the store.
    pub fn with_directory(
        repository: Arc<R>,
        directory: Arc<StudentDirectory>,
        config: ReviewConfig,
    ) -> Self {
        let resume_after = repository
            .all()
            .map(|records| {
                records
                    .iter()
                    .filter_map(|record| numeric_suffix(&record.id))
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0);

        Self {
            repository,
            directory,
            config,
            sequence: AtomicU64::new(resume_after + 1),
            announcements: Vec::new(),
            inbox: Mutex::new(InboxState::default()),
        }
    }

    pub fn with_announcements(mut self, announcements: Vec<Announcement>) -> Self {
        self.announcements = announcements;
        self
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    pub fn directory(&self) -> &StudentDirectory {
        &self.directory
    }

    fn next_id(&self) -> AchievementId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        AchievementId(format!("ach-{id:06}"))
    }

    /// Records a new pending submission.
    pub fn submit(
        &self,
        submission: NewAchievement,
        submitted_on: NaiveDate,
    ) -> Result<AchievementRecord, AchievementServiceError> {
        submission.validate()?;

        let student_id = self.directory.resolve(&submission.student_name);
        let record = AchievementRecord {
            id: self.next_id(),
            event_name: submission.event_name.trim().to_string(),
            category: submission.category,
            level: submission.level,
            position: submission.position.trim().to_string(),
            date: submission.date,
            student_id,
            student_name: submission.student_name.trim().to_string(),
            department: submission.department.trim().to_string(),
            status: AchievementStatus::Pending,
            submitted_date: submitted_on,
            approved_date: None,
            approved_by: None,
            certificate: submission.certificate,
        };

        let stored = self.repository.insert(record)?;
        info!(id = %stored.id, student = %stored.student_id, "achievement submitted for review");
        Ok(stored)
    }

    /// Applies a review decision to a pending record and persists the result.
    pub fn review(
        &self,
        id: &AchievementId,
        decision: &ReviewDecision,
        on: NaiveDate,
    ) -> Result<AchievementRecord, AchievementServiceError> {
        let reviewed = self.repository.modify(id, |record| {
            transition_status(record, decision, on).map_err(AchievementServiceError::from)
        });

        match reviewed {
            Ok(updated) => {
                info!(%id, status = %updated.status, "achievement reviewed");
                Ok(updated)
            }
            Err(err) => {
                warn!(%id, error = %err, "review rejected");
                Err(err)
            }
        }
    }

    /// Status-driven form of [`review`](Self::review); approvals without a
    /// reviewer use the configured default.
    pub fn transition(
        &self,
        id: &AchievementId,
        target: AchievementStatus,
        reviewer: Option<&str>,
        on: NaiveDate,
    ) -> Result<AchievementRecord, AchievementServiceError> {
        let decision =
            ReviewDecision::from_status(target, reviewer, &self.config.default_reviewer)?;
        self.review(id, &decision, on)
    }

    pub fn get(&self, id: &AchievementId) -> Result<AchievementRecord, AchievementServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Every record currently held, in insertion order.
    pub fn snapshot(&self) -> Result<Vec<AchievementRecord>, AchievementServiceError> {
        Ok(self.repository.all()?)
    }

    pub fn list(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<AchievementRecord>, AchievementServiceError> {
        let records = self.snapshot()?;
        Ok(records
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect())
    }

    /// Notification feed derived from the current records and inbox state.
    pub fn notifications(&self) -> Result<NotificationFeed, AchievementServiceError> {
        let records = self.snapshot()?;
        let inbox = self.inbox.lock().expect("inbox mutex poisoned");
        Ok(NotificationFeed::from_records(
            &records,
            &self.announcements,
            &inbox,
        ))
    }

    /// Returns `false` when no visible notification carries `id`.
    pub fn mark_notification_read(&self, id: &str) -> Result<bool, AchievementServiceError> {
        let mut feed = self.notifications()?;
        let marked = feed.mark_read(id);
        if marked {
            self.inbox
                .lock()
                .expect("inbox mutex poisoned")
                .read
                .insert(id.to_string());
        }
        Ok(marked)
    }

    pub fn mark_all_notifications_read(&self) -> Result<usize, AchievementServiceError> {
        let mut feed = self.notifications()?;
        let marked = feed.mark_all_read();
        let mut inbox = self.inbox.lock().expect("inbox mutex poisoned");
        inbox
            .read
            .extend(feed.items().iter().map(|item| item.id.clone()));
        Ok(marked)
    }

    pub fn dismiss_notification(&self, id: &str) -> Result<bool, AchievementServiceError> {
        let mut feed = self.notifications()?;
        let removed = feed.delete(id);
        if removed {
            self.inbox
                .lock()
                .expect("inbox mutex poisoned")
                .dismissed
                .insert(id.to_string());
        }
        Ok(removed)
    }
}

fn numeric_suffix(id: &AchievementId) -> Option<u64> {
    let digits: String = id
        .0
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().ok()
}

/// Error raised by the achievement service.
#[derive(Debug, thiserror::Error)]
pub enum AchievementServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
