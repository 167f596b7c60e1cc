//! Notification feed derived from the record set.
//!
//! Every derived entry starts unread; read and dismissed ids are supplied by
//! the caller through [`InboxState`] so the feed is reproducible.

use crate::records::domain::{AchievementId, AchievementRecord, AchievementStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Approval,
    Rejection,
    Submission,
    Info,
}

impl NotificationKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "approval" => Some(Self::Approval),
            "rejection" => Some(Self::Rejection),
            "submission" => Some(Self::Submission),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: NaiveDate,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement_id: Option<AchievementId>,
}

/// Operator-authored notice that is not tied to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: NaiveDate,
    pub read: bool,
}

/// Read and dismissed notification ids kept across derivations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboxState {
    pub read: BTreeSet<String>,
    pub dismissed: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationFilter {
    All,
    Unread,
    Kind(NotificationKind),
}

impl NotificationFilter {
    /// Accepts `all`, `unread` or a notification kind.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" | "all" => Some(Self::All),
            "unread" => Some(Self::Unread),
            other => NotificationKind::parse(other).map(Self::Kind),
        }
    }

    fn matches(self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.read,
            Self::Kind(kind) => notification.kind == kind,
        }
    }
}

/// Builds the newest-first feed for `records` plus standing announcements.
pub fn derive_notifications(
    records: &[AchievementRecord],
    announcements: &[Announcement],
) -> Vec<Notification> {
    let mut notifications = Vec::with_capacity(records.len() * 2 + announcements.len());

    for record in records {
        notifications.push(Notification {
            id: format!("submission-{}", record.id),
            kind: NotificationKind::Submission,
            title: "New Achievement Submitted".to_string(),
            message: format!(
                "{} submitted \"{}\" for {}",
                record.student_name,
                record.event_name,
                record.category.label()
            ),
            timestamp: record.submitted_date,
            read: false,
            achievement_id: Some(record.id.clone()),
        });

        match (record.status, record.approved_date) {
            (AchievementStatus::Approved, Some(approved_on)) => {
                notifications.push(Notification {
                    id: format!("approval-{}", record.id),
                    kind: NotificationKind::Approval,
                    title: "Achievement Approved".to_string(),
                    message: format!(
                        "\"{}\" by {} has been approved by {}",
                        record.event_name,
                        record.student_name,
                        record.approved_by.as_deref().unwrap_or("a reviewer")
                    ),
                    timestamp: approved_on,
                    read: false,
                    achievement_id: Some(record.id.clone()),
                });
            }
            (AchievementStatus::Rejected, _) => {
                notifications.push(Notification {
                    id: format!("rejection-{}", record.id),
                    kind: NotificationKind::Rejection,
                    title: "Achievement Rejected".to_string(),
                    message: format!(
                        "\"{}\" by {} was not approved",
                        record.event_name, record.student_name
                    ),
                    timestamp: record.submitted_date,
                    read: false,
                    achievement_id: Some(record.id.clone()),
                });
            }
            _ => {}
        }
    }

    notifications.extend(announcements.iter().map(|announcement| Notification {
        id: announcement.id.clone(),
        kind: NotificationKind::Info,
        title: announcement.title.clone(),
        message: announcement.message.clone(),
        timestamp: announcement.timestamp,
        read: announcement.read,
        achievement_id: None,
    }));

    notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    notifications
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn from_records(
        records: &[AchievementRecord],
        announcements: &[Announcement],
        state: &InboxState,
    ) -> Self {
        let items = derive_notifications(records, announcements)
            .into_iter()
            .filter(|item| !state.dismissed.contains(&item.id))
            .map(|mut item| {
                if state.read.contains(&item.id) {
                    item.read = true;
                }
                item
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.read).count()
    }

    pub fn filter(&self, filter: NotificationFilter) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .collect()
    }

    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.read = true;
                true
            }
            None => false,
        }
    }

    /// Returns how many entries changed from unread to read.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|item| !item.read) {
            item.read = true;
            changed += 1;
        }
        changed
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}
