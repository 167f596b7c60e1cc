use super::domain::{AchievementId, AchievementRecord, AchievementStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome chosen by a reviewer for a pending achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve { reviewer: String },
    Reject,
}

impl ReviewDecision {
    /// Maps a requested status onto a decision. Approvals without a named
    /// reviewer are stamped with `default_reviewer`.
    pub fn from_status(
        target: AchievementStatus,
        reviewer: Option<&str>,
        default_reviewer: &str,
    ) -> Result<Self, ReviewError> {
        match target {
            AchievementStatus::Approved => {
                let reviewer = reviewer
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(default_reviewer);
                Ok(Self::Approve {
                    reviewer: reviewer.to_string(),
                })
            }
            AchievementStatus::Rejected => Ok(Self::Reject),
            AchievementStatus::Pending => Err(ReviewError::InvalidTarget(target)),
        }
    }

    pub const fn target(&self) -> AchievementStatus {
        match self {
            Self::Approve { .. } => AchievementStatus::Approved,
            Self::Reject => AchievementStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("achievement {id} was already {status}")]
    AlreadyFinalized {
        id: AchievementId,
        status: AchievementStatus,
    },
    #[error("cannot transition an achievement to {0}")]
    InvalidTarget(AchievementStatus),
}

/// Applies a review decision, returning the updated copy.
///
/// Only pending records can be reviewed; approved and rejected are terminal.
pub fn transition_status(
    record: &AchievementRecord,
    decision: &ReviewDecision,
    on: NaiveDate,
) -> Result<AchievementRecord, ReviewError> {
    if record.status.is_terminal() {
        return Err(ReviewError::AlreadyFinalized {
            id: record.id.clone(),
            status: record.status,
        });
    }

    let mut updated = record.clone();
    updated.status = decision.target();
    match decision {
        ReviewDecision::Approve { reviewer } => {
            updated.approved_date = Some(on);
            updated.approved_by = Some(reviewer.clone());
        }
        ReviewDecision::Reject => {
            updated.approved_date = None;
            updated.approved_by = None;
        }
    }

    Ok(updated)
}
