use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for submitted achievements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AchievementId(pub String);

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable student identity resolved from the free-text name at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Competition category. Unrecognised spellings land in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Sports,
    Cultural,
    Technical,
    Academic,
    #[serde(other)]
    Unknown,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [Self::Sports, Self::Cultural, Self::Technical, Self::Academic]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sports => "Sports",
            Self::Cultural => "Cultural",
            Self::Technical => "Technical",
            Self::Academic => "Academic",
            Self::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ordered()
            .into_iter()
            .find(|category| category.label() == value.trim())
            .unwrap_or(Self::Unknown)
    }
}

/// Competition level, declared in ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    College,
    District,
    State,
    National,
    International,
    #[serde(other)]
    Unknown,
}

impl Level {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::College,
            Self::District,
            Self::State,
            Self::National,
            Self::International,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::College => "College",
            Self::District => "District",
            Self::State => "State",
            Self::National => "National",
            Self::International => "International",
            Self::Unknown => "Unknown",
        }
    }

    /// Weight applied to base points. Unknown levels carry the neutral weight.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::College => 1.0,
            Self::District => 1.5,
            Self::State => 2.0,
            Self::National => 3.0,
            Self::International => 5.0,
            Self::Unknown => 1.0,
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ordered()
            .into_iter()
            .find(|level| level.label() == value.trim())
            .unwrap_or(Self::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementStatus {
    Pending,
    Approved,
    Rejected,
}

impl AchievementStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for AchievementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single submitted claim of a student's accomplishment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    pub id: AchievementId,
    pub event_name: String,
    pub category: Category,
    pub level: Level,
    pub position: String,
    pub date: NaiveDate,
    pub student_id: StudentId,
    pub student_name: String,
    pub department: String,
    pub status: AchievementStatus,
    pub submitted_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

impl AchievementRecord {
    pub fn is_approved(&self) -> bool {
        self.status == AchievementStatus::Approved
    }

    /// Approval stamp fields must be present exactly when the record is approved.
    pub fn approval_consistent(&self) -> bool {
        let stamped = self.approved_date.is_some() && self.approved_by.is_some();
        let unstamped = self.approved_date.is_none() && self.approved_by.is_none();
        if self.is_approved() {
            stamped
        } else {
            unstamped
        }
    }
}

/// Submission payload; the service assigns identity, dates and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    pub student_name: String,
    pub department: String,
    pub event_name: String,
    pub category: Category,
    pub level: Level,
    pub position: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub certificate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },
}

impl NewAchievement {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("studentName", &self.student_name),
            ("department", &self.department),
            ("eventName", &self.event_name),
            ("position", &self.position),
        ];

        match required
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            Some((field, _)) => Err(ValidationError::Blank { field }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_spellings_deserialize_to_reserved_variant() {
        let category: Category = serde_json::from_str("\"Esports\"").expect("category parses");
        let level: Level = serde_json::from_str("\"Regional\"").expect("level parses");
        assert_eq!(category, Category::Unknown);
        assert_eq!(level, Level::Unknown);
        assert_eq!(level.multiplier(), 1.0);
    }

    #[test]
    fn enum_spellings_are_case_sensitive() {
        let category: Category = serde_json::from_str("\"sports\"").expect("category parses");
        assert_eq!(category, Category::Unknown);
        assert_eq!(Category::parse("Sports"), Category::Sports);
        assert_eq!(
            serde_json::to_string(&AchievementStatus::Approved).unwrap(),
            "\"approved\""
        );
    }

    #[test]
    fn multipliers_rise_with_level() {
        let weights: Vec<f64> = Level::ordered().iter().map(|l| l.multiplier()).collect();
        assert_eq!(weights, vec![1.0, 1.5, 2.0, 3.0, 5.0]);
        assert!(Level::College < Level::International);
    }

    #[test]
    fn validate_names_first_blank_field() {
        let submission = NewAchievement {
            student_name: "Rahul Sharma".to_string(),
            department: " ".to_string(),
            event_name: String::new(),
            category: Category::Sports,
            level: Level::State,
            position: "Winner".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 11, 15).expect("valid date"),
            certificate: None,
        };

        assert_eq!(
            submission.validate(),
            Err(ValidationError::Blank {
                field: "department"
            })
        );
    }
}
