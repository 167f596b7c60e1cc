use serde::{Deserialize, Serialize};

/// Lower-cased position text, scanned once per classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionText(String);

impl PositionText {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.0.contains(keyword))
    }
}

const FIRST: &[&str] = &["winner", "1st", "gold"];
const SECOND: &[&str] = &["2nd", "silver"];
const THIRD: &[&str] = &["3rd", "bronze"];
const FINALIST: &[&str] = &["finalist"];
const RUNNER: &[&str] = &["runner"];

/// Scoring tier derived from the placement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionRank {
    Gold,
    Silver,
    Bronze,
    Finalist,
    Participant,
}

impl PositionRank {
    pub fn from_position(position: &str) -> Self {
        Self::from_text(&PositionText::new(position))
    }

    pub fn from_text(text: &PositionText) -> Self {
        if text.mentions_any(FIRST) {
            Self::Gold
        } else if text.mentions_any(SECOND) {
            Self::Silver
        } else if text.mentions_any(THIRD) {
            Self::Bronze
        } else if text.mentions_any(FINALIST) || text.mentions_any(RUNNER) {
            Self::Finalist
        } else {
            Self::Participant
        }
    }

    pub const fn base_points(self) -> f64 {
        match self {
            Self::Gold => 10.0,
            Self::Silver => 7.0,
            Self::Bronze => 5.0,
            Self::Finalist => 3.0,
            Self::Participant => 1.0,
        }
    }

    pub const fn is_award(self) -> bool {
        matches!(self, Self::Gold | Self::Silver)
    }
}

/// Label bucket used by the positions chart. Runner-up text outranks the
/// finalist bucket here, unlike the scoring tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PositionCategory {
    Winner,
    #[serde(rename = "Runner-up")]
    RunnerUp,
    Finalist,
    Participant,
}

impl PositionCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Winner,
            Self::RunnerUp,
            Self::Finalist,
            Self::Participant,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Winner => "Winner",
            Self::RunnerUp => "Runner-up",
            Self::Finalist => "Finalist",
            Self::Participant => "Participant",
        }
    }

    pub fn from_text(text: &PositionText) -> Self {
        if text.mentions_any(FIRST) {
            Self::Winner
        } else if text.mentions_any(RUNNER) || text.mentions_any(SECOND) {
            Self::RunnerUp
        } else if text.mentions_any(FINALIST) {
            Self::Finalist
        } else {
            Self::Participant
        }
    }
}

pub fn classify_position(position: &str) -> PositionCategory {
    PositionCategory::from_text(&PositionText::new(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_precedence_prefers_first_place_keywords() {
        assert_eq!(PositionRank::from_position("Gold Medal"), PositionRank::Gold);
        assert_eq!(PositionRank::from_position("1st Runner"), PositionRank::Gold);
        assert_eq!(PositionRank::from_position("2nd Place"), PositionRank::Silver);
        assert_eq!(PositionRank::from_position("BRONZE"), PositionRank::Bronze);
        assert_eq!(PositionRank::from_position("Runner-up"), PositionRank::Finalist);
        assert_eq!(PositionRank::from_position(""), PositionRank::Participant);
    }

    #[test]
    fn chart_buckets_differ_from_scoring_tiers() {
        assert_eq!(classify_position("Runner-up"), PositionCategory::RunnerUp);
        assert_eq!(classify_position("Silver"), PositionCategory::RunnerUp);
        assert_eq!(classify_position("3rd Place"), PositionCategory::Participant);
        assert_eq!(classify_position("National finalist"), PositionCategory::Finalist);
        assert_eq!(classify_position("WINNER"), PositionCategory::Winner);
    }

    #[test]
    fn only_top_two_tiers_are_awards() {
        let awards: Vec<bool> = [
            PositionRank::Gold,
            PositionRank::Silver,
            PositionRank::Bronze,
            PositionRank::Finalist,
            PositionRank::Participant,
        ]
        .iter()
        .map(|rank| rank.is_award())
        .collect();
        assert_eq!(awards, vec![true, true, false, false, false]);
    }
}
