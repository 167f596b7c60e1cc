//! Converts a single achievement into leaderboard points.
//!
//! Callers are expected to pass approved records; status is not checked here.

mod position;

pub use position::{classify_position, PositionCategory, PositionRank, PositionText};

use crate::records::domain::AchievementRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreCard {
    pub rank: PositionRank,
    pub points: f64,
    pub is_award: bool,
}

pub fn score(record: &AchievementRecord) -> ScoreCard {
    let rank = PositionRank::from_position(&record.position);
    ScoreCard {
        rank,
        points: rank.base_points() * record.level.multiplier(),
        is_award: rank.is_award(),
    }
}
