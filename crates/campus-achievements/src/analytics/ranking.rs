use crate::records::domain::{AchievementRecord, StudentId};
use crate::scoring;
use serde::Serialize;
use std::collections::HashMap;

/// Accumulated leaderboard totals for one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentStat {
    pub student_id: StudentId,
    pub student_name: String,
    pub department: String,
    pub achievements: usize,
    pub awards: usize,
    pub points: f64,
}

/// Groups approved records by student and orders them by points, highest first.
///
/// Department and display name come from the first record seen for the
/// student. Students with equal points keep their encounter order.
pub fn rank_students(records: &[AchievementRecord]) -> Vec<StudentStat> {
    let mut stats: Vec<StudentStat> = Vec::new();
    let mut slots: HashMap<&StudentId, usize> = HashMap::new();

    for record in records.iter().filter(|record| record.is_approved()) {
        let slot = *slots.entry(&record.student_id).or_insert_with(|| {
            stats.push(StudentStat {
                student_id: record.student_id.clone(),
                student_name: record.student_name.clone(),
                department: record.department.clone(),
                achievements: 0,
                awards: 0,
                points: 0.0,
            });
            stats.len() - 1
        });

        let card = scoring::score(record);
        let entry = &mut stats[slot];
        entry.achievements += 1;
        entry.points += card.points;
        if card.is_award {
            entry.awards += 1;
        }
    }

    stats.sort_by(|a, b| b.points.total_cmp(&a.points));
    stats
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub stat: StudentStat,
    /// Points rounded to one decimal place for display.
    pub display_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    pub podium: Vec<LeaderboardEntry>,
    pub rest: Vec<LeaderboardEntry>,
    pub ranked_students: usize,
}

impl Leaderboard {
    pub fn entries(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.podium.iter().chain(self.rest.iter())
    }
}

const PODIUM_SIZE: usize = 3;

/// Ranked view capped at `limit` students, top three split out as the podium.
pub fn leaderboard(records: &[AchievementRecord], limit: usize) -> Leaderboard {
    let ranking = rank_students(records);
    let ranked_students = ranking.len();

    let mut entries: Vec<LeaderboardEntry> = ranking
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, stat)| LeaderboardEntry {
            rank: index + 1,
            display_points: (stat.points * 10.0).round() / 10.0,
            stat,
        })
        .collect();

    let rest = entries.split_off(entries.len().min(PODIUM_SIZE));
    Leaderboard {
        podium: entries,
        rest,
        ranked_students,
    }
}
