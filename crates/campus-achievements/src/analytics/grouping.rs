use crate::records::domain::{AchievementRecord, StudentId};
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCount<K> {
    pub key: K,
    pub count: usize,
}

/// Counts records per key and keeps the `n` most frequent keys.
///
/// Ties keep the order in which each key first appeared.
pub fn top_n<'a, I, K, F>(records: I, mut key_fn: F, n: usize) -> Vec<KeyCount<K>>
where
    I: IntoIterator<Item = &'a AchievementRecord>,
    K: Eq + Hash + Clone,
    F: FnMut(&AchievementRecord) -> K,
{
    let mut groups: Vec<KeyCount<K>> = Vec::new();
    let mut slots: HashMap<K, usize> = HashMap::new();

    for record in records {
        let key = key_fn(record);
        match slots.get(&key) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(KeyCount { key, count: 1 });
            }
        }
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(n);
    groups
}

/// Departments with the most approved achievements.
pub fn top_departments(records: &[AchievementRecord], n: usize) -> Vec<KeyCount<String>> {
    top_n(
        records.iter().filter(|record| record.is_approved()),
        |record| record.department.clone(),
        n,
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentCount {
    pub student_id: StudentId,
    pub student_name: String,
    pub count: usize,
}

/// Students with the most approved achievements, by count rather than points.
pub fn top_students_by_count(records: &[AchievementRecord], n: usize) -> Vec<StudentCount> {
    let approved: Vec<&AchievementRecord> =
        records.iter().filter(|record| record.is_approved()).collect();

    top_n(
        approved.iter().copied(),
        |record| record.student_id.clone(),
        n,
    )
    .into_iter()
    .map(|group| {
        let student_name = approved
            .iter()
            .find(|record| record.student_id == group.key)
            .map(|record| record.student_name.clone())
            .unwrap_or_default();
        StudentCount {
            student_id: group.key,
            student_name,
            count: group.count,
        }
    })
    .collect()
}
