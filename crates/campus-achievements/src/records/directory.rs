use super::domain::StudentId;
use std::collections::HashMap;
use std::sync::Mutex;

/// Resolves free-text student names to stable identifiers.
///
/// Names are compared after trimming, collapsing inner whitespace and case
/// folding, so "Rahul  Sharma" and "rahul sharma" resolve to the same id.
#[derive(Debug, Default)]
pub struct StudentDirectory {
    entries: Mutex<DirectoryEntries>,
}

#[derive(Debug, Default)]
struct DirectoryEntries {
    by_name: HashMap<String, StudentId>,
    issued: u32,
}

impl StudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, student_name: &str) -> StudentId {
        let key = normalize_name(student_name);
        let mut entries = self.entries.lock().expect("directory mutex poisoned");
        if let Some(id) = entries.by_name.get(&key) {
            return id.clone();
        }

        entries.issued += 1;
        let id = StudentId(format!("stu-{:04}", entries.issued));
        entries.by_name.insert(key, id.clone());
        id
    }

    pub fn lookup(&self, student_name: &str) -> Option<StudentId> {
        let key = normalize_name(student_name);
        self.entries
            .lock()
            .expect("directory mutex poisoned")
            .by_name
            .get(&key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("directory mutex poisoned")
            .by_name
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_resolves_to_same_id() {
        let directory = StudentDirectory::new();
        let first = directory.resolve("Rahul Sharma");
        let again = directory.resolve("  rahul   SHARMA ");
        let other = directory.resolve("Priya Patel");

        assert_eq!(first, again);
        assert_ne!(first, other);
        assert_eq!(first.0, "stu-0001");
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn lookup_does_not_issue_ids() {
        let directory = StudentDirectory::new();
        assert!(directory.lookup("Ankit Verma").is_none());
        assert!(directory.is_empty());
    }
}
