use super::domain::{AchievementId, AchievementRecord};
use std::sync::{Arc, Mutex};

/// Storage abstraction for the session's records.
pub trait AchievementRepository: Send + Sync {
    fn insert(&self, record: AchievementRecord) -> Result<AchievementRecord, RepositoryError>;
    /// Replaces the stored record with the output of `change`. The read and
    /// the write happen as one step, so a concurrent `modify` of the same id
    /// observes the replacement.
    fn modify<F, E>(&self, id: &AchievementId, change: F) -> Result<AchievementRecord, E>
    where
        F: FnOnce(&AchievementRecord) -> Result<AchievementRecord, E>,
        E: From<RepositoryError>;
    fn fetch(&self, id: &AchievementId) -> Result<Option<AchievementRecord>, RepositoryError>;
    /// Every record in insertion order.
    fn all(&self) -> Result<Vec<AchievementRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryAchievementRepository {
    records: Arc<Mutex<Vec<AchievementRecord>>>,
}

impl InMemoryAchievementRepository {
    pub fn with_records(records: Vec<AchievementRecord>) -> Result<Self, RepositoryError> {
        let repository = Self::default();
        for record in records {
            repository.insert(record)?;
        }
        Ok(repository)
    }
}

impl AchievementRepository for InMemoryAchievementRepository {
    fn insert(&self, record: AchievementRecord) -> Result<AchievementRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn modify<F, E>(&self, id: &AchievementId, change: F) -> Result<AchievementRecord, E>
    where
        F: FnOnce(&AchievementRecord) -> Result<AchievementRecord, E>,
        E: From<RepositoryError>,
    {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let slot = guard
            .iter_mut()
            .find(|existing| &existing.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let updated = change(&*slot)?;
        *slot = updated.clone();
        Ok(updated)
    }

    fn fetch(&self, id: &AchievementId) -> Result<Option<AchievementRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn all(&self) -> Result<Vec<AchievementRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }
}
