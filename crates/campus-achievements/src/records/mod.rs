//! Achievement records: the data model, the pending/approved/rejected review
//! workflow, storage, CSV import and the HTTP surface over them.

pub mod directory;
pub mod domain;
pub mod filter;
pub mod import;
pub mod repository;
pub mod review;
pub mod router;
pub mod sample;
pub mod service;

#[cfg(test)]
mod tests;

pub use directory::StudentDirectory;
pub use domain::{
    AchievementId, AchievementRecord, AchievementStatus, Category, Level, NewAchievement,
    StudentId, ValidationError,
};
pub use filter::RecordFilter;
pub use import::{RecordImportError, RecordImporter};
pub use repository::{AchievementRepository, InMemoryAchievementRepository, RepositoryError};
pub use review::{transition_status, ReviewDecision, ReviewError};
pub use router::achievement_router;
pub use sample::{sample_announcements, sample_records};
pub use service::{AchievementService, AchievementServiceError};
