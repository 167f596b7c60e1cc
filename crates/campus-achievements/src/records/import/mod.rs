mod parser;

use super::directory::StudentDirectory;
use super::domain::{AchievementId, AchievementRecord, AchievementStatus, Category, Level};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use parser::RecordRow;

#[derive(Debug)]
pub enum RecordImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { row: usize, reason: String },
    DuplicateId { row: usize, id: String },
}

impl std::fmt::Display for RecordImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordImportError::Io(err) => write!(f, "failed to read records export: {}", err),
            RecordImportError::Csv(err) => write!(f, "invalid records CSV data: {}", err),
            RecordImportError::InvalidRow { row, reason } => {
                write!(f, "row {} is not a valid achievement: {}", row, reason)
            }
            RecordImportError::DuplicateId { row, id } => {
                write!(f, "row {} repeats achievement id {}", row, id)
            }
        }
    }
}

impl std::error::Error for RecordImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordImportError::Io(err) => Some(err),
            RecordImportError::Csv(err) => Some(err),
            RecordImportError::InvalidRow { .. } | RecordImportError::DuplicateId { .. } => None,
        }
    }
}

impl From<std::io::Error> for RecordImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RecordImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads achievement records from a CSV export using the camelCase column names
/// of the record encoding.
pub struct RecordImporter;

impl RecordImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        directory: &StudentDirectory,
    ) -> Result<Vec<AchievementRecord>, RecordImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let records = Self::from_reader(file, directory)?;
        info!(path = %path.display(), count = records.len(), "imported achievement records");
        Ok(records)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        directory: &StudentDirectory,
    ) -> Result<Vec<AchievementRecord>, RecordImportError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut records = Vec::new();

        // Row numbers are 1-based and skip the header line.
        for (index, row) in parser::parse_rows(reader)?.into_iter().enumerate() {
            let row_number = index + 2;
            if !seen.insert(row.id.clone()) {
                return Err(RecordImportError::DuplicateId {
                    row: row_number,
                    id: row.id,
                });
            }

            let record = build_record(row, row_number, directory)?;
            if record.category == Category::Unknown || record.level == Level::Unknown {
                debug!(id = %record.id, "row uses an unrecognised category or level");
            }
            records.push(record);
        }

        Ok(records)
    }
}

fn build_record(
    row: RecordRow,
    row_number: usize,
    directory: &StudentDirectory,
) -> Result<AchievementRecord, RecordImportError> {
    let invalid = |reason: String| RecordImportError::InvalidRow {
        row: row_number,
        reason,
    };
    let required_date = |field: &str, value: &str| {
        parser::parse_date(value)
            .ok_or_else(|| invalid(format!("{field} '{value}' is not a YYYY-MM-DD date")))
    };

    if row.student_name.trim().is_empty() {
        return Err(invalid("studentName is blank".to_string()));
    }

    let status = AchievementStatus::parse(&row.status)
        .ok_or_else(|| invalid(format!("unknown status '{}'", row.status)))?;
    let date = required_date("date", &row.date)?;
    let submitted_date = required_date("submittedDate", &row.submitted_date)?;
    let approved_date = match row.approved_date.as_deref() {
        Some(value) => Some(required_date("approvedDate", value)?),
        None => None,
    };

    let record = AchievementRecord {
        id: AchievementId(row.id),
        event_name: row.event_name,
        category: Category::parse(&row.category),
        level: Level::parse(&row.level),
        position: row.position,
        date,
        student_id: directory.resolve(&row.student_name),
        student_name: row.student_name,
        department: row.department,
        status,
        submitted_date,
        approved_date,
        approved_by: row.approved_by,
        certificate: row.certificate,
    };

    if !record.approval_consistent() {
        return Err(invalid(format!(
            "approvedDate and approvedBy must be set exactly when status is approved (status {})",
            record.status
        )));
    }

    Ok(record)
}
