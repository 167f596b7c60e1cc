use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One CSV row before student resolution and invariant checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordRow {
    pub(crate) id: String,
    pub(crate) event_name: String,
    pub(crate) category: String,
    pub(crate) level: String,
    pub(crate) position: String,
    pub(crate) date: String,
    pub(crate) student_name: String,
    pub(crate) department: String,
    pub(crate) status: String,
    pub(crate) submitted_date: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) approved_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) approved_by: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) certificate: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RecordRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<RecordRow>().collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
