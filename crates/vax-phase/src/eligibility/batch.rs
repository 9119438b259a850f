use super::domain::{Answers, OccupationCategory, Phase};
use super::prompt::{parse_age, parse_yes_no, ResponseError};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownOccupation {
        row: usize,
        label: String,
    },
    InvalidAnswer {
        row: usize,
        column: &'static str,
        source: ResponseError,
    },
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read answer batch: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid answer batch CSV data: {}", err),
            BatchImportError::UnknownOccupation { row, label } => {
                write!(f, "row {}: unknown occupation '{}'", row, label)
            }
            BatchImportError::InvalidAnswer {
                row,
                column,
                source,
            } => write!(f, "row {}: invalid {}: {}", row, column, source),
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
            BatchImportError::UnknownOccupation { .. } => None,
            BatchImportError::InvalidAnswer { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One person's pre-filled answers from a batch file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    pub id: String,
    pub answers: Answers,
}

/// Classification of a single batch row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub id: String,
    pub phase: Phase,
    pub summary: String,
}

impl BatchRecord {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a headed CSV. Blank cells are unknown answers.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Self>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<BatchRow>().enumerate() {
            // Header occupies line 1.
            let line = index + 2;
            records.push(row?.into_record(line)?);
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    occupation: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    vaccine_recommended_for_minor: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_medical_condition_or_disability: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    identifies_indigenous: Option<String>,
}

impl BatchRow {
    fn into_record(self, line: usize) -> Result<BatchRecord, BatchImportError> {
        let occupation = self
            .occupation
            .map(|label| {
                OccupationCategory::from_label(&label).ok_or(BatchImportError::UnknownOccupation {
                    row: line,
                    label,
                })
            })
            .transpose()?;

        let age = self
            .age
            .map(|raw| {
                parse_age(&raw).map_err(|err| BatchImportError::InvalidAnswer {
                    row: line,
                    column: "age",
                    source: err.into(),
                })
            })
            .transpose()?;

        let answers = Answers {
            occupation,
            age,
            vaccine_recommended_for_minor: flag(
                self.vaccine_recommended_for_minor,
                line,
                "vaccine_recommended_for_minor",
            )?,
            has_medical_condition_or_disability: flag(
                self.has_medical_condition_or_disability,
                line,
                "has_medical_condition_or_disability",
            )?,
            identifies_indigenous: flag(self.identifies_indigenous, line, "identifies_indigenous")?,
        };

        Ok(BatchRecord {
            id: self.id.unwrap_or_else(|| format!("row-{line}")),
            answers,
        })
    }
}

fn flag(
    raw: Option<String>,
    row: usize,
    column: &'static str,
) -> Result<Option<bool>, BatchImportError> {
    raw.map(|value| match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => parse_yes_no(other)
            .map_err(|source| BatchImportError::InvalidAnswer { row, column, source }),
    })
    .transpose()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
