use super::normalize::RawAnswer;
use super::questions::question;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer sheet CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: String,
    value: String,
}

/// Reads exported answer sheets with a `question_id,value` header.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<BTreeMap<String, RawAnswer>, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Rows for unknown question ids are skipped; a repeated id keeps the last row.
    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<BTreeMap<String, RawAnswer>, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut answers = BTreeMap::new();
        for row in csv_reader.deserialize::<AnswerRow>() {
            let row = row?;
            if question(&row.question_id).is_none() {
                warn!(question_id = %row.question_id, "skipping answer for unknown question");
                continue;
            }
            answers.insert(row.question_id, RawAnswer::Text(row.value));
        }

        Ok(answers)
    }
}
