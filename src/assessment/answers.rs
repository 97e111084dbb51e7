use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One attempt's answers: question id to string-encoded value (Likert 1-5,
/// option index, or scale value). Built incrementally by the session and
/// handed by value to the scoring engine once collection finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value, replacing any earlier answer to the same question.
    pub fn record(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(question_id.into(), value.into());
    }

    pub fn value(&self, question_id: &str) -> Option<&str> {
        self.entries.get(question_id).map(String::as_str)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.entries.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Loads `{"question_id": "value", ...}` from a JSON document.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, AnswersError> {
        let entries: BTreeMap<String, String> =
            serde_json::from_reader(reader).map_err(AnswersError::Json)?;
        Ok(Self { entries })
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, AnswersError> {
        let file = File::open(path).map_err(AnswersError::Io)?;
        Self::from_json_reader(file)
    }

    /// Loads answers from CSV with `question_id` and `value` columns.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, AnswersError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut entries = BTreeMap::new();

        for row in csv_reader.deserialize::<CsvAnswerRow>() {
            let row = row.map_err(AnswersError::Csv)?;
            entries.insert(row.question_id, row.value);
        }

        Ok(Self { entries })
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, AnswersError> {
        let file = File::open(path).map_err(AnswersError::Io)?;
        Self::from_csv_reader(file)
    }
}

impl FromIterator<(String, String)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for AnswerSet {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

#[derive(Debug, Deserialize)]
struct CsvAnswerRow {
    question_id: String,
    value: String,
}

#[derive(Debug)]
pub enum AnswersError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl fmt::Display for AnswersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswersError::Io(err) => write!(f, "failed to read answers: {err}"),
            AnswersError::Json(err) => write!(f, "answers JSON is malformed: {err}"),
            AnswersError::Csv(err) => write!(f, "answers CSV is malformed: {err}"),
        }
    }
}

impl std::error::Error for AnswersError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswersError::Io(err) => Some(err),
            AnswersError::Json(err) => Some(err),
            AnswersError::Csv(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn record_overwrites_previous_value() {
        let mut answers = AnswerSet::new();
        answers.record("interest1", "3");
        answers.record("interest1", "5");

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.value("interest1"), Some("5"));
    }

    #[test]
    fn loads_answers_from_json() {
        let raw = r#"{"interest1": "5", "excel1": "1"}"#;
        let answers = AnswerSet::from_json_reader(Cursor::new(raw)).expect("json parses");

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.value("excel1"), Some("1"));
    }

    #[test]
    fn rejects_malformed_json() {
        let raw = r#"{"interest1": 5}"#;
        let result = AnswerSet::from_json_reader(Cursor::new(raw));
        assert!(matches!(result, Err(AnswersError::Json(_))));
    }

    #[test]
    fn loads_answers_from_csv() {
        let raw = "question_id,value\ninterest1,4\nlogic1,2\n";
        let answers = AnswerSet::from_csv_reader(Cursor::new(raw)).expect("csv parses");

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.value("logic1"), Some("2"));
    }

    #[test]
    fn rejects_csv_missing_value_column() {
        let raw = "question_id\ninterest1\n";
        let result = AnswerSet::from_csv_reader(Cursor::new(raw));
        assert!(matches!(result, Err(AnswersError::Csv(_))));
    }
}
