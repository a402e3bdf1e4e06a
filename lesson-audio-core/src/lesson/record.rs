use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GenerateError;

/// One example sentence to be voiced. Ids look like `<lesson>_<index>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    pub id: String,
    pub text: String,
}

impl SentenceRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

static RE_SENTENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)ExampleSentence\(\s*id:\s*'([^']+)',\s*text:\s*'([^']+)'").unwrap()
});

/// Scan lesson source text for `ExampleSentence(id: '...', text: '...'`
/// blocks and return them in file order.
///
/// The scan is deliberately permissive: whitespace and newlines may sit
/// between the fields, values are single-quoted and there is no escape
/// handling. A value containing `'` is cut short or the block is skipped,
/// never reported. Finding nothing is not an error at this level.
pub fn extract_records(source: &str) -> Vec<SentenceRecord> {
    RE_SENTENCE
        .captures_iter(source)
        .map(|caps| SentenceRecord::new(&caps[1], &caps[2]))
        .collect()
}

/// Read a lesson data file and extract its records. Invalid UTF-8 is
/// replaced rather than rejected so one bad byte does not hide the rest.
pub fn load_records(path: &Path) -> Result<Vec<SentenceRecord>, GenerateError> {
    let bytes = std::fs::read(path).map_err(|source| GenerateError::DataFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_records(&String::from_utf8_lossy(&bytes)))
}
