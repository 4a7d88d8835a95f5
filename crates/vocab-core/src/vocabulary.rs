use serde::Serialize;
use serde_json::Value;
use vocab_types::{CefrLevel, VocabEntry};

use crate::error::{CleanError, EntryRef};

/// In-memory vocabulary dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_entries(entries: Vec<VocabEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of entry objects.
    ///
    /// Entries are converted one at a time so a failure can name the
    /// offending entry instead of just a byte offset.
    pub fn from_json(json: &str) -> Result<Self, CleanError> {
        let values: Vec<Value> = serde_json::from_str(json)?;

        let mut entries = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            entries.push(parse_entry(index, value)?);
        }

        Ok(Self { entries })
    }

    /// Serialize with 4-space indentation; non-ASCII text stays literal.
    pub fn to_json_pretty(&self) -> Result<String, CleanError> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.entries.serialize(&mut ser)?;

        Ok(String::from_utf8(buf).expect("serializer emits UTF-8"))
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<VocabEntry> {
        self.entries
    }
}

fn parse_entry(index: usize, value: Value) -> Result<VocabEntry, CleanError> {
    let entry = EntryRef {
        index,
        id: value.get("id").and_then(Value::as_i64),
        word: value.get("word").and_then(Value::as_str).map(str::to_owned),
    };

    // Reject out-of-enum levels with their own diagnostic; everything else
    // (missing or ill-typed fields) surfaces through the serde conversion.
    if let Some(raw) = value.get("cefr_level").and_then(Value::as_str) {
        if CefrLevel::from_str(raw).is_none() {
            return Err(CleanError::UnknownLevel {
                entry,
                level: raw.to_owned(),
            });
        }
    }

    serde_json::from_value(value).map_err(|source| CleanError::InvalidEntry { entry, source })
}
