use std::fmt;
use std::path::PathBuf;

/// Best-effort identification of a dataset entry in diagnostics.
///
/// `id` and `word` are taken from the raw JSON value, so they are available
/// even when the entry itself fails to validate.
#[derive(Debug, Clone)]
pub struct EntryRef {
    pub index: usize,
    pub id: Option<i64>,
    pub word: Option<String>,
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry #{}", self.index)?;
        match (&self.word, self.id) {
            (Some(word), Some(id)) => write!(f, " (word {word:?}, id {id})"),
            (Some(word), None) => write!(f, " (word {word:?})"),
            (None, Some(id)) => write!(f, " (id {id})"),
            (None, None) => Ok(()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("vocabulary file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{entry}: {source}")]
    InvalidEntry {
        entry: EntryRef,
        #[source]
        source: serde_json::Error,
    },

    #[error("{entry}: unknown CEFR level {level:?}")]
    UnknownLevel { entry: EntryRef, level: String },
}
