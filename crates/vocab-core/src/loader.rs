use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::CleanError;
use crate::vocabulary::Vocabulary;

pub struct VocabularyLoader;

impl VocabularyLoader {
    /// Load a vocabulary dataset from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Vocabulary, CleanError> {
        tracing::info!("Loading vocabulary from file: {}", path.display());

        let json = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => CleanError::NotFound {
                path: path.to_path_buf(),
            },
            _ => CleanError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let vocabulary = Vocabulary::from_json(&json)?;
        tracing::info!("Loaded {} vocabulary entries", vocabulary.entry_count());

        Ok(vocabulary)
    }

    /// Write the dataset back to `path`.
    ///
    /// The content goes to a sibling temp file first and is renamed over the
    /// destination, so the destination is never left truncated.
    pub fn save_to_file(path: &Path, vocabulary: &Vocabulary) -> Result<(), CleanError> {
        let json = vocabulary.to_json_pretty()?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json).map_err(|source| CleanError::Io {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, path).map_err(|source| CleanError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            "Wrote {} entries to {}",
            vocabulary.entry_count(),
            path.display()
        );

        Ok(())
    }
}
