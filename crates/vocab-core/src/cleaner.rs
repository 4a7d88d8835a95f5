use std::collections::HashMap;
use std::fmt;

use vocab_types::VocabEntry;

use crate::vocabulary::Vocabulary;

/// Outcome summary for one cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub original: usize,
    pub unique: usize,
}

impl fmt::Display for CleanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cleaning complete. Reduced from {} to {} unique words.",
            self.original, self.unique
        )
    }
}

/// Identity key for deduplication: trimmed and lowercased.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Unify sense separators to `"; "`.
///
/// `/`, full-width `；` and literal spaces all act as separators in the raw
/// data. Idempotent: the canonical form maps to itself.
pub fn standardize_translation(raw: &str) -> String {
    let unified = raw.replace(['/', '；', ' '], ";");

    unified
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Keep one entry per normalized word, the lowest CEFR rank winning and the
/// first occurrence winning ties.
///
/// Kept entries stay at their first-seen position; a strictly lower-level
/// duplicate replaces the kept entry in place, so the result is fully
/// determined by input order.
fn dedup_lowest_level(entries: Vec<VocabEntry>) -> Vec<VocabEntry> {
    let mut kept: Vec<VocabEntry> = Vec::with_capacity(entries.len());
    let mut index_by_word: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = normalize_word(&entry.word);
        match index_by_word.get(&key) {
            None => {
                index_by_word.insert(key, kept.len());
                kept.push(entry);
            }
            Some(&at) => {
                if entry.cefr_level.rank() < kept[at].cefr_level.rank() {
                    kept[at] = entry;
                }
            }
        }
    }

    kept
}

/// Run the full pipeline: deduplicate, standardize translations, drop the
/// phonetic field, then sort ascending by `(level rank, id)`.
pub fn clean(vocabulary: Vocabulary) -> (Vocabulary, CleanReport) {
    let original = vocabulary.entry_count();

    let mut entries = dedup_lowest_level(vocabulary.into_entries());

    for entry in &mut entries {
        entry.translation = standardize_translation(&entry.translation);
        entry.phonetic = None;
    }

    entries.sort_by_key(|entry| (entry.cefr_level.rank(), entry.id));

    let report = CleanReport {
        original,
        unique: entries.len(),
    };
    tracing::debug!(
        original = report.original,
        unique = report.unique,
        "vocabulary cleaned"
    );

    (Vocabulary::from_entries(entries), report)
}
