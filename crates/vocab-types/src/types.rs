use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// CEFR proficiency level, ordered easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CefrLevel {
    A1, // Breakthrough
    A2, // Waystage
    B1, // Threshold
    B2, // Vantage
    C1, // Advanced
    C2, // Mastery
}

impl CefrLevel {
    /// Parse level from string
    ///
    /// Matching is strict: the dataset fixes the six uppercase spellings,
    /// anything else counts as an unknown level.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "A1" => Some(CefrLevel::A1),
            "A2" => Some(CefrLevel::A2),
            "B1" => Some(CefrLevel::B1),
            "B2" => Some(CefrLevel::B2),
            "C1" => Some(CefrLevel::C1),
            "C2" => Some(CefrLevel::C2),
            _ => None,
        }
    }

    /// Get level string
    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }

    /// Numeric difficulty rank (A1=1 .. C2=6)
    pub fn rank(&self) -> u8 {
        match self {
            CefrLevel::A1 => 1,
            CefrLevel::A2 => 2,
            CefrLevel::B1 => 3,
            CefrLevel::B2 => 4,
            CefrLevel::C1 => 5,
            CefrLevel::C2 => 6,
        }
    }

    /// Get level description
    pub fn description(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1 (Breakthrough)",
            CefrLevel::A2 => "A2 (Waystage)",
            CefrLevel::B1 => "B1 (Threshold)",
            CefrLevel::B2 => "B2 (Vantage)",
            CefrLevel::C1 => "C1 (Advanced)",
            CefrLevel::C2 => "C2 (Mastery)",
        }
    }
}

/// A single vocabulary record as stored in the dataset file.
///
/// Fields the cleaner does not know about ride along in `extra` and are
/// written back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: i64,
    pub word: String,
    pub cefr_level: CefrLevel,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
