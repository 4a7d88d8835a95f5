use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("data/vocabulary.json")
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Vocabulary dataset file, overridable with VOCAB_FILE
    pub path: PathBuf,
}

impl StorageConfig {
    pub fn new() -> Self {
        let path = env::var("VOCAB_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_path());

        StorageConfig { path }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
