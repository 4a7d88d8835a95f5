use std::env;

use serde::{Deserialize, Serialize};

fn default_filter() -> String {
    "info".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// Default tracing filter directive, overridable with VOCAB_LOG
    /// (RUST_LOG still wins at subscriber level)
    pub filter: String,
}

impl LogConfig {
    pub fn new() -> Self {
        let filter = env::var("VOCAB_LOG").unwrap_or_else(|_| default_filter());

        LogConfig { filter }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}
