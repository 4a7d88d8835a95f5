use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::storage::StorageConfig;

pub mod log;
pub mod storage;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build the runtime configuration from defaults and env overrides
    pub fn new() -> Self {
        Config {
            storage: StorageConfig::new(),
            log: LogConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
