use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ARRIVAL_INTERVAL_MS, CHAT_REPLY_DELAY_MS, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
    DEFAULT_OPERATOR_NAME, INBOX_CAPACITY, NOTICE_DURATION_MS, STAGE_INTERVAL_MS,
};
use crate::error::CoreError;

/// Timings and limits for the simulated agent, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreConfig {
    pub arrival_interval_ms: u64,
    pub stage_interval_ms: u64,
    pub chat_reply_delay_ms: u64,
    pub notice_duration_ms: u64,
    pub inbox_capacity: usize,
    pub operator_name: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            arrival_interval_ms: ARRIVAL_INTERVAL_MS,
            stage_interval_ms: STAGE_INTERVAL_MS,
            chat_reply_delay_ms: CHAT_REPLY_DELAY_MS,
            notice_duration_ms: NOTICE_DURATION_MS,
            inbox_capacity: INBOX_CAPACITY,
            operator_name: DEFAULT_OPERATOR_NAME.to_string(),
        }
    }
}

impl CoreConfig {
    /// Load and validate config from a JSON file
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load from `path` if given, else from the default location if that file
    /// exists, else fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CoreError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: CoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// `<config_dir>/lending-agent/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.arrival_interval_ms == 0 {
            return Err(CoreError::InvalidConfig("arrivalIntervalMs must be positive".into()));
        }
        if self.stage_interval_ms == 0 {
            return Err(CoreError::InvalidConfig("stageIntervalMs must be positive".into()));
        }
        if self.inbox_capacity == 0 {
            return Err(CoreError::InvalidConfig("inboxCapacity must be positive".into()));
        }
        Ok(())
    }

    pub fn arrival_interval(&self) -> Duration {
        Duration::from_millis(self.arrival_interval_ms)
    }

    pub fn stage_interval(&self) -> Duration {
        Duration::from_millis(self.stage_interval_ms)
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}
