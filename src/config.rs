//! Configuration
//!
//! Loaded from a JSON file (`classpromo.json` by convention). Every field is
//! optional; an absent file section falls back to the defaults below.
//!
//! ```json
//! {
//!   "rules_file": "rules.json",
//!   "log_level": "info",
//!   "utc_offset_minutes": 330
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Severity;
use crate::rules::{PromotionRuleTable, RuleError, RuleLoader};

/// Allowed range for `utc_offset_minutes` (UTC-12:00 to UTC+14:00)
const MIN_UTC_OFFSET_MINUTES: i32 = -720;
const MAX_UTC_OFFSET_MINUTES: i32 = 840;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors. All are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON in '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("invalid log_level: {0}")]
    InvalidLogLevel(String),

    #[error("utc_offset_minutes {0} is outside -720..=840")]
    InvalidUtcOffset(i32),

    #[error(transparent)]
    Rules(#[from] RuleError),
}

/// Where the active rule table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// Compiled-in board calendar
    Builtin,
    /// Loaded from this file
    File(PathBuf),
}

impl RuleSource {
    /// Short label for logs and CLI output
    pub fn label(&self) -> String {
        match self {
            RuleSource::Builtin => "builtin".to_string(),
            RuleSource::File(path) => path.display().to_string(),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rule file; relative paths resolve against the config file's directory
    #[serde(default)]
    pub rules_file: Option<PathBuf>,

    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Fixed offset for "today"; the local clock is used when unset
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_file: None,
            log_level: default_log_level(),
            utc_offset_minutes: None,
            base_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut config: Config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        config.validate()?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Validate field values
    pub fn validate(&self) -> ConfigResult<()> {
        self.severity()?;

        if let Some(offset) = self.utc_offset_minutes {
            if !(MIN_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&offset) {
                return Err(ConfigError::InvalidUtcOffset(offset));
            }
        }

        Ok(())
    }

    /// Parsed log level
    pub fn severity(&self) -> ConfigResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(ConfigError::InvalidLogLevel)
    }

    /// Rule file path after resolving against the config directory
    pub fn rules_path(&self) -> Option<PathBuf> {
        let file = self.rules_file.as_ref()?;
        match &self.base_dir {
            Some(base) if file.is_relative() => Some(base.join(file)),
            _ => Some(file.clone()),
        }
    }

    /// Load the configured rule table, or the built-in one
    pub fn load_rules(&self) -> ConfigResult<(PromotionRuleTable, RuleSource)> {
        match self.rules_path() {
            Some(path) => {
                let table = RuleLoader::load_file(&path)?;
                Ok((table, RuleSource::File(path)))
            }
            None => Ok((PromotionRuleTable::builtin(), RuleSource::Builtin)),
        }
    }

    /// Today's date on the configured clock
    pub fn today(&self) -> NaiveDate {
        self.today_at(Utc::now())
    }

    /// The calendar date of `now` on the configured clock
    pub fn today_at(&self, now: DateTime<Utc>) -> NaiveDate {
        match self
            .utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
        {
            Some(offset) => now.with_timezone(&offset).date_naive(),
            None => now.with_timezone(&Local).date_naive(),
        }
    }
}
