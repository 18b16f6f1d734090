use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::defaults::{
    clamp_simulated_delay_ms, clamp_timeout_ms, default_simulated_delay_ms, default_timeout_ms,
    default_true,
};

/// Settings loaded from `config.toml`.
///
/// Config keys (TOML): `strict_validation`, `[analysis]`, `[ui]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Record rejected triggers as visible errors instead of ignoring them.
    #[serde(default)]
    pub strict_validation: bool,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    pub fn normalized(mut self) -> Self {
        self.analysis.simulated_delay_ms = clamp_simulated_delay_ms(self.analysis.simulated_delay_ms);
        self.analysis.timeout_ms = clamp_timeout_ms(self.analysis.timeout_ms);
        self
    }
}

/// Analysis engine tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// How long the mock engine pretends to work.
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    /// Abort an analysis that runs longer than this. `0` waits forever.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AnalysisSettings {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// Presentation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_true")]
    pub show_character_count: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_character_count: true,
        }
    }
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("No suitable config directory found")]
    NoConfigDir,
}
