//! Display labels and timing configuration.
//!
//! Settings are loaded from an optional YAML file; a missing file yields the
//! defaults, a malformed file is an error the binary reports. The file path
//! comes from `PTK_CONFIG` or falls back to
//! `~/.config/promotrack/settings.yaml`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::student::TrainingStatus;


// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// UI labels and timing knobs. Every field has a default, so a partial file
/// only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Unit suffix appended to the age at record creation.
    pub age_suffix: String,
    /// Label for records still in training.
    pub status_in_progress: String,
    /// Label for completed records.
    pub status_completed: String,
    /// Auto-clear window for alerts, in milliseconds.
    pub alert_ttl_ms: u64,
    /// Event-loop poll cadence, in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            age_suffix: "ans".into(),
            status_in_progress: "En cours".into(),
            status_completed: "Terminé".into(),
            alert_ttl_ms: 3000,
            tick_rate_ms: 250,
        }
    }
}

impl Settings {
    /// The display label for a training status.
    pub fn status_label(&self, status: TrainingStatus) -> &str {
        match status {
            TrainingStatus::InProgress => &self.status_in_progress,
            TrainingStatus::Completed => &self.status_completed,
        }
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        serde_yaml::from_str(content).map_err(SettingsError::Parse)
    }

    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(path.to_path_buf(), e))?;
        Self::parse(&content)
    }

    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist. A file that exists but does not parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Settings::default())
        }
    }

    /// The settings file path: `PTK_CONFIG` if set, otherwise
    /// `~/.config/promotrack/settings.yaml`.
    pub fn resolve_path() -> PathBuf {
        if let Ok(path) = std::env::var("PTK_CONFIG") {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home)
            .join(".config")
            .join("promotrack")
            .join("settings.yaml")
    }
}


// ---------------------------------------------------------------------------
// Settings errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    Io(PathBuf, std::io::Error),
    /// The settings file is not valid YAML for [`Settings`].
    Parse(serde_yaml::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(path, e) => {
                write!(f, "cannot read {}: {}", path.display(), e)
            }
            SettingsError::Parse(e) => write!(f, "invalid settings file: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
