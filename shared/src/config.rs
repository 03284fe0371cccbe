//! Settings persistence
//!
//! Stores the picker's display settings as a TOML file under the platform
//! configuration directory.

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "picker.toml";

/// Error type for settings operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to determine the platform config directory
    NoConfigDir,
    /// IO error while reading/writing the settings file
    Io(io::Error),
    /// Failed to parse the settings file
    Parse(toml::de::Error),
    /// Failed to serialize settings
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

/// Path of the picker settings file.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "range-dial", "range-dial")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// Load persisted settings.
///
/// Returns `None` when no settings file has been written yet. Returns an
/// error if the file exists but can't be parsed.
pub fn load_config<T: DeserializeOwned>() -> Result<Option<T>, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let config: T = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Save settings, creating the config directory if needed.
pub fn save_config<T: Serialize>(config: &T) -> Result<(), ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(&path, contents)?;
    Ok(())
}
