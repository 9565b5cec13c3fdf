//! Configuration file management.
//!
//! Handles reading and validating `fnsamples.toml`:
//!
//! ```toml
//! blob_root = ".blobs"
//!
//! [settings]
//! ExampleSecret = "1234"
//! Schedule = "0 */5 * * * *"
//! BlobOutpath = "test-slot-blobcontainer"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::settings::{Layered, MapSettings, ProcessEnv};
use crate::error::{ConfigError, Result};

/// Local host configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory standing in for blob storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_root: Option<PathBuf>,
    /// App settings. These take precedence over the process environment.
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

impl Config {
    /// Default path of the configuration file in the current directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration from `path`.
    ///
    /// A missing file yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&contents)?;

        debug!(settings = config.settings.len(), "config loaded");
        Ok(config)
    }

    /// Parse and validate configuration text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::InvalidSettingName`.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration contents
    ///
    /// Setting names must be usable inside a `%Name%` placeholder.
    fn validate(&self) -> Result<()> {
        for name in self.settings.keys() {
            if name.is_empty() || name.contains('%') {
                return Err(ConfigError::InvalidSettingName(name.clone()).into());
            }
        }
        Ok(())
    }

    /// Blob root, falling back to `.blobs`.
    pub fn blob_root(&self) -> PathBuf {
        self.blob_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_BLOB_ROOT))
    }

    /// App settings from this file layered over the process environment.
    pub fn app_settings(&self) -> Layered<MapSettings, ProcessEnv> {
        Layered::new(MapSettings::from(self.settings.clone()), ProcessEnv)
    }
}
