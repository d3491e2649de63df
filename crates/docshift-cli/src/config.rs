//! Configuration settings
//!
//! Read from `docshift.toml`. Every field is optional:
//!
//! ```toml
//! [output]
//! dir = "/home/me/converted"
//!
//! [log]
//! level = "debug"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// File names searched in the current directory when no config is given
pub const CONFIG_FILE_NAMES: [&str; 2] = ["docshift.toml", ".docshift.toml"];

/// Top-level settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output settings
    pub output: OutputSettings,
    /// Logging settings
    pub log: LogSettings,
}

/// Where converted files go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output directory; the Downloads folder when unset
    pub dir: Option<PathBuf>,
}

/// Log filter used when `RUST_LOG` is not set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a config file or use defaults
    ///
    /// An explicit path must exist and parse. Without one, the current
    /// directory is searched with [`Settings::discover_in`].
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                Self::from_toml_str(&content)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))
            }
            None => Ok(Self::discover_in(Path::new("."))),
        }
    }

    /// First readable and valid file from [`CONFIG_FILE_NAMES`] in `dir`,
    /// or the defaults
    ///
    /// A candidate that exists but fails to parse is skipped with a warning.
    pub fn discover_in(dir: &Path) -> Self {
        for candidate in CONFIG_FILE_NAMES {
            let path = dir.join(candidate);
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            match Self::from_toml_str(&content) {
                Ok(settings) => {
                    debug!(path = %path.display(), "loaded config");
                    return settings;
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "ignoring invalid config");
                }
            }
        }
        Self::default()
    }

    /// Pick the output directory: an explicit one, then the configured one,
    /// then [`default_output_dir`]
    pub fn output_dir(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.output.dir.clone())
            .unwrap_or_else(default_output_dir)
    }
}

/// The user's Downloads folder, falling back to `~/Downloads` and then the
/// current directory
pub fn default_output_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}
