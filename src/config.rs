use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::DEFAULT_BUILD_NUMBER;
use crate::error::{Error, Result};

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "pubspec-bump.toml";

/// Represents the complete configuration for pubspec-bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// Returns the default manifest path, relative to the working directory.
fn default_manifest_path() -> String {
    "pubspec.yaml".to_string()
}

fn default_build_number() -> u64 {
    DEFAULT_BUILD_NUMBER
}

/// Target file settings.
///
/// `build_number` is the suffix written after the new version; it is reset to
/// this value on every run, never incremented.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: String,

    #[serde(default = "default_build_number")]
    pub build_number: u64,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            path: default_manifest_path(),
            build_number: default_build_number(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pubspec-bump.toml` in current directory
/// 3. `.pubspec-bump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let path: PathBuf = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    load_config_file(&path)
}

/// Reads and parses one configuration file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;

    toml::from_str(&config_str)
        .map_err(|e| Error::config(format!("cannot parse {}: {}", path.display(), e)))
}
