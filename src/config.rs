use crate::error::{NextVersionError, Result};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "nextversion.toml";

/// File looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".nextversion.toml";

/// Represents the complete configuration for next-version.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_bootstrap_version() -> String {
    "0.2.0".to_string()
}

/// How release tags are named
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_tag_pattern(),
        }
    }
}

/// First version produced when no release tag exists yet.
///
/// `version` is the base of the first alpha: "0.2.0" yields "0.2.0-alpha.1".
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BootstrapConfig {
    #[serde(default = "default_bootstrap_version")]
    pub version: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        BootstrapConfig {
            version: default_bootstrap_version(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextversion.toml` in current directory
/// 3. `.nextversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return load_config_file(Path::new(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return load_config_file(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(USER_CONFIG_FILE);
        if user_config.exists() {
            return load_config_file(&user_config);
        }
    }

    log::debug!("No configuration file found, using defaults");
    Ok(Config::default())
}

fn load_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        NextVersionError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str).map_err(|e| {
        NextVersionError::config(format!("Invalid configuration '{}': {}", path.display(), e))
    })?;

    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
