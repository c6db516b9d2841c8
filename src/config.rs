use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::bump::{BumpOptions, BumpRequest, PromotionPolicy};
use crate::domain::BumpKind;
use crate::error::ConfigError;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "semver-bump.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".semver-bump.toml";

/// Represents the complete configuration for semver-bump.
///
/// Every value can be overridden from the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Default bump request used when no flag is given.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub kind: BumpKind,

    #[serde(default)]
    pub prerelease: bool,
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub promotion: PromotionPolicy,
}

impl Config {
    /// Merge command-line overrides over the configured defaults.
    ///
    /// The prerelease flag can only switch prerelease mode on.
    pub fn bump_options(
        &self,
        kind: Option<BumpKind>,
        prerelease: bool,
        promotion: Option<PromotionPolicy>,
    ) -> BumpOptions {
        BumpOptions {
            request: BumpRequest::new(
                kind.unwrap_or(self.defaults.kind),
                prerelease || self.defaults.prerelease,
            ),
            promotion: promotion.unwrap_or(self.behavior.promotion),
        }
    }
}

/// Finds the configuration file to load.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `semver-bump.toml` in current directory
/// 3. `.semver-bump.toml` in user config directory
pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists (or was given explicitly) but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, ConfigError> {
    match resolve_config_path(config_path) {
        Some(path) => load_config_file(&path),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = toml::from_str(&config_str).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");

    Ok(config)
}
