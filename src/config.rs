//! # User Settings
//!
//! Optional settings for the `nuvers` binary, read from a YAML file:
//!
//! ```yaml
//! # Project file used when `-project` is not given
//! project-path: src/App/App.csproj
//! ```
//!
//! The file is `$NUVERS_CONFIG` when set, otherwise `nuvers/config.yaml` in
//! the platform configuration directory (see [`crate::defaults`]). A missing
//! file is not an error. `NUVERS_PROJECT_PATH` overrides `project-path`.
//!
//! Settings only feed the shipped commands; the parser never reads them.

use std::env;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "NUVERS_CONFIG";

/// Environment variable overriding `project-path`.
pub const PROJECT_PATH_ENV: &str = "NUVERS_PROJECT_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Project file used by `version` when `-project` is not given.
    pub project_path: Option<PathBuf>,
}

impl Settings {
    fn apply_env(&mut self) {
        if let Some(path) = env::var_os(PROJECT_PATH_ENV).filter(|value| !value.is_empty()) {
            debug!("Using project path from {}", PROJECT_PATH_ENV);
            self.project_path = Some(PathBuf::from(path));
        }
    }
}

/// Parses settings from YAML. Empty or comment-only input gives the defaults.
pub fn parse(yaml_content: &str) -> Result<Settings> {
    let has_content = yaml_content
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#'));
    if !has_content {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(yaml_content).map_err(Error::Yaml)
}

/// Parses the settings file at `path`.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    parse(&content).map_err(|e| Error::Settings {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// The settings file location, if one can be determined.
pub fn config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(defaults::default_config_path)
}

/// Loads the settings file (if present) and applies environment overrides.
pub fn load() -> Result<Settings> {
    let mut settings = match config_path() {
        Some(path) if path.is_file() => {
            debug!("Loading settings from {}", path.display());
            from_file(&path)?
        }
        _ => Settings::default(),
    };
    settings.apply_env();
    Ok(settings)
}
