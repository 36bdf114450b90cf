//! Default values for nuvers configuration.

use std::path::PathBuf;

/// File name of the settings file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Returns the default settings file location.
///
/// Uses the platform-appropriate configuration directory:
/// - Linux: `~/.config/nuvers/config.yaml` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/nuvers/config.yaml`
/// - Windows: `{FOLDERID_RoamingAppData}\nuvers\config.yaml`
///
/// Returns `None` when the platform directory cannot be determined.
/// Overridden by the `NUVERS_CONFIG` environment variable.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nuvers").join(CONFIG_FILE_NAME))
}
