//! Default values for configuration options.

use std::path::PathBuf;

/// Ping remote hosts before reading the neighbor table.
pub const NETWORK_REQUEST: bool = true;

/// Name of the configuration file, both for `init` and the user config directory.
pub const CONFIG_FILE_NAME: &str = "getmac.toml";

/// Directory under the user config directory holding [`CONFIG_FILE_NAME`].
pub const CONFIG_DIR_NAME: &str = "getmac";

/// Returns `<config_dir>/getmac/getmac.toml`, or `None` if the platform has no config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
