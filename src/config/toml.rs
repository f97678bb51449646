//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Resolution configuration
    #[serde(default)]
    pub resolve: ResolveSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Resolution configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveSection {
    /// Ping remote hosts before reading the neighbor table
    pub network_request: Option<bool>,

    /// Interface used when no target is given
    pub default_interface: Option<String>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# getmac configuration file

[resolve]
# Ping remote hosts once before reading the ARP table (default: true).
# The --no-network-request flag turns this off regardless of this setting.
# network_request = true

# Interface used when no --interface, --ip, --ip6 or --hostname is given.
# Unset: the interface carrying the default route on Unix-like systems
# (falling back to "eth0"), or "Ethernet 1" on Windows.
# default_interface = "eth0"

[output]
# Output format: "text" prints the address alone, "json" prints
# {"target": ..., "mac_address": ...}. The --json flag forces JSON.
format = "text"
"#
    .to_string()
}
