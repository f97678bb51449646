//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::resolve::Selector;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// How the result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The address alone on one line.
    #[default]
    Text,
    /// A `{"target", "mac_address"}` JSON object.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// The lookup target, or `None` for the default interface
    pub selector: Option<Selector>,

    /// Whether remote hosts are pinged before probing
    pub network_request: bool,

    /// Interface used when no target is given
    pub default_interface: Option<String>,

    /// Output format
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self
            .selector
            .as_ref()
            .map_or_else(|| "default interface".to_string(), ToString::to_string);
        let default_interface = self.default_interface.as_deref().unwrap_or("auto");

        write!(
            f,
            "Config {{ target: {target}, network_request: {}, default_interface: {default_interface}, format: {} }}",
            self.network_request, self.format,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An interface, hostname or default interface is empty
    /// - The output format is not `text` or `json`
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let selector = Self::resolve_selector(cli)?;

        // --no-network-request only ever disables
        let network_request = !cli.no_network_request
            && toml
                .and_then(|t| t.resolve.network_request)
                .unwrap_or(defaults::NETWORK_REQUEST);

        let default_interface = Self::resolve_default_interface(toml)?;

        let format = if cli.json {
            OutputFormat::Json
        } else {
            Self::resolve_format(toml)?
        };

        Ok(Self {
            selector,
            network_request,
            default_interface,
            format,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// Reads `cli.config` if set, otherwise the user config file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_fallback(cli, defaults::config_path().as_deref())
    }

    /// Like [`ValidatedConfig::load`], with an explicit fallback config path.
    ///
    /// The fallback is only read when `cli.config` is unset and the file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or the
    /// merged configuration is invalid.
    pub fn load_with_fallback(cli: &Cli, fallback: Option<&Path>) -> Result<Self, ConfigError> {
        let path: Option<PathBuf> = match (&cli.config, fallback) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(path)) if path.is_file() => Some(path.to_path_buf()),
            (None, _) => None,
        };

        let toml = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Some(TomlConfig::load(&path)?)
            }
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_selector(cli: &Cli) -> Result<Option<Selector>, ConfigError> {
        let target = &cli.target;

        if let Some(name) = &target.interface {
            return non_empty(name, field::INTERFACE).map(|n| Some(Selector::Interface(n)));
        }
        if let Some(ip) = target.ip {
            return Ok(Some(Selector::Ipv4(ip)));
        }
        if let Some(ip) = target.ip6 {
            return Ok(Some(Selector::Ipv6(ip)));
        }
        if let Some(name) = &target.hostname {
            return non_empty(name, field::HOSTNAME).map(|n| Some(Selector::Hostname(n)));
        }

        Ok(None)
    }

    fn resolve_default_interface(toml: Option<&TomlConfig>) -> Result<Option<String>, ConfigError> {
        toml.and_then(|t| t.resolve.default_interface.as_deref())
            .map(|name| non_empty(name, field::DEFAULT_INTERFACE))
            .transpose()
    }

    fn resolve_format(toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        toml.and_then(|t| t.output.format.as_deref())
            .map_or(Ok(OutputFormat::default()), parse_format)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn non_empty(value: &str, field: &'static str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::empty(field));
    }
    Ok(trimmed.to_string())
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
