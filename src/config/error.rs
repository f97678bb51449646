//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A name option was given but empty.
    #[error("Invalid value for {field}: must not be empty")]
    EmptyValue {
        /// Name of the field
        field: &'static str,
    },

    /// Unknown output format in the config file.
    #[error("Invalid output format '{value}': expected text or json")]
    InvalidFormat {
        /// The invalid value provided
        value: String,
    },
}

/// Well-known field names for `EmptyValue` errors.
pub mod field {
    /// The `--interface` option.
    pub const INTERFACE: &str = "interface";
    /// The `--hostname` option.
    pub const HOSTNAME: &str = "hostname";
    /// The `resolve.default_interface` setting.
    pub const DEFAULT_INTERFACE: &str = "default_interface";
}

impl ConfigError {
    /// Creates an `EmptyValue` error for a field.
    #[must_use]
    pub const fn empty(field: &'static str) -> Self {
        Self::EmptyValue { field }
    }
}
