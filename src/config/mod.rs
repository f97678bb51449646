//! Configuration layer for getmac.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - `--config`, else `<config_dir>/getmac/getmac.toml` if present
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The lookup target (`--interface`, `--ip`, `--ip6`, `--hostname`) is CLI-only;
//! at most one may be given. The config file only supplies `default_interface`,
//! used when none is.
//!
//! # Boolean Flag Semantics
//!
//! `--no-network-request` and `--json` only ever switch behavior on:
//! - `--no-network-request` disables priming even if the file enables it.
//! - `--json` selects JSON even if the file says `format = "text"`.
//! - Without the flags, the file decides.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, TargetArgs};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{OutputFormat, ValidatedConfig, write_default_config};
