//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// getmac: MAC address lookup
///
/// Prints the MAC address of a local network interface, or of a remote
/// host on the local link, using whatever tools the platform provides.
#[derive(Debug, Parser)]
#[command(name = "getmac")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// What to look up (default: the interface carrying the default route)
    #[command(flatten)]
    pub target: TargetArgs,

    /// Do not ping remote hosts before reading the neighbor table
    #[arg(long = "no-network-request")]
    pub no_network_request: bool,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Mutually exclusive lookup targets.
#[derive(Debug, Default, Args)]
#[group(multiple = false)]
pub struct TargetArgs {
    /// Name of a local network interface
    #[arg(long, short)]
    pub interface: Option<String>,

    /// IPv4 address of a remote host
    #[arg(long)]
    pub ip: Option<Ipv4Addr>,

    /// IPv6 address of a remote host
    #[arg(long)]
    pub ip6: Option<Ipv6Addr>,

    /// Hostname of a remote host
    #[arg(long)]
    pub hostname: Option<String>,
}

/// Subcommands for getmac
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "getmac.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error on failure.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid or conflicting arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
