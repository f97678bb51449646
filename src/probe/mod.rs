//! Platform probes for discovering MAC addresses.
//!
//! This module provides types and traits for:
//! - Running external diagnostic tools ([`CommandRunner`], [`SystemRunner`])
//! - Extracting candidates from tool output ([`extract`])
//! - Individual probing strategies ([`Probe`] and its implementations)
//! - Direct system-call reads ([`sys`])
//!
//! Probes never normalize; they hand raw text back to the resolver.

mod error;
mod extract;
mod runner;
pub mod sys;
mod unix;
mod windows;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::{ExecError, ProbeError};
pub use extract::{COLON_MAC, HYPHEN_MAC, extract};
pub use runner::{CommandRunner, SystemRunner, resolve_executable};
pub use unix::{
    ArpCommandProbe, ArpTableProbe, IfconfigProbe, IpLinkProbe, IpNeighborProbe, LanscanProbe,
    NetstatProbe, SocketIoctlProbe, default_interface,
};
pub use self::windows::{IpconfigProbe, SendArpProbe};

use regex::Regex;

/// A single strategy for obtaining a raw MAC address candidate.
///
/// `target` is an interface name or an IP address in text form, depending
/// on which probe list the resolver picked.
///
/// # Contract
///
/// - `Ok(Some(raw))`: the probe found a candidate (not yet normalized)
/// - `Ok(None)`: the probe ran but found nothing
/// - `Err(_)`: the probe could not run; the resolver moves on
///
/// Probes hold no state between calls.
pub trait Probe: Send + Sync {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Attempts to find a raw MAC address candidate for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when the underlying tool or system call fails.
    fn probe(&self, target: &str, runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError>;
}

/// Runs `command` and extracts capture group `group` of `pattern` from its output.
fn search(
    runner: &dyn CommandRunner,
    command: &str,
    args: &str,
    pattern: &Regex,
    group: usize,
) -> Result<Option<String>, ProbeError> {
    let output = runner.run(command, args)?;
    Ok(extract(pattern, &output, group))
}
