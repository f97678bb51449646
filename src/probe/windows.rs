//! Probes for Windows hosts.

use std::net::Ipv4Addr;

use regex::Regex;

use super::{CommandRunner, HYPHEN_MAC, Probe, ProbeError, search, sys};

/// Reads the `Physical Address` of an adapter from `ipconfig /all`.
///
/// The adapter is matched by its whole header line, `... adapter <name>:`,
/// so `Ethernet` never matches `vEthernet (WSL)` or `Ethernet 10`. The
/// address must appear within eight lines of the header and before the
/// next adapter's header.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpconfigProbe;

impl Probe for IpconfigProbe {
    fn name(&self) -> &'static str {
        "ipconfig"
    }

    fn probe(&self, target: &str, runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError> {
        // Detail lines are blank or indented; headers start in column 0.
        let pattern = Regex::new(&format!(
            r"(?m)adapter {}:\r?$(?:\n(?:\r|[ \t][^\n]*)?){{0,7}}?\n[ \t]+Physical Address[^\n]*?({HYPHEN_MAC})",
            regex::escape(target)
        ))?;
        search(runner, "ipconfig", "/all", &pattern, 0)
    }
}

/// Resolves a neighbor's address with the IP Helper `SendARP` call.
///
/// Ignores the command runner. The raw candidate is the six octets as bare
/// hex digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SendArpProbe;

impl Probe for SendArpProbe {
    fn name(&self) -> &'static str {
        "send-arp"
    }

    fn probe(&self, target: &str, _runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError> {
        let ip: Ipv4Addr = target.parse().map_err(|_| ProbeError::Platform {
            message: format!("'{target}' is not an IPv4 address"),
        })?;

        let octets = sys::send_arp(ip)?;
        Ok(Some(octets.iter().map(|b| format!("{b:02x}")).collect()))
    }
}
