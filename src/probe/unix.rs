//! Probes for Unix-like hosts (Linux, BSD, macOS, HP-UX).
//!
//! Interface probes take an interface name; neighbor probes take an IPv4
//! address in dotted-decimal form.

use super::{COLON_MAC, CommandRunner, Probe, ProbeError, extract, search, sys};
use crate::address::MacAddress;
use regex::Regex;

/// Flag sets tried in order; Linux accepts none or `-a`, Tru64 wants `-av`.
const IFCONFIG_ARGS: &[&str] = &["", "-a", "-av", "-v"];

/// Matches from the start of an interface block (`name:` or `name  `)
/// through its indented continuation lines.
fn interface_block(interface: &str) -> String {
    format!(
        r"(?m)^{}[:\s](?:[^\n]*\n[ \t])*?[^\n]*?",
        regex::escape(interface)
    )
}

/// Reads the hardware address from `ifconfig` output.
///
/// Handles the legacy `HWaddr` line as well as the `ether` continuation
/// line printed by modern net-tools and BSD-derived systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct IfconfigProbe;

impl Probe for IfconfigProbe {
    fn name(&self) -> &'static str {
        "ifconfig"
    }

    fn probe(&self, target: &str, runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError> {
        let pattern = Regex::new(&format!(
            r"{}(?i:HWaddr|ether)[ \t]+({COLON_MAC})",
            interface_block(target)
        ))?;

        let mut last_error = None;
        let mut any_ran = false;
        for args in IFCONFIG_ARGS {
            match search(runner, "ifconfig", args, &pattern, 0) {
                Ok(Some(mac)) => return Ok(Some(mac)),
                Ok(None) => any_ran = true,
                Err(e) => {
                    tracing::trace!(args, error = %e, "ifconfig invocation failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if !any_ran => Err(e),
            _ => Ok(None),
        }
    }
}

/// Reads the `link/ether` line following the interface header in `ip link`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpLinkProbe;

impl Probe for IpLinkProbe {
    fn name(&self) -> &'static str {
        "ip-link"
    }

    fn probe(&self, target: &str, runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError> {
        let pattern = Regex::new(&format!(
            r"(?m)^\d+:\s+{}[:@][^\n]*\n[^\n]*link/ether\s+({COLON_MAC})",
            regex::escape(target)
        ))?;
        search(runner, "ip", "link", &pattern, 0)
    }
}

/// Reads the hardware address from the interface table of `netstat -iae`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetstatProbe;

impl Probe for NetstatProbe {
    fn name(&self) -> &'static str {
        "netstat"
    }

    fn probe(&self, target: &str, runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError> {
        let pattern = Regex::new(&format!(
            r"{}((?i:HWaddr|ether))[ \t]+({COLON_MAC})",
            interface_block(target)
        ))?;
        search(runner, "netstat", "-iae", &pattern, 1)
    }
}

/// Reads the hardware address with a `SIOCGIFHWADDR` request on a datagram socket.
///
/// Ignores the command runner. Only available on Linux.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocketIoctlProbe;

impl Probe for SocketIoctlProbe {
    fn name(&self) -> &'static str {
        "socket-ioctl"
    }

    fn probe(&self, target: &str, _runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError> {
        let octets = sys::interface_hardware_address(target)?;
        Ok(Some(MacAddress::new(octets).to_string()))
    }
}

/// Reads the station address from HP-UX `lanscan -ai`.
///
/// Each line lists the hardware address first, followed by the interface
/// names it belongs to.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanscanProbe;

impl Probe for LanscanProbe {
    fn name(&self) -> &'static str {
        "lanscan"
    }

    fn probe(&self, target: &str, runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError> {
        let output = runner.run("lanscan", "-ai")?;
        Ok(parse_lanscan(&output, target))
    }
}

/// Finds the first line mentioning `interface` and decodes its leading hex word.
fn parse_lanscan(output: &str, interface: &str) -> Option<String> {
    let interface = interface.to_lowercase();

    output.lines().find_map(|line| {
        let line = line.to_lowercase();
        let words: Vec<&str> = line.split_whitespace().collect();
        if !words.contains(&interface.as_str()) {
            return None;
        }

        let word = words.first()?;
        let hex = word.strip_prefix("0x").unwrap_or(word).replace(':', "");
        let value = u64::from_str_radix(&hex, 16).ok()?;

        // A 48-bit address, and zero means the card reported nothing.
        (value != 0 && value >> 48 == 0).then(|| format!("{value:012x}"))
    })
}

/// Looks the IPv4 address up in the output of `arp -an`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArpCommandProbe;

impl Probe for ArpCommandProbe {
    fn name(&self) -> &'static str {
        "arp"
    }

    fn probe(&self, target: &str, runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError> {
        let pattern = Regex::new(&format!(
            r"\({}\)\s+at\s+({COLON_MAC})",
            regex::escape(target)
        ))?;
        search(runner, "arp", "-an", &pattern, 0)
    }
}

/// Looks the IPv4 address up in the kernel ARP table at `/proc/net/arp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArpTableProbe;

impl Probe for ArpTableProbe {
    fn name(&self) -> &'static str {
        "proc-net-arp"
    }

    fn probe(&self, target: &str, runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError> {
        let pattern = Regex::new(&format!(
            r"(?m)^{}\s[^\n]*?({COLON_MAC})",
            regex::escape(target)
        ))?;
        search(runner, "cat", "/proc/net/arp", &pattern, 0)
    }
}

/// Placeholder for an `ip neighbor` lookup. Always finds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpNeighborProbe;

impl Probe for IpNeighborProbe {
    fn name(&self) -> &'static str {
        "ip-neighbor"
    }

    fn probe(&self, _target: &str, _runner: &dyn CommandRunner) -> Result<Option<String>, ProbeError> {
        Ok(None)
    }
}

/// Returns the interface carrying the default route, per `ip route get 0.0.0.0`.
///
/// Returns `None` if the command is unavailable or prints no `dev` clause.
pub fn default_interface(runner: &dyn CommandRunner) -> Option<String> {
    let output = match runner.run("ip", "route get 0.0.0.0") {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(error = %e, "Default route lookup failed");
            return None;
        }
    };

    let pattern = Regex::new(r"\bdev\s+(\S+)").ok()?;
    extract(&pattern, &output, 0)
}
