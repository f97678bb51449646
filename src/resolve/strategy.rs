//! Ordered probe lists and network priming commands.
//!
//! Earlier probes in a list are preferred: they are more widely available
//! or cheaper. The first probe to produce a candidate wins.

use std::net::IpAddr;

use super::Platform;
use crate::probe::{
    ArpCommandProbe, ArpTableProbe, IfconfigProbe, IpLinkProbe, IpNeighborProbe, IpconfigProbe,
    LanscanProbe, NetstatProbe, Probe, SendArpProbe, SocketIoctlProbe,
};

/// Interface used on Unix-like hosts when the default route cannot be found.
pub const UNIX_FALLBACK_INTERFACE: &str = "eth0";

/// Interface used on Windows when no interface is given.
pub const WINDOWS_DEFAULT_INTERFACE: &str = "Ethernet 1";

/// The kind of target a probe list is chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A local interface name.
    Interface,
    /// A remote IPv4 neighbor.
    Ipv4,
    /// A remote IPv6 neighbor.
    Ipv6,
}

static WINDOWS_INTERFACE: &[&dyn Probe] = &[&IpconfigProbe];

static UNIX_INTERFACE: &[&dyn Probe] = &[
    &IfconfigProbe,
    &IpLinkProbe,
    &NetstatProbe,
    &SocketIoctlProbe,
    &LanscanProbe,
];

static WINDOWS_IPV4: &[&dyn Probe] = &[&SendArpProbe];

static UNIX_IPV4: &[&dyn Probe] = &[&ArpCommandProbe, &ArpTableProbe, &IpNeighborProbe];

// No IPv6 neighbor probes exist yet on either platform.
static IPV6: &[&dyn Probe] = &[];

/// Returns the probes to try, in order, for `kind` on `platform`.
#[must_use]
pub fn probes_for(platform: Platform, kind: TargetKind) -> &'static [&'static dyn Probe] {
    match (platform, kind) {
        (Platform::Windows, TargetKind::Interface) => WINDOWS_INTERFACE,
        (Platform::Unix, TargetKind::Interface) => UNIX_INTERFACE,
        (Platform::Windows, TargetKind::Ipv4) => WINDOWS_IPV4,
        (Platform::Unix, TargetKind::Ipv4) => UNIX_IPV4,
        (_, TargetKind::Ipv6) => IPV6,
    }
}

/// Returns the single-packet ping used to populate the neighbor table for `ip`.
#[must_use]
pub fn priming_command(platform: Platform, ip: IpAddr) -> (&'static str, String) {
    match (platform, ip) {
        (Platform::Windows, ip) => ("ping", format!("-n 1 {ip}")),
        (Platform::Unix, IpAddr::V4(ip)) => ("ping", format!("-c 1 {ip}")),
        (Platform::Unix, IpAddr::V6(ip)) => ("ping6", format!("-c 1 {ip}")),
    }
}
