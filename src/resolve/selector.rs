//! What to resolve: a local interface or a remote host.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use super::ResolveError;

/// The target of a single resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A local network interface, e.g. `eth0`, `en0` or `Ethernet 3`.
    Interface(String),
    /// A remote host on the local link, by IPv4 address.
    Ipv4(Ipv4Addr),
    /// A remote host on the local link, by IPv6 address.
    Ipv6(Ipv6Addr),
    /// A remote host by DNS name; resolved to IPv4 before probing.
    Hostname(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interface(name) => write!(f, "interface {name}"),
            Self::Ipv4(ip) => write!(f, "ip {ip}"),
            Self::Ipv6(ip) => write!(f, "ip6 {ip}"),
            Self::Hostname(name) => write!(f, "hostname {name}"),
        }
    }
}

/// Query arguments in the shape of [`get_mac_address`](super::get_mac_address).
///
/// At most one of `interface`, `ip`, `ip6` and `hostname` may be set.
/// With none set, the default interface is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacQuery {
    /// Name of a local network interface.
    pub interface: Option<String>,
    /// IPv4 address of a remote host.
    pub ip: Option<Ipv4Addr>,
    /// IPv6 address of a remote host.
    pub ip6: Option<Ipv6Addr>,
    /// DNS hostname of a remote host.
    pub hostname: Option<String>,
    /// Ping remote hosts first to populate the ARP/NDP table.
    pub network_request: bool,
}

impl Default for MacQuery {
    fn default() -> Self {
        Self {
            interface: None,
            ip: None,
            ip6: None,
            hostname: None,
            network_request: true,
        }
    }
}

impl MacQuery {
    /// Creates a query for the default interface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query for a local interface.
    #[must_use]
    pub fn for_interface(name: impl Into<String>) -> Self {
        Self {
            interface: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a query for a remote IPv4 host.
    #[must_use]
    pub fn for_ip(ip: Ipv4Addr) -> Self {
        Self {
            ip: Some(ip),
            ..Self::default()
        }
    }

    /// Creates a query for a remote IPv6 host.
    #[must_use]
    pub fn for_ip6(ip6: Ipv6Addr) -> Self {
        Self {
            ip6: Some(ip6),
            ..Self::default()
        }
    }

    /// Creates a query for a remote host by name.
    #[must_use]
    pub fn for_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: Some(hostname.into()),
            ..Self::default()
        }
    }

    /// Sets whether remote hosts are pinged before the neighbor table is read.
    #[must_use]
    pub const fn with_network_request(mut self, enabled: bool) -> Self {
        self.network_request = enabled;
        self
    }

    /// Returns the single selector this query names, or `None` for the default interface.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ConflictingSelectors`] if more than one is set.
    pub fn selector(&self) -> Result<Option<Selector>, ResolveError> {
        let mut selectors = [
            self.interface.clone().map(Selector::Interface),
            self.ip.map(Selector::Ipv4),
            self.ip6.map(Selector::Ipv6),
            self.hostname.clone().map(Selector::Hostname),
        ]
        .into_iter()
        .flatten();

        let first = selectors.next();
        let extra = selectors.count();
        if extra > 0 {
            return Err(ResolveError::ConflictingSelectors { count: extra + 1 });
        }

        Ok(first)
    }
}
