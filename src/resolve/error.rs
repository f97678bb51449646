//! Error types for resolution.

use std::net::Ipv6Addr;

use thiserror::Error;

/// Error type for failures that are distinct from "no address found".
///
/// Not finding an address is `Ok(None)`, never an error.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// More than one of interface, IPv4, IPv6 and hostname was given.
    #[error("Only one of interface, ip, ip6 or hostname may be set ({count} were given)")]
    ConflictingSelectors {
        /// Number of selectors that were set
        count: usize,
    },

    /// The hostname could not be resolved.
    #[error("Failed to resolve hostname '{hostname}': {source}")]
    HostnameLookup {
        /// The hostname that failed to resolve
        hostname: String,
        /// Underlying resolver error
        #[source]
        source: std::io::Error,
    },

    /// The hostname resolved, but not to any IPv4 address.
    #[error("Hostname '{hostname}' has no IPv4 address")]
    NoIpv4Address {
        /// The hostname that was looked up
        hostname: String,
    },

    /// The host has no IPv6 support, so an IPv6 neighbor cannot be queried.
    #[error("Cannot get the MAC address of IPv6 host {address}: IPv6 is not supported on this system")]
    Ipv6Unsupported {
        /// The requested IPv6 address
        address: Ipv6Addr,
    },
}
