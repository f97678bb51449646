//! Resolution strategy engine.
//!
//! This module provides:
//! - Target selection ([`Selector`], [`MacQuery`])
//! - Host platform detection ([`Platform`])
//! - Ordered probe lists per platform and target kind ([`strategy`])
//! - The engine itself ([`Resolver`]) and the one-call entry point
//!   [`get_mac_address`]
//!
//! # Failure Model
//!
//! Probe failures never escape: the engine logs them and moves to the next
//! probe. Only failures that are not "nothing was found" surface as
//! [`ResolveError`], and only through [`Resolver::try_resolve`].

mod error;
mod platform;
mod resolver;
mod selector;
pub mod strategy;

#[cfg(test)]
mod selector_tests;

pub use error::ResolveError;
pub use platform::Platform;
pub use resolver::{HostLookup, Resolver, system_lookup};
pub use selector::{MacQuery, Selector};

use crate::address::MacAddress;

/// Resolves the MAC address described by `query` on this host.
///
/// Uses the system command runner and the current platform. Never fails:
/// conflicting selectors, hostname lookup failures and unsupported IPv6
/// are logged as warnings and reported as `None`.
///
/// # Examples
///
/// ```no_run
/// use getmac::{MacQuery, get_mac_address};
///
/// let mac = get_mac_address(&MacQuery::for_interface("eth0"));
/// let gateway = get_mac_address(&MacQuery::for_ip("192.168.0.1".parse().unwrap()));
/// let quiet = get_mac_address(&MacQuery::for_hostname("router.lan").with_network_request(false));
/// # let _ = (mac, gateway, quiet);
/// ```
#[must_use]
pub fn get_mac_address(query: &MacQuery) -> Option<MacAddress> {
    let selector = match query.selector() {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid MAC address query");
            return None;
        }
    };

    Resolver::new()
        .with_network_request(query.network_request)
        .resolve(selector.as_ref())
}
