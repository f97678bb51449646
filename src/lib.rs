//! getmac: MAC address lookup
//!
//! A library for finding the MAC address of a local network interface,
//! or of a remote host on the local link, by running whatever tools the
//! platform provides and normalizing what they print.

pub mod address;
pub mod config;
pub mod probe;
pub mod resolve;

pub use address::{MacAddress, normalize};
pub use resolve::{MacQuery, Platform, ResolveError, Resolver, Selector, get_mac_address};
