//! Direct system-call reads of hardware addresses.
//!
//! # Platform Support
//!
//! - **Linux**: `SIOCGIFHWADDR` ioctl on a datagram socket via `libc`.
//! - **Windows**: `SendARP` from the IP Helper API via the `windows` crate.
//! - Everywhere else the functions report [`ProbeError::Unsupported`].

use super::ProbeError;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(windows)]
mod win32;

#[cfg(target_os = "linux")]
pub use linux::interface_hardware_address;

#[cfg(windows)]
pub use win32::send_arp;

/// Reads the hardware address of a local interface.
///
/// # Errors
///
/// Always returns [`ProbeError::Unsupported`] on this platform.
#[cfg(not(target_os = "linux"))]
pub fn interface_hardware_address(_interface: &str) -> Result<[u8; 6], ProbeError> {
    Err(ProbeError::Unsupported {
        probe: "socket-ioctl",
    })
}

/// Asks the OS to resolve an IPv4 neighbor's hardware address.
///
/// # Errors
///
/// Always returns [`ProbeError::Unsupported`] on this platform.
#[cfg(not(windows))]
pub fn send_arp(_ip: std::net::Ipv4Addr) -> Result<[u8; 6], ProbeError> {
    Err(ProbeError::Unsupported { probe: "send-arp" })
}
