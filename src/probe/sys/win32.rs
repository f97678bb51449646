//! Windows neighbor hardware address lookup using `SendARP`.

use std::net::Ipv4Addr;

use windows::Win32::Foundation::{NO_ERROR, WIN32_ERROR};
use windows::Win32::NetworkManagement::IpHelper::SendARP;

use crate::probe::ProbeError;

/// `SendARP` writes into an array of two ULONGs.
const MAC_BUFFER_LEN: u32 = 8;

/// Resolves the hardware address of `ip` with an ARP request issued by the OS.
///
/// The call blocks until the neighbor answers or the OS gives up.
///
/// # Errors
///
/// Returns [`ProbeError::WindowsApi`] if `SendARP` fails, and
/// [`ProbeError::Platform`] if it reports a short address.
pub fn send_arp(ip: Ipv4Addr) -> Result<[u8; 6], ProbeError> {
    // IPAddr is the address in network byte order, read as a native u32.
    let dest = u32::from_ne_bytes(ip.octets());
    let mut buffer = [0u8; MAC_BUFFER_LEN as usize];
    let mut len = MAC_BUFFER_LEN;

    // SAFETY: `buffer` is valid for `len` bytes and both outlive the call.
    let result = unsafe { SendARP(dest, 0, buffer.as_mut_ptr().cast(), &raw mut len) };

    if result != NO_ERROR.0 {
        return Err(windows::core::Error::from_hresult(WIN32_ERROR(result).to_hresult()).into());
    }

    if len < 6 {
        return Err(ProbeError::Platform {
            message: format!("SendARP returned a {len}-byte address for {ip}"),
        });
    }

    let mut octets = [0u8; 6];
    octets.copy_from_slice(&buffer[..6]);
    Ok(octets)
}
