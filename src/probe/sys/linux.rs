//! Linux interface hardware address lookup using `SIOCGIFHWADDR`.

use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

use crate::probe::ProbeError;

/// Reads the hardware address of `interface` with a `SIOCGIFHWADDR` request.
///
/// Names longer than `IFNAMSIZ - 1` bytes are truncated, matching what the
/// kernel would see from a C caller.
///
/// # Errors
///
/// Returns [`ProbeError::Io`] if the socket cannot be opened, the name
/// contains a NUL byte, or the kernel rejects the request (for example
/// because the interface does not exist).
#[allow(clippy::unnecessary_cast, clippy::cast_possible_wrap, clippy::cast_sign_loss)] // c_char is i8 or u8 by target
pub fn interface_hardware_address(interface: &str) -> Result<[u8; 6], ProbeError> {
    if interface.as_bytes().contains(&0) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "interface name contains a NUL byte",
        )
        .into());
    }

    // SAFETY: socket(2) has no memory-safety preconditions.
    let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM, 0) };
    if fd < 0 {
        return Err(io::Error::last_os_error().into());
    }
    // SAFETY: `fd` is a freshly opened descriptor owned by nobody else.
    let socket = unsafe { OwnedFd::from_raw_fd(fd) };

    // SAFETY: ifreq is a plain C struct for which all-zero bytes is valid.
    let mut request: libc::ifreq = unsafe { std::mem::zeroed() };
    let max_len = request.ifr_name.len() - 1;
    for (dst, &src) in request
        .ifr_name
        .iter_mut()
        .zip(interface.as_bytes().iter().take(max_len))
    {
        *dst = src as libc::c_char;
    }

    // SAFETY: `request` is a valid, NUL-terminated ifreq that outlives the call.
    let rc = unsafe { libc::ioctl(socket.as_raw_fd(), libc::SIOCGIFHWADDR as _, &raw mut request) };
    if rc < 0 {
        return Err(io::Error::last_os_error().into());
    }

    // SAFETY: a successful SIOCGIFHWADDR fills the hwaddr member of the union.
    let data = unsafe { request.ifr_ifru.ifru_hwaddr.sa_data };
    let mut octets = [0u8; 6];
    for (dst, &src) in octets.iter_mut().zip(data.iter()) {
        *dst = src as u8;
    }

    Ok(octets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_has_zero_hardware_address() {
        let octets = interface_hardware_address("lo").expect("lo should exist on Linux");
        assert_eq!(octets, [0; 6]);
    }

    #[test]
    fn unknown_interface_is_io_error() {
        let result = interface_hardware_address("getmac-nope0");
        assert!(matches!(result, Err(ProbeError::Io(_))));
    }

    #[test]
    fn nul_in_name_is_rejected() {
        let result = interface_hardware_address("eth\00");
        assert!(matches!(result, Err(ProbeError::Io(e)) if e.kind() == io::ErrorKind::InvalidInput));
    }
}
