//! The [`MacAddress`] type and the raw-candidate normalizer.

use std::fmt;
use std::str::FromStr;

use macaddr::MacAddr6;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Length of the canonical `aa:bb:cc:dd:ee:ff` form.
const CANONICAL_LEN: usize = 17;

/// Length of a bare hex address without separators.
const BARE_HEX_LEN: usize = 12;

/// A 48-bit IEEE 802 MAC address.
///
/// Displays in canonical form: six lowercase two-digit hex groups joined
/// by colons, always exactly 17 characters.
///
/// # Examples
///
/// ```
/// use getmac::MacAddress;
///
/// let mac: MacAddress = "AA-BB-CC-DD-EE-FF".parse().unwrap();
/// assert_eq!(mac.to_string(), "aa:bb:cc:dd:ee:ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress(MacAddr6);

impl MacAddress {
    /// Creates an address from its six octets.
    #[must_use]
    pub const fn new(octets: [u8; 6]) -> Self {
        let [a, b, c, d, e, f] = octets;
        Self(MacAddr6::new(a, b, c, d, e, f))
    }

    /// Returns the six octets of the address.
    #[must_use]
    pub fn octets(&self) -> [u8; 6] {
        self.0.into_array()
    }
}

impl From<MacAddr6> for MacAddress {
    fn from(mac: MacAddr6) -> Self {
        Self(mac)
    }
}

impl From<MacAddress> for MacAddr6 {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.octets();
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error returned when text cannot be normalized into a [`MacAddress`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed MAC address candidate '{candidate}'")]
pub struct ParseMacError {
    /// The text that was rejected.
    pub candidate: String,
}

impl FromStr for MacAddress {
    type Err = ParseMacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s).ok_or_else(|| ParseMacError {
            candidate: s.to_string(),
        })
    }
}

/// Normalizes a raw candidate scraped from tool output.
///
/// Steps, in order:
/// 1. lowercase
/// 2. trim surrounding whitespace
/// 3. replace `-` with `:`
/// 4. remove embedded spaces
/// 5. if there are no colons and exactly 12 hex digits, insert a colon
///    after every second digit
/// 6. require the `xx:xx:xx:xx:xx:xx` shape, 17 characters total
///
/// Returns `None` for anything that does not survive step 6, so a
/// truncated or partially matched candidate never leaks out.
///
/// # Examples
///
/// ```
/// use getmac::normalize;
///
/// assert_eq!(normalize("aabbccddeeff").unwrap().to_string(), "aa:bb:cc:dd:ee:ff");
/// assert!(normalize("aa:bb:cc").is_none());
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<MacAddress> {
    let mut mac = raw.to_lowercase().trim().replace('-', ":").replace(' ', "");

    if !mac.contains(':') && mac.len() == BARE_HEX_LEN && is_hex(&mac) {
        mac = insert_colons(&mac);
    }

    if mac.len() != CANONICAL_LEN {
        return None;
    }

    parse_canonical(&mac)
}

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn insert_colons(hex: &str) -> String {
    let mut out = String::with_capacity(CANONICAL_LEN);
    for (i, c) in hex.chars().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(':');
        }
        out.push(c);
    }
    out
}

/// Parses an already lowercased, 17-character `xx:xx:xx:xx:xx:xx` string.
fn parse_canonical(mac: &str) -> Option<MacAddress> {
    let well_formed = mac.bytes().enumerate().all(|(i, b)| {
        if i % 3 == 2 {
            b == b':'
        } else {
            b.is_ascii_hexdigit()
        }
    });
    if !well_formed {
        return None;
    }

    MacAddr6::from_str(mac).ok().map(MacAddress)
}
