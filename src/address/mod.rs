//! Canonical MAC address representation and normalization.
//!
//! Every probe produces raw text scraped from tool output. This module
//! turns that text into a [`MacAddress`] or rejects it:
//!
//! - [`normalize`] canonicalizes separators, case and whitespace
//! - [`MacAddress`] only ever holds a well-formed six-octet address

mod mac;


pub use mac::{MacAddress, ParseMacError, normalize};
