//! Capture-group extraction from tool output.

use regex::Regex;

/// Returns capture group `group_index` (0-based over capture groups) of the
/// first match of `pattern` in `text`.
///
/// Returns `None` if the pattern does not match or the group did not take
/// part in the match.
#[must_use]
pub fn extract(pattern: &Regex, text: &str, group_index: usize) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(group_index + 1))
        .map(|m| m.as_str().to_string())
}

/// Pattern fragment matching a colon-separated MAC address (any case).
pub const COLON_MAC: &str = "[0-9a-fA-F]{2}(?::[0-9a-fA-F]{2}){5}";

/// Pattern fragment matching a hyphen-separated MAC address (any case).
pub const HYPHEN_MAC: &str = "[0-9a-fA-F]{2}(?:-[0-9a-fA-F]{2}){5}";
