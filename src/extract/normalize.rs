//! Token and text normalization shared by both scan strategies.

use regex::Regex;
use std::sync::LazyLock;

/// A numeric token: a digit followed by any run of digits and comma
/// separators. `"12,345"` is one token, never two.
pub static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9][0-9,]*").unwrap());

/// Normalize a raw numeric token into a vote count.
///
/// Surrounding whitespace and comma/space separators are dropped;
/// anything that still fails to parse as an unsigned integer — the
/// empty string, stray letters, a value past `u64::MAX` — is no value.
pub fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().replace([',', ' '], "").parse().ok()
}

/// Collapse whitespace runs (including non-breaking spaces left by
/// entity decoding) into single spaces and trim the ends.
pub fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
