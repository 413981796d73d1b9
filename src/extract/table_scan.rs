//! Table scan — the first numeric token in a row naming the candidate.

use regex::Regex;

use super::normalize::NUMBER_TOKEN;

/// Scan row strings in document order for one matching `name`.
///
/// A matching row yields its first numeric token, wherever in the row
/// it sits — share and precincts figures included. A matching row with
/// no numeric token at all does not end the scan; a later row may
/// still carry the count.
pub fn first_token_in_rows<'r>(rows: &'r [String], name: &Regex) -> Option<&'r str> {
    rows.iter().find_map(|row| {
        if name.is_match(row) {
            NUMBER_TOKEN.find(row).map(|m| m.as_str())
        } else {
            None
        }
    })
}
