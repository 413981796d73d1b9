//! Text scan — bounded proximity between the candidate name and a count.
//!
//! Last-resort strategy for pages that render results as prose rather
//! than tables. The window is 80 characters: wide enough to absorb
//! leftover markup noise, narrow enough to keep unrelated numbers from
//! elsewhere on the page out of reach.

use regex::Regex;

/// Characters allowed between the name and the numeric token.
const WINDOW: usize = 80;

/// Find a numeric token near `name` in the flattened page text.
///
/// Name-then-number is tried first; the mirrored direction only when
/// that fails. The lazy gap keeps the nearest token, so `"Jane Doe got
/// 12 of 999"` yields `"12"`.
pub fn nearby_token<'t>(text: &'t str, name: &str) -> Option<&'t str> {
    let escaped = regex::escape(name);

    let after = Regex::new(&format!(r"(?i){escaped}.{{0,{WINDOW}}}?([0-9][0-9,]*)")).ok()?;
    if let Some(caps) = after.captures(text) {
        return caps.get(1).map(|m| m.as_str());
    }

    let before = Regex::new(&format!(r"(?i)([0-9][0-9,]*).{{0,{WINDOW}}}?{escaped}")).ok()?;
    before
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_then_number() {
        assert_eq!(
            nearby_token("Jane Doe received 4,567 votes", "Jane Doe"),
            Some("4,567")
        );
    }

    #[test]
    fn test_number_then_name() {
        assert_eq!(
            nearby_token("4,567 votes went to Jane Doe", "Jane Doe"),
            Some("4,567")
        );
    }

    #[test]
    fn test_forward_direction_preferred() {
        assert_eq!(
            nearby_token("100 points. Jane Doe has 42", "Jane Doe"),
            Some("42")
        );
    }

    #[test]
    fn test_nearest_token_wins() {
        assert_eq!(
            nearby_token("Jane Doe got 12 of 999 precincts", "Jane Doe"),
            Some("12")
        );
    }

    #[test]
    fn test_window_is_bounded() {
        let filler = "x".repeat(WINDOW + 20);
        let text = format!("Jane Doe {filler} 4,567");
        assert_eq!(nearby_token(&text, "Jane Doe"), None);
    }

    #[test]
    fn test_number_just_inside_the_window() {
        // 70 filler characters plus two spaces stay under the limit.
        let filler = "x".repeat(70);
        let text = format!("Jane Doe {filler} 4,567");
        assert_eq!(nearby_token(&text, "Jane Doe"), Some("4,567"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(nearby_token("JANE DOE: 7 votes", "jane doe"), Some("7"));
    }

    #[test]
    fn test_no_number_anywhere() {
        assert_eq!(nearby_token("Jane Doe leads the field", "Jane Doe"), None);
    }
}
