//! Vote-count extraction from election results HTML.
//!
//! Two lookup strategies are tried in order for every candidate:
//!
//! 1. **Table scan** — walk the rows of every `<table>` in document
//!    order, cells joined with `" | "`; the first row matching the
//!    candidate name yields its first numeric token.
//! 2. **Text scan** — fall back to the page flattened into one text
//!    blob, looking for a numeric token within 80 characters of the
//!    name, on either side.
//!
//! Extracted values are heuristic. The first numeric token wins even
//! when a percentage or precincts-reporting figure sits closer to the
//! name than the vote total, and a row naming several candidates gives
//! all of them the same token. Callers that hit an ambiguous page
//! should put more distinguishing text into the candidate string.

pub mod normalize;
pub mod table_scan;
pub mod tally;
pub mod text_scan;

#[cfg(feature = "dom")]
pub mod dom_page;
pub mod raw_page;

use regex::Regex;
use tracing::debug;

pub use tally::Tally;

/// One parsed results page, ready for repeated candidate lookups.
///
/// Implementations own the recovery of structure from markup; the
/// matching code above them never inspects a tag.
pub trait PageScan {
    /// Row strings for every table row, in document order.
    fn table_rows(&self) -> &[String];

    /// The whole page as a single whitespace-collapsed text blob,
    /// script and style contents excluded.
    fn page_text(&self) -> &str;
}

/// Extracts candidate vote counts from one parsed page.
pub struct VoteExtractor {
    page: Box<dyn PageScan>,
}

impl VoteExtractor {
    /// Parse a page with the richest scanner this build carries.
    #[cfg(feature = "dom")]
    pub fn parse(html: &str) -> Self {
        Self::with_page(Box::new(dom_page::DomPage::parse(html)))
    }

    /// Parse a page with the regex-only scanner.
    #[cfg(not(feature = "dom"))]
    pub fn parse(html: &str) -> Self {
        Self::with_page(Box::new(raw_page::RawPage::parse(html)))
    }

    /// Use a specific page scanner.
    pub fn with_page(page: Box<dyn PageScan>) -> Self {
        Self { page }
    }

    /// Look up every candidate, in the order given.
    ///
    /// Every supplied name gets a key; candidates the page never
    /// mentions map to `None`. An empty candidate list yields an empty
    /// tally. This never fails, however mangled the input HTML was.
    pub fn extract(&self, candidates: &[String]) -> Tally {
        let mut tally = Tally::new();
        for name in candidates {
            tally.record(name, self.lookup(name));
        }
        tally
    }

    /// Table scan, then text scan, then count normalization.
    fn lookup(&self, name: &str) -> Option<u64> {
        let pattern = candidate_pattern(name)?;
        let token = table_scan::first_token_in_rows(self.page.table_rows(), &pattern)
            .or_else(|| {
                debug!(candidate = name, "no table row matched, scanning page text");
                text_scan::nearby_token(self.page.page_text(), name)
            });
        token.and_then(normalize::parse_count)
    }
}

/// Parse `html` once and extract counts for `candidates`.
pub fn extract_votes(html: &str, candidates: &[String]) -> Tally {
    VoteExtractor::parse(html).extract(candidates)
}

/// Case-insensitive literal pattern for a candidate name.
fn candidate_pattern(name: &str) -> Option<Regex> {
    Regex::new(&format!("(?i){}", regex::escape(name))).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_PAGE: &str =
        "<table><tr><td>Jane Doe</td><td>1,234</td></tr></table>";

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    /// Every available scanner over the same page, so each property
    /// holds regardless of which one a build selects.
    fn extractors(html: &str) -> Vec<VoteExtractor> {
        let mut all = vec![VoteExtractor::with_page(Box::new(
            raw_page::RawPage::parse(html),
        ))];
        #[cfg(feature = "dom")]
        all.push(VoteExtractor::with_page(Box::new(dom_page::DomPage::parse(
            html,
        ))));
        all
    }

    #[test]
    fn test_table_row_yields_count() {
        for ex in extractors(TABLE_PAGE) {
            let tally = ex.extract(&owned(&["Jane Doe"]));
            assert_eq!(tally.get("Jane Doe"), Some(Some(1234)));
        }
    }

    #[test]
    fn test_absent_candidate_is_recorded_as_none() {
        for ex in extractors(TABLE_PAGE) {
            let tally = ex.extract(&owned(&["John Smith"]));
            assert_eq!(tally.len(), 1);
            assert_eq!(tally.get("John Smith"), Some(None));
        }
    }

    #[test]
    fn test_empty_candidate_list_yields_empty_tally() {
        for ex in extractors(TABLE_PAGE) {
            assert!(ex.extract(&[]).is_empty());
        }
    }

    #[test]
    fn test_keys_preserve_input_order() {
        let page = "<table>\
            <tr><td>Zed Alpha</td><td>10</td></tr>\
            <tr><td>Ann Brown</td><td>20</td></tr>\
            </table>";
        for ex in extractors(page) {
            let tally = ex.extract(&owned(&["Zed Alpha", "Missing", "Ann Brown"]));
            let keys: Vec<&str> = tally.iter().map(|(name, _)| name).collect();
            assert_eq!(keys, vec!["Zed Alpha", "Missing", "Ann Brown"]);
        }
    }

    #[test]
    fn test_duplicate_candidate_keeps_one_key() {
        for ex in extractors(TABLE_PAGE) {
            let tally = ex.extract(&owned(&["Jane Doe", "Jane Doe"]));
            assert_eq!(tally.len(), 1);
            assert_eq!(tally.get("Jane Doe"), Some(Some(1234)));
        }
    }

    #[test]
    fn test_text_scan_name_then_number() {
        let page = "Jane Doe received 4,567 votes in the district";
        for ex in extractors(page) {
            let tally = ex.extract(&owned(&["Jane Doe"]));
            assert_eq!(tally.get("Jane Doe"), Some(Some(4567)));
        }
    }

    #[test]
    fn test_text_scan_number_then_name() {
        let page = "4,567 votes went to Jane Doe";
        for ex in extractors(page) {
            let tally = ex.extract(&owned(&["Jane Doe"]));
            assert_eq!(tally.get("Jane Doe"), Some(Some(4567)));
        }
    }

    #[test]
    fn test_candidate_match_is_case_insensitive() {
        for ex in extractors(TABLE_PAGE) {
            let tally = ex.extract(&owned(&["jane doe"]));
            assert_eq!(tally.get("jane doe"), Some(Some(1234)));
        }
    }

    #[test]
    fn test_grouped_number_is_one_token() {
        let page = "<p>Jane Doe 12,345</p>";
        for ex in extractors(page) {
            let tally = ex.extract(&owned(&["Jane Doe"]));
            assert_eq!(tally.get("Jane Doe"), Some(Some(12345)));
        }
    }

    #[test]
    fn test_first_token_wins_even_when_it_is_a_percentage() {
        // Documented ambiguity: the share column precedes the total.
        let page = "<table><tr>\
            <td>Jane Doe</td><td>51%</td><td>1,234</td>\
            </tr></table>";
        for ex in extractors(page) {
            let tally = ex.extract(&owned(&["Jane Doe"]));
            assert_eq!(tally.get("Jane Doe"), Some(Some(51)));
        }
    }

    #[test]
    fn test_table_hit_shadows_text_scan() {
        // The name appears in prose with a nearer number, but the
        // table row is consulted first.
        let page = "<p>Jane Doe leads with 99% reporting</p>\
            <table><tr><td>Jane Doe</td><td>1,234</td></tr></table>";
        for ex in extractors(page) {
            let tally = ex.extract(&owned(&["Jane Doe"]));
            assert_eq!(tally.get("Jane Doe"), Some(Some(1234)));
        }
    }

    #[test]
    fn test_number_far_from_name_is_not_matched() {
        let filler = "x".repeat(120);
        let page = format!("Jane Doe {filler} 4,567");
        for ex in extractors(&page) {
            let tally = ex.extract(&owned(&["Jane Doe"]));
            assert_eq!(tally.get("Jane Doe"), Some(None));
        }
    }

    #[test]
    fn test_regex_metacharacters_in_name_are_literal() {
        let page = "<table><tr><td>J. (Jay) Doe</td><td>42</td></tr></table>";
        for ex in extractors(page) {
            let tally = ex.extract(&owned(&["J. (Jay) Doe"]));
            assert_eq!(tally.get("J. (Jay) Doe"), Some(Some(42)));
        }
    }

    #[test]
    fn test_malformed_html_degrades_to_none() {
        let page = "<table><tr><td>Jane";
        for ex in extractors(page) {
            let tally = ex.extract(&owned(&["Jane Doe"]));
            assert_eq!(tally.get("Jane Doe"), Some(None));
        }
    }
}
