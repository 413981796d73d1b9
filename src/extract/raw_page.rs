//! Regex-only page snapshot for builds without the DOM parser.
//!
//! Deliberately naive table recovery, sufficient for the small,
//! predictable pages election results tend to be. Unmatched tags
//! simply fall through the patterns; nothing here can fail.

use regex::Regex;
use std::sync::LazyLock;

use super::normalize::collapse_ws;
use super::PageScan;

static TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<table[^>]*>.*?</table>").unwrap());

static TR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr[^>]*>.*?</tr>").unwrap());

static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<t[dh][^>]*>(.*?)</t[dh]>").unwrap());

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());

static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());

/// Table rows and flattened text recovered with regular expressions.
pub struct RawPage {
    rows: Vec<String>,
    text: String,
}

impl RawPage {
    /// Scan `html` and precompute the row strings and text blob.
    pub fn parse(html: &str) -> Self {
        let mut rows = Vec::new();

        for table in TABLE_RE.find_iter(html) {
            for tr in TR_RE.find_iter(table.as_str()) {
                let cells: Vec<String> = CELL_RE
                    .captures_iter(tr.as_str())
                    .map(|caps| clean_fragment(caps.get(1).map_or("", |m| m.as_str())))
                    .collect();
                rows.push(cells.join(" | "));
            }
        }

        Self {
            rows,
            text: flatten_text(html),
        }
    }
}

impl PageScan for RawPage {
    fn table_rows(&self) -> &[String] {
        &self.rows
    }

    fn page_text(&self) -> &str {
        &self.text
    }
}

/// Strip tags, decode entities, collapse whitespace.
fn clean_fragment(fragment: &str) -> String {
    let stripped = TAG_RE.replace_all(fragment, " ");
    collapse_ws(&html_escape::decode_html_entities(&stripped))
}

/// The whole document as text, script and style blocks removed first.
fn flatten_text(html: &str) -> String {
    let without_scripts = SCRIPT_RE.replace_all(html, " ");
    let without_styles = STYLE_RE.replace_all(&without_scripts, " ");
    clean_fragment(&without_styles)
}
