//! Structured page snapshot backed by the html5ever DOM.

use scraper::{Html, Selector};

use super::normalize::collapse_ws;
use super::PageScan;

/// Table rows and flattened text pulled from a parsed DOM.
///
/// html5ever's error recovery absorbs malformed markup, so parsing
/// never fails; at worst the page yields no rows and garbled text.
pub struct DomPage {
    rows: Vec<String>,
    text: String,
}

impl DomPage {
    /// Parse `html` and precompute the row strings and text blob.
    pub fn parse(html: &str) -> Self {
        let doc = Html::parse_document(html);
        Self {
            rows: collect_rows(&doc),
            text: flatten_text(&doc),
        }
    }
}

impl PageScan for DomPage {
    fn table_rows(&self) -> &[String] {
        &self.rows
    }

    fn page_text(&self) -> &str {
        &self.text
    }
}

/// Cell texts of every table row, joined with `" | "`, document order.
fn collect_rows(doc: &Html) -> Vec<String> {
    let mut rows = Vec::new();

    let (Ok(table_sel), Ok(tr_sel), Ok(cell_sel)) = (
        Selector::parse("table"),
        Selector::parse("tr"),
        Selector::parse("td, th"),
    ) else {
        return rows;
    };

    for table in doc.select(&table_sel) {
        for tr in table.select(&tr_sel) {
            let cells: Vec<String> = tr
                .select(&cell_sel)
                .map(|cell| collapse_ws(&cell.text().collect::<Vec<_>>().join(" ")))
                .collect();
            rows.push(cells.join(" | "));
        }
    }

    rows
}

/// Every text node outside script/style, collapsed into one blob.
fn flatten_text(doc: &Html) -> String {
    let mut out = String::new();

    for node in doc.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let skipped = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|el| el.name() == "script" || el.name() == "style");
        if !skipped {
            out.push_str(&text.text);
            out.push(' ');
        }
    }

    collapse_ws(&out)
}
