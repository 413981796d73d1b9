//! The JSON report produced for one results page.

use serde::Serialize;

use crate::extract::Tally;

/// Extraction output: where the page came from, and what was found.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    /// URL or file path the HTML was loaded from.
    pub source: String,
    /// Candidate name → extracted count, in the order requested.
    /// Candidates without a discoverable count serialize as `null`.
    pub candidates: Tally,
}
